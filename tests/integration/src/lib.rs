//! Integration test utilities for Reinhardt Flash
//!
//! Helpers that drive the public facade the way an application would:
//! one request that writes flash messages, a redirect, and the request that
//! reads them.

use reinhardt::{FlashContext, FlashError, FlashStore, Session, with_default_flash};

/// Play a POST/redirect/GET pair against one session
///
/// `post` runs inside the first request's flash cycle. The second request
/// drains the flash into a [`FlashContext`], as a template render would.
pub fn post_redirect_get<S, F>(session: &mut S, post: F) -> Result<FlashContext, FlashError>
where
	S: Session + ?Sized,
	F: FnOnce(&mut FlashStore),
{
	with_default_flash(session, post)?;
	with_default_flash(session, FlashContext::drain)
}
