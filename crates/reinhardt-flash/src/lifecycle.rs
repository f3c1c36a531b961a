//! Request-scoped flash lifecycle
//!
//! A request owns exactly one flash store: hydrated when handling starts and
//! persisted once before the response is sent. [`with_flash`] wraps a handler
//! in that cycle.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash::{MemorySession, with_default_flash};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = MemorySession::new();
//!
//! // POST /profile: validation failed, redirect back
//! with_default_flash(&mut session, |flash| {
//!     flash.add("errors", "email invalid");
//! })?;
//!
//! // GET /profile: render the form with the errors
//! let errors = with_default_flash(&mut session, |flash| flash.errors())?;
//! assert_eq!(errors, vec!["email invalid".to_string()]);
//!
//! // A second GET finds nothing
//! let errors = with_default_flash(&mut session, |flash| flash.errors())?;
//! assert!(errors.is_empty());
//! # Ok(())
//! # }
//! ```

use crate::config::FlashConfig;
use crate::error::Result;
use crate::flash::FlashStore;
use crate::session::Session;

/// Run `handler` inside one hydrate/persist cycle
///
/// The store is persisted after `handler` returns, whatever it did to the
/// store. Configuration and session save failures are returned; the
/// handler's output is discarded in that case.
pub fn with_flash<S, F, R>(session: &mut S, config: &FlashConfig, handler: F) -> Result<R>
where
	S: Session + ?Sized,
	F: FnOnce(&mut FlashStore) -> R,
{
	let mut flash = FlashStore::load_with_config(&*session, config)?;
	let output = handler(&mut flash);
	flash.persist(session)?;
	Ok(output)
}

/// [`with_flash`] with the default configuration
pub fn with_default_flash<S, F, R>(session: &mut S, handler: F) -> Result<R>
where
	S: Session + ?Sized,
	F: FnOnce(&mut FlashStore) -> R,
{
	with_flash(session, &FlashConfig::default(), handler)
}
