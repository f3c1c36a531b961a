//! # Reinhardt Flash
//!
//! Flash messages for Reinhardt: one-shot notifications, such as form errors
//! or success banners, carried across a single redirect through the session.
//!
//! ## Feature Flags
//!
//! - `flash` (default) - Flash store, session contract and reference backends
//! - `test` - Testing utilities (fixtures, assertions, recording session)
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = MemorySession::new();
//!
//! // Request 1: set a banner and redirect
//! with_default_flash(&mut session, |flash| flash.set("notice", "Profile saved"))?;
//!
//! // Request 2: render it
//! let context = with_default_flash(&mut session, FlashContext::drain)?;
//! assert_eq!(context.get("notice"), ["Profile saved".to_string()]);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "flash")]
pub use reinhardt_flash as flash;

#[cfg(feature = "test")]
pub use reinhardt_test as test;

#[cfg(feature = "flash")]
pub use reinhardt_flash::{
	FLASH_PREFIX, FileSession, FlashConfig, FlashContext, FlashError, FlashNamespace, FlashStore,
	MemorySession, Session, SessionError, with_default_flash, with_flash,
};

/// Re-export commonly used types
pub mod prelude {
	#[cfg(feature = "flash")]
	pub use reinhardt_flash::prelude::*;
}
