//! # Reinhardt Flash
//!
//! One-shot flash messages carried across a single redirect.
//!
//! A [`FlashStore`] is hydrated from a [`Session`] at the start of a request,
//! mutated by handlers, and written back with [`FlashStore::persist`] before
//! the response completes. Reads are destructive: [`FlashStore::get`],
//! [`FlashStore::all`] and [`FlashStore::errors`] delete what they return.
//!
//! ## Features
//!
//! - **Read-once access**: a value can be observed once per store instance
//! - **Session contract**: any key/value backend implementing [`Session`]
//! - **Namespacing**: flash data lives under the `"_flash_"` prefix, next to other session data
//! - **Template context**: [`FlashContext`] drains the store into a serializable snapshot
//! - **Reference backends**: [`MemorySession`] and [`FileSession`]
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash::{FlashStore, MemorySession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = MemorySession::new();
//!
//! // POST handler: record a validation error, then redirect
//! let mut flash = FlashStore::load(&session);
//! flash.add("errors", "name required");
//! flash.persist(&mut session)?;
//!
//! // GET handler after the redirect
//! let mut flash = FlashStore::load(&session);
//! assert_eq!(flash.errors(), vec!["name required".to_string()]);
//! assert!(flash.errors().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod flash;
pub mod lifecycle;
pub mod namespace;
pub mod session;

pub use backends::{FileSession, MemorySession};
pub use config::FlashConfig;
pub use context::FlashContext;
pub use error::{FlashError, Result, SessionError};
pub use flash::FlashStore;
pub use lifecycle::{with_default_flash, with_flash};
pub use namespace::{FLASH_PREFIX, FlashNamespace};
pub use session::Session;

/// Re-export commonly used types
pub mod prelude {
	pub use crate::backends::*;
	pub use crate::config::*;
	pub use crate::context::*;
	pub use crate::error::{FlashError, SessionError};
	pub use crate::flash::*;
	pub use crate::lifecycle::*;
	pub use crate::namespace::*;
	pub use crate::session::*;
}
