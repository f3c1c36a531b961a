//! # Reinhardt Test
//!
//! Testing utilities for reinhardt flash messages.
//!
//! ## Features
//!
//! - **Fixtures**: rstest fixtures for sessions and flash stores
//! - **Flash Assertions**: check what a request left in its session
//! - **[`RecordingSession`]**: session double that records every call and can fail on save
//! - **Logging**: one-time test subscriber and a log capture layer
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_flash::FlashStore;
//! use reinhardt_test::flash::{assert_no_flash_keys, assert_session_flash};
//! use reinhardt_test::RecordingSession;
//!
//! let mut session = RecordingSession::new();
//!
//! let mut flash = FlashStore::load(&session);
//! flash.add("errors", "name required");
//! flash.persist(&mut session).unwrap();
//!
//! assert_session_flash(&session, "errors", &["name required"]).unwrap();
//!
//! FlashStore::new().persist(&mut session).unwrap();
//! assert_no_flash_keys(&session).unwrap();
//! ```

pub mod fixtures;
pub mod flash;
pub mod logging;
pub mod mock;

pub use fixtures::{flash_store, memory_session, seeded_session};
pub use flash::{FlashAssertionError, FlashAssertionResult};
pub use logging::{LogCapture, init_test_logging};
pub use mock::{RecordingSession, SessionCall};
