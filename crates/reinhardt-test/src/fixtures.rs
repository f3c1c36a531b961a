//! rstest fixtures for flash tests
//!
//! ```rust,ignore
//! use reinhardt_flash::{FlashStore, MemorySession};
//! use reinhardt_test::fixtures::seeded_session;
//! use rstest::rstest;
//!
//! #[rstest]
//! fn test_notice_survives_redirect(seeded_session: MemorySession) {
//!     let mut flash = FlashStore::load(&seeded_session);
//!     assert_eq!(flash.get("notice"), vec!["Welcome back".to_string()]);
//! }
//! ```

use reinhardt_flash::{FlashStore, MemorySession};
use rstest::fixture;

/// Non-flash keys seeded into [`seeded_session`]
pub const SEEDED_FOREIGN_KEYS: [(&str, &str); 2] =
	[("user_id", "42"), ("csrf_token", "9f8e7d6c5b4a")];

/// Empty in-memory session
#[fixture]
pub fn memory_session() -> MemorySession {
	MemorySession::new()
}

/// Session left behind by a previous request
///
/// Holds a pending `notice`, two `errors`, and the non-flash keys in
/// [`SEEDED_FOREIGN_KEYS`].
#[fixture]
pub fn seeded_session() -> MemorySession {
	SEEDED_FOREIGN_KEYS
		.into_iter()
		.chain([
			("_flash_notice", r#"["Welcome back"]"#),
			("_flash_errors", r#"["name required","email invalid"]"#),
		])
		.collect()
}

/// Empty flash store with the default namespace
#[fixture]
pub fn flash_store() -> FlashStore {
	FlashStore::new()
}
