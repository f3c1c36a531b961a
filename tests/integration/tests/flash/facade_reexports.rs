//! Facade re-export checks

use reinhardt::prelude::*;
use reinhardt::test::flash::assert_no_flash_keys;
use reinhardt::test::mock::RecordingSession;
use rstest::rstest;

#[rstest]
fn test_prelude_covers_request_cycle() {
	let mut session = MemorySession::new().with_value("theme", "dark");

	with_default_flash(&mut session, |flash| flash.add("errors", "name required")).unwrap();
	let context = with_default_flash(&mut session, FlashContext::drain).unwrap();

	assert_eq!(context.errors(), ["name required".to_string()]);
	assert_eq!(session.keys(), vec!["theme".to_string()]);
}

#[rstest]
fn test_prefix_constant_is_reexported() {
	assert_eq!(reinhardt::FLASH_PREFIX, "_flash_");
	assert_eq!(reinhardt::flash::FLASH_PREFIX, reinhardt::FLASH_PREFIX);
}

#[rstest]
fn test_testing_utilities_are_reexported() {
	let mut session = RecordingSession::new();
	FlashStore::new().persist(&mut session).unwrap();

	assert_no_flash_keys(&session).unwrap();
	assert_eq!(session.save_count(), 1);
}
