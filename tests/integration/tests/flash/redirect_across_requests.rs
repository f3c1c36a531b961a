//! Flash messages across a POST/redirect/GET, through the facade

use reinhardt::prelude::*;
use reinhardt::test::flash::{assert_foreign_keys_preserved, assert_no_flash_keys};
use reinhardt_integration_tests::post_redirect_get;
use rstest::rstest;

#[rstest]
fn test_form_errors_render_once() {
	let mut session = MemorySession::new().with_value("user_id", "42");
	let before = session.clone();

	let context = post_redirect_get(&mut session, |flash| {
		flash.add("errors", "name required");
		flash.add("errors", "email invalid");
	})
	.unwrap();

	assert_eq!(
		context.to_json(),
		serde_json::json!({"errors": ["name required", "email invalid"]})
	);
	assert_no_flash_keys(&session).unwrap();
	assert_foreign_keys_preserved(&before, &session).unwrap();
	assert_eq!(session.save_count(), 2);
}

#[rstest]
fn test_nothing_flashed_renders_empty_context() {
	let mut session = MemorySession::new();

	let context = post_redirect_get(&mut session, |_| ()).unwrap();

	assert!(context.is_empty());
	assert!(session.is_empty());
}
