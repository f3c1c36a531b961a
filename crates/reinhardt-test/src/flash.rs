//! Flash assertion utilities for testing
//!
//! These helpers inspect what a request left behind in its session, which is
//! what the next request after a redirect will see.

use reinhardt_flash::codec::decode_values;
use reinhardt_flash::{FlashNamespace, Session};

/// Error type for flash assertion failures
#[derive(Debug, thiserror::Error)]
pub enum FlashAssertionError {
	#[error("Flash values mismatch: expected {expected:?}, got {actual:?}")]
	ValuesMismatch {
		expected: Vec<String>,
		actual: Vec<String>,
	},

	#[error("Flash key not found in session: {session_key}")]
	MissingKey { session_key: String },

	#[error("Flash entry {session_key} is not a JSON string array: {raw}")]
	Undecodable { session_key: String, raw: String },

	#[error("Stale flash keys left in session: {keys:?}")]
	StaleKeys { keys: Vec<String> },

	#[error("Non-flash session key changed: {key} (before {before:?}, after {after:?})")]
	ForeignKeyChanged {
		key: String,
		before: Option<String>,
		after: Option<String>,
	},
}

/// Result type for flash assertions
pub type FlashAssertionResult<T> = Result<T, FlashAssertionError>;

/// Assert that flash values match the expected list (order-sensitive)
///
/// # Examples
///
/// ```rust
/// use reinhardt_flash::FlashStore;
/// use reinhardt_test::flash::assert_flash_values;
///
/// let mut flash = FlashStore::new();
/// flash.add("errors", "first");
/// flash.add("errors", "second");
/// assert_flash_values(&flash.get("errors"), &["first", "second"]).unwrap();
/// ```
pub fn assert_flash_values(actual: &[String], expected: &[&str]) -> FlashAssertionResult<()> {
	if actual.iter().map(String::as_str).ne(expected.iter().copied()) {
		return Err(FlashAssertionError::ValuesMismatch {
			expected: expected.iter().map(|value| value.to_string()).collect(),
			actual: actual.to_vec(),
		});
	}
	Ok(())
}

/// Assert that the session stores `expected` for a flash key
///
/// Uses the default `"_flash_"` namespace.
///
/// # Examples
///
/// ```rust
/// use reinhardt_flash::MemorySession;
/// use reinhardt_test::flash::assert_session_flash;
///
/// let session = MemorySession::new().with_value("_flash_notice", r#"["saved"]"#);
/// assert_session_flash(&session, "notice", &["saved"]).unwrap();
/// assert!(assert_session_flash(&session, "errors", &[]).is_err());
/// ```
pub fn assert_session_flash<S: Session + ?Sized>(
	session: &S,
	key: &str,
	expected: &[&str],
) -> FlashAssertionResult<()> {
	assert_session_flash_in(session, &FlashNamespace::default(), key, expected)
}

/// Assert that the session stores `expected` for a flash key in `namespace`
pub fn assert_session_flash_in<S: Session + ?Sized>(
	session: &S,
	namespace: &FlashNamespace,
	key: &str,
	expected: &[&str],
) -> FlashAssertionResult<()> {
	let session_key = namespace.qualify(key);
	let raw = session
		.get(&session_key)
		.ok_or_else(|| FlashAssertionError::MissingKey {
			session_key: session_key.clone(),
		})?;
	let actual = decode_values(&raw)
		.map_err(|_| FlashAssertionError::Undecodable { session_key, raw })?;
	assert_flash_values(&actual, expected)
}

/// Assert that no flash-owned keys remain in the session
pub fn assert_no_flash_keys<S: Session + ?Sized>(session: &S) -> FlashAssertionResult<()> {
	let mut keys = session.keys_with_prefix(FlashNamespace::default().prefix());
	if !keys.is_empty() {
		keys.sort();
		return Err(FlashAssertionError::StaleKeys { keys });
	}
	Ok(())
}

/// Assert that every non-flash key has the same value in both sessions
///
/// # Examples
///
/// ```rust
/// use reinhardt_flash::{FlashStore, MemorySession};
/// use reinhardt_test::flash::assert_foreign_keys_preserved;
///
/// let before = MemorySession::new().with_value("user_id", "42");
/// let mut after = before.clone();
/// FlashStore::new().persist(&mut after).unwrap();
///
/// assert_foreign_keys_preserved(&before, &after).unwrap();
/// ```
pub fn assert_foreign_keys_preserved<B, A>(before: &B, after: &A) -> FlashAssertionResult<()>
where
	B: Session + ?Sized,
	A: Session + ?Sized,
{
	let namespace = FlashNamespace::default();
	let mut keys: Vec<String> = before
		.keys()
		.into_iter()
		.chain(after.keys())
		.filter(|key| !namespace.owns(key))
		.collect();
	keys.sort();
	keys.dedup();

	for key in keys {
		let (was, now) = (before.get(&key), after.get(&key));
		if was != now {
			return Err(FlashAssertionError::ForeignKeyChanged {
				key,
				before: was,
				after: now,
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_flash::MemorySession;
	use rstest::rstest;

	#[rstest]
	fn test_assert_flash_values_success() {
		let values = vec!["a".to_string(), "b".to_string()];
		assert!(assert_flash_values(&values, &["a", "b"]).is_ok());
	}

	#[rstest]
	#[case(&["b", "a"])]
	#[case(&["a"])]
	#[case(&[])]
	fn test_assert_flash_values_failure(#[case] expected: &[&str]) {
		let values = vec!["a".to_string(), "b".to_string()];
		assert!(matches!(
			assert_flash_values(&values, expected),
			Err(FlashAssertionError::ValuesMismatch { .. })
		));
	}

	#[rstest]
	fn test_assert_session_flash_missing() {
		let session = MemorySession::new();
		assert!(matches!(
			assert_session_flash(&session, "notice", &["saved"]),
			Err(FlashAssertionError::MissingKey { session_key }) if session_key == "_flash_notice"
		));
	}

	#[rstest]
	fn test_assert_session_flash_undecodable() {
		let session = MemorySession::new().with_value("_flash_notice", "saved");
		assert!(matches!(
			assert_session_flash(&session, "notice", &["saved"]),
			Err(FlashAssertionError::Undecodable { .. })
		));
	}

	#[rstest]
	fn test_assert_session_flash_custom_namespace() {
		let session = MemorySession::new().with_value("_admin_flash_notice", r#"["hi"]"#);
		let namespace = FlashNamespace::new("_admin_flash_");
		assert!(assert_session_flash_in(&session, &namespace, "notice", &["hi"]).is_ok());
	}

	#[rstest]
	fn test_assert_no_flash_keys_reports_sorted() {
		let session = MemorySession::new()
			.with_value("_flash_b", "[]")
			.with_value("_flash_a", "[]")
			.with_value("user_id", "1");

		match assert_no_flash_keys(&session) {
			Err(FlashAssertionError::StaleKeys { keys }) => {
				assert_eq!(keys, vec!["_flash_a", "_flash_b"]);
			}
			other => panic!("expected stale keys, got {other:?}"),
		}
	}

	#[rstest]
	fn test_assert_foreign_keys_preserved_detects_change() {
		let before = MemorySession::new().with_value("user_id", "1");
		let after = MemorySession::new().with_value("user_id", "2");

		assert!(matches!(
			assert_foreign_keys_preserved(&before, &after),
			Err(FlashAssertionError::ForeignKeyChanged { key, .. }) if key == "user_id"
		));
	}

	#[rstest]
	fn test_assert_foreign_keys_preserved_ignores_flash() {
		let before = MemorySession::new().with_value("_flash_notice", "[]");
		let after = MemorySession::new();

		assert!(assert_foreign_keys_preserved(&before, &after).is_ok());
	}
}
