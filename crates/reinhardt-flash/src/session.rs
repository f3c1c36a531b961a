//! Session contract consumed by the flash layer
//!
//! The flash store never owns session storage. It reads and writes string
//! values through [`Session`], which any cookie, cache or database backend
//! can implement.
//!
//! Backends must make keys written with [`Session::set`] visible to
//! [`Session::keys`] and [`Session::get`] on the same instance before
//! [`Session::save`] is called.

use crate::error::SessionError;

/// String-keyed session storage
///
/// # Example
///
/// ```rust
/// use reinhardt_flash::{MemorySession, Session};
///
/// let mut session = MemorySession::new();
/// session.set("user_id", "42".to_string());
/// session.set("_flash_notice", r#"["saved"]"#.to_string());
///
/// assert_eq!(session.keys_with_prefix("_flash_"), vec!["_flash_notice".to_string()]);
/// assert_eq!(session.delete_keys_with_prefix("_flash_"), 1);
/// assert_eq!(session.get("user_id").as_deref(), Some("42"));
/// ```
pub trait Session {
	/// Get a value
	fn get(&self, key: &str) -> Option<String>;

	/// Set a value, replacing any previous one
	fn set(&mut self, key: &str, value: String);

	/// Delete a value; no-op when absent
	fn delete(&mut self, key: &str);

	/// All keys currently stored
	fn keys(&self) -> Vec<String>;

	/// Commit the session to its backing store
	fn save(&mut self) -> Result<(), SessionError>;

	/// Whether the session holds no values
	fn is_empty(&self) -> bool {
		self.keys().is_empty()
	}

	/// Keys starting with `prefix`
	///
	/// Backends may provide more efficient implementations.
	fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
		self.keys()
			.into_iter()
			.filter(|key| key.starts_with(prefix))
			.collect()
	}

	/// Delete every key starting with `prefix`
	///
	/// # Returns
	///
	/// Returns the number of deleted keys.
	fn delete_keys_with_prefix(&mut self, prefix: &str) -> usize {
		let keys = self.keys_with_prefix(prefix);
		for key in &keys {
			self.delete(key);
		}
		keys.len()
	}
}

impl<S: Session + ?Sized> Session for &mut S {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: String) {
		(**self).set(key, value);
	}

	fn delete(&mut self, key: &str) {
		(**self).delete(key);
	}

	fn keys(&self) -> Vec<String> {
		(**self).keys()
	}

	fn save(&mut self) -> Result<(), SessionError> {
		(**self).save()
	}

	fn is_empty(&self) -> bool {
		(**self).is_empty()
	}

	fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
		(**self).keys_with_prefix(prefix)
	}

	fn delete_keys_with_prefix(&mut self, prefix: &str) -> usize {
		(**self).delete_keys_with_prefix(prefix)
	}
}

impl<S: Session + ?Sized> Session for Box<S> {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: String) {
		(**self).set(key, value);
	}

	fn delete(&mut self, key: &str) {
		(**self).delete(key);
	}

	fn keys(&self) -> Vec<String> {
		(**self).keys()
	}

	fn save(&mut self) -> Result<(), SessionError> {
		(**self).save()
	}

	fn is_empty(&self) -> bool {
		(**self).is_empty()
	}

	fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
		(**self).keys_with_prefix(prefix)
	}

	fn delete_keys_with_prefix(&mut self, prefix: &str) -> usize {
		(**self).delete_keys_with_prefix(prefix)
	}
}
