//! In-memory session backend

use crate::error::SessionError;
use crate::session::Session;
use std::collections::HashMap;

/// In-memory session
///
/// Values live only as long as the instance. `save` never fails and is
/// counted, which lets tests assert that a request committed its session.
///
/// # Examples
///
/// ```
/// use reinhardt_flash::{MemorySession, Session};
///
/// let mut session = MemorySession::new().with_value("user_id", "42");
/// session.save().unwrap();
///
/// assert_eq!(session.get("user_id").as_deref(), Some("42"));
/// assert_eq!(session.save_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
	values: HashMap<String, String>,
	saves: usize,
}

impl MemorySession {
	/// Create an empty session
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a value
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Number of successful `save` calls
	pub fn save_count(&self) -> usize {
		self.saves
	}

	/// Snapshot of the stored values
	pub fn values(&self) -> &HashMap<String, String> {
		&self.values
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySession {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
			saves: 0,
		}
	}
}

impl Session for MemorySession {
	fn get(&self, key: &str) -> Option<String> {
		self.values.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) {
		self.values.insert(key.to_string(), value);
	}

	fn delete(&mut self, key: &str) {
		self.values.remove(key);
	}

	fn keys(&self) -> Vec<String> {
		self.values.keys().cloned().collect()
	}

	fn save(&mut self) -> Result<(), SessionError> {
		self.saves += 1;
		Ok(())
	}

	fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
