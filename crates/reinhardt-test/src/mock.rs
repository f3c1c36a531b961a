//! Session doubles for flash tests

use reinhardt_flash::{MemorySession, Session, SessionError};
use std::cell::RefCell;

/// Call record for a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
	Get(String),
	Set(String, String),
	Delete(String),
	Keys,
	Save,
}

/// Session that records every call made to it
///
/// Storage is delegated to a [`MemorySession`]. Saves can be made to fail to
/// exercise backend error paths.
///
/// # Examples
///
/// ```
/// use reinhardt_flash::FlashStore;
/// use reinhardt_test::mock::{RecordingSession, SessionCall};
///
/// let mut session = RecordingSession::new().with_value("_flash_old", "[]");
/// FlashStore::new().persist(&mut session).unwrap();
///
/// assert!(session.calls().contains(&SessionCall::Delete("_flash_old".to_string())));
/// assert_eq!(session.calls().last(), Some(&SessionCall::Save));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSession {
	inner: MemorySession,
	calls: RefCell<Vec<SessionCall>>,
	fail_saves: bool,
}

impl RecordingSession {
	/// Create an empty recording session
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a value without recording a call
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.inner = self.inner.with_value(key, value);
		self
	}

	/// Make every `save` fail with a backend error
	pub fn failing_saves(mut self) -> Self {
		self.fail_saves = true;
		self
	}

	/// Calls recorded so far
	pub fn calls(&self) -> Vec<SessionCall> {
		self.calls.borrow().clone()
	}

	/// Forget recorded calls
	pub fn reset_calls(&self) {
		self.calls.borrow_mut().clear();
	}

	/// Number of successful saves
	pub fn save_count(&self) -> usize {
		self.inner.save_count()
	}

	/// Underlying storage
	pub fn inner(&self) -> &MemorySession {
		&self.inner
	}

	fn record(&self, call: SessionCall) {
		self.calls.borrow_mut().push(call);
	}
}

impl Session for RecordingSession {
	fn get(&self, key: &str) -> Option<String> {
		self.record(SessionCall::Get(key.to_string()));
		self.inner.get(key)
	}

	fn set(&mut self, key: &str, value: String) {
		self.record(SessionCall::Set(key.to_string(), value.clone()));
		self.inner.set(key, value);
	}

	fn delete(&mut self, key: &str) {
		self.record(SessionCall::Delete(key.to_string()));
		self.inner.delete(key);
	}

	fn keys(&self) -> Vec<String> {
		self.record(SessionCall::Keys);
		self.inner.keys()
	}

	fn save(&mut self) -> Result<(), SessionError> {
		self.record(SessionCall::Save);
		if self.fail_saves {
			return Err(SessionError::Backend("save rejected by test double".to_string()));
		}
		self.inner.save()
	}
}
