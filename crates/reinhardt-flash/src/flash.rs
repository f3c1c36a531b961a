//! Flash store
//!
//! [`FlashStore`] maps a flash key to an ordered list of messages. It is
//! created per request by hydrating from a [`Session`], consumed by
//! destructive reads, and written back by [`FlashStore::persist`].
//!
//! Nothing becomes durable without `persist`: a store dropped at the end of
//! a request leaves the session as it was.

use crate::codec;
use crate::config::{DEFAULT_ERRORS_KEY, FlashConfig};
use crate::error::{Result, SessionError};
use crate::namespace::FlashNamespace;
use crate::session::Session;
use std::collections::HashMap;

/// Per-request flash message store
///
/// # Examples
///
/// ```
/// use reinhardt_flash::FlashStore;
///
/// let mut flash = FlashStore::new();
/// flash.add("notice", "Saved");
/// flash.add("notice", "Email sent");
///
/// assert_eq!(flash.get("notice"), vec!["Saved".to_string(), "Email sent".to_string()]);
/// // Reads consume
/// assert!(flash.get("notice").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FlashStore {
	data: HashMap<String, Vec<String>>,
	namespace: FlashNamespace,
	errors_key: String,
}

impl FlashStore {
	/// Create an empty store with the default namespace
	pub fn new() -> Self {
		Self {
			data: HashMap::new(),
			namespace: FlashNamespace::default(),
			errors_key: DEFAULT_ERRORS_KEY.to_string(),
		}
	}

	/// Create an empty store from a configuration
	pub fn with_config(config: &FlashConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			data: HashMap::new(),
			namespace: config.namespace(),
			errors_key: config.errors_key.clone(),
		})
	}

	/// Hydrate a store from a session using the default namespace
	///
	/// Entries that fail to decode are dropped without error.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::{FlashStore, MemorySession};
	///
	/// let session = MemorySession::new()
	///     .with_value("_flash_notice", r#"["saved"]"#)
	///     .with_value("_flash_broken", "{not json")
	///     .with_value("user_id", "42");
	///
	/// let flash = FlashStore::load(&session);
	/// assert_eq!(flash.keys(), vec!["notice"]);
	/// ```
	pub fn load<S: Session + ?Sized>(session: &S) -> Self {
		let mut store = Self::new();
		store.hydrate(session);
		store
	}

	/// Hydrate a store from a session using a configuration
	///
	/// Only configuration errors are reported; undecodable entries are
	/// dropped as with [`FlashStore::load`].
	pub fn load_with_config<S: Session + ?Sized>(
		session: &S,
		config: &FlashConfig,
	) -> Result<Self> {
		let mut store = Self::with_config(config)?;
		store.hydrate(session);
		Ok(store)
	}

	fn hydrate<S: Session + ?Sized>(&mut self, session: &S) {
		if session.is_empty() {
			return;
		}

		let mut skipped = 0usize;
		for session_key in session.keys_with_prefix(self.namespace.prefix()) {
			let Some(key) = self.namespace.strip(&session_key) else {
				continue;
			};
			let Some(raw) = session.get(&session_key) else {
				continue;
			};
			match codec::decode_values(&raw) {
				Ok(values) => {
					self.data.insert(key.to_string(), values);
				}
				Err(error) => {
					skipped += 1;
					tracing::warn!(
						session_key = %session_key,
						error = %error,
						"Discarding undecodable flash entry"
					);
				}
			}
		}

		tracing::debug!(
			prefix = %self.namespace.prefix(),
			loaded = self.data.len(),
			skipped = skipped,
			"Flash hydrated from session"
		);
	}

	/// Replace the messages for `key` with a single message
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.data.insert(key.into(), vec![value.into()]);
	}

	/// Append a message for `key`
	///
	/// Behaves like [`FlashStore::set`] when `key` has no messages.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.data.entry(key.into()).or_default().push(value.into());
	}

	/// Take the messages for `key`
	///
	/// Returns an empty list when the key is absent. The key is removed
	/// either way.
	pub fn get(&mut self, key: &str) -> Vec<String> {
		self.data.remove(key).unwrap_or_default()
	}

	/// Remove `key`; no-op when absent
	pub fn delete(&mut self, key: &str) {
		self.data.remove(key);
	}

	/// Take every key's messages, leaving the store empty
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::FlashStore;
	///
	/// let mut flash = FlashStore::new();
	/// flash.set("errors", "bad input");
	/// flash.set("notice", "saved");
	///
	/// let all = flash.all();
	/// assert_eq!(all.len(), 2);
	/// assert!(flash.is_empty());
	/// ```
	pub fn all(&mut self) -> HashMap<String, Vec<String>> {
		std::mem::take(&mut self.data)
	}

	/// Discard every message
	pub fn clear(&mut self) {
		self.data.clear();
	}

	/// Take the error messages
	///
	/// Same as `get` on the configured errors key (`"errors"` by default).
	pub fn errors(&mut self) -> Vec<String> {
		self.data.remove(&self.errors_key).unwrap_or_default()
	}

	/// Number of keys holding messages
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the store holds no keys
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Whether `key` is present, without consuming it
	pub fn contains_key(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}

	/// Present keys, sorted
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	/// Namespace used for hydrate and persist
	pub fn namespace(&self) -> &FlashNamespace {
		&self.namespace
	}

	/// Key consumed by [`FlashStore::errors`]
	pub fn errors_key(&self) -> &str {
		&self.errors_key
	}

	/// Write the store into the session and save it
	///
	/// Every flash-owned key is first removed from the session, then each
	/// current entry is written under its qualified key, then the session is
	/// saved. Entries that fail to encode are skipped. Save failures are
	/// returned unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::{FlashStore, MemorySession, Session};
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let mut session = MemorySession::new().with_value("_flash_stale", r#"["old"]"#);
	///
	/// let mut flash = FlashStore::new();
	/// flash.set("errors", "name required");
	/// flash.persist(&mut session)?;
	///
	/// assert_eq!(session.get("_flash_stale"), None);
	/// assert_eq!(session.get("_flash_errors").as_deref(), Some(r#"["name required"]"#));
	/// assert_eq!(session.save_count(), 1);
	/// # Ok(())
	/// # }
	/// ```
	pub fn persist<S: Session + ?Sized>(
		&self,
		session: &mut S,
	) -> std::result::Result<(), SessionError> {
		let swept = session.delete_keys_with_prefix(self.namespace.prefix());

		let mut written = 0usize;
		for (key, values) in &self.data {
			match codec::encode_values(values) {
				Ok(encoded) => {
					session.set(&self.namespace.qualify(key), encoded);
					written += 1;
				}
				Err(error) => {
					tracing::warn!(
						key = %key,
						error = %error,
						"Skipping unencodable flash entry"
					);
				}
			}
		}

		tracing::debug!(
			prefix = %self.namespace.prefix(),
			swept = swept,
			written = written,
			"Flash persisted to session"
		);

		session.save()
	}
}

impl Default for FlashStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backends::MemorySession;
	use rstest::{fixture, rstest};

	#[fixture]
	fn flash() -> FlashStore {
		FlashStore::new()
	}

	#[rstest]
	fn test_set_then_get_is_read_once(mut flash: FlashStore) {
		flash.set("notice", "saved");

		assert_eq!(flash.get("notice"), vec!["saved"]);
		assert!(flash.get("notice").is_empty());
	}

	#[rstest]
	fn test_set_replaces_previous_values(mut flash: FlashStore) {
		flash.add("notice", "one");
		flash.add("notice", "two");
		flash.set("notice", "three");

		assert_eq!(flash.get("notice"), vec!["three"]);
	}

	#[rstest]
	fn test_add_preserves_order(mut flash: FlashStore) {
		flash.add("errors", "name required");
		flash.add("errors", "email invalid");

		assert_eq!(flash.get("errors"), vec!["name required", "email invalid"]);
	}

	#[rstest]
	fn test_add_on_empty_key_behaves_like_set(mut flash: FlashStore) {
		let mut expected = FlashStore::new();
		expected.set("notice", "hello");

		flash.add("notice", "hello");

		assert_eq!(flash.all(), expected.all());
	}

	#[rstest]
	fn test_add_after_empty_hydrated_list() {
		let session = MemorySession::new().with_value("_flash_notice", "[]");
		let mut flash = FlashStore::load(&session);
		assert!(flash.contains_key("notice"));

		flash.add("notice", "hello");

		assert_eq!(flash.get("notice"), vec!["hello"]);
	}

	#[rstest]
	fn test_get_absent_removes_nothing_else(mut flash: FlashStore) {
		flash.set("notice", "saved");

		assert!(flash.get("missing").is_empty());
		assert_eq!(flash.len(), 1);
	}

	#[rstest]
	fn test_get_removes_key_with_empty_list() {
		let session = MemorySession::new().with_value("_flash_notice", "[]");
		let mut flash = FlashStore::load(&session);

		assert!(flash.get("notice").is_empty());
		assert!(!flash.contains_key("notice"));
	}

	#[rstest]
	fn test_delete_only_removes_target(mut flash: FlashStore) {
		flash.set("errors", "bad");
		flash.set("notice", "saved");

		flash.delete("errors");
		flash.delete("missing");

		assert_eq!(flash.keys(), vec!["notice"]);
	}

	#[rstest]
	fn test_all_snapshots_and_empties(mut flash: FlashStore) {
		flash.set("errors", "bad input");
		flash.add("notice", "saved");
		flash.add("notice", "mailed");

		let all = flash.all();

		assert_eq!(all.len(), 2);
		assert_eq!(all["errors"], vec!["bad input"]);
		assert_eq!(all["notice"], vec!["saved", "mailed"]);
		assert!(flash.is_empty());
		assert!(flash.get("errors").is_empty());
		assert!(flash.all().is_empty());
	}

	#[rstest]
	fn test_clear(mut flash: FlashStore) {
		flash.set("errors", "bad input");
		flash.set("notice", "saved");

		flash.clear();

		assert!(flash.is_empty());
	}

	#[rstest]
	fn test_errors_is_get_errors(mut flash: FlashStore) {
		flash.add("errors", "a");
		flash.add("errors", "b");
		let mut other = flash.clone();

		assert_eq!(flash.errors(), other.get("errors"));
		assert!(flash.errors().is_empty());
		assert!(other.get("errors").is_empty());
	}

	#[rstest]
	fn test_errors_uses_configured_key() {
		let config = FlashConfig::new().with_errors_key("form_errors");
		let mut flash = FlashStore::with_config(&config).unwrap();
		flash.set("errors", "ignored");
		flash.set("form_errors", "picked");

		assert_eq!(flash.errors(), vec!["picked"]);
		assert!(flash.contains_key("errors"));
	}

	#[rstest]
	fn test_with_config_rejects_empty_prefix() {
		let config = FlashConfig::new().with_prefix("");

		assert!(FlashStore::with_config(&config).is_err());
		assert!(FlashStore::load_with_config(&MemorySession::new(), &config).is_err());
	}

	#[rstest]
	fn test_load_skips_undecodable_entries() {
		let session = MemorySession::new()
			.with_value("_flash_notice", r#"["saved"]"#)
			.with_value("_flash_broken", "{")
			.with_value("_flash_numbers", "[1,2]");

		let mut flash = FlashStore::load(&session);

		assert_eq!(flash.keys(), vec!["notice"]);
		assert_eq!(flash.get("notice"), vec!["saved"]);
	}

	#[rstest]
	fn test_load_ignores_foreign_keys() {
		let session = MemorySession::new()
			.with_value("user_id", r#"["looks like flash"]"#)
			.with_value("flash_notice", r#"["no leading underscore"]"#);

		let flash = FlashStore::load(&session);

		assert!(flash.is_empty());
	}

	#[rstest]
	fn test_load_does_not_modify_session() {
		let session = MemorySession::new()
			.with_value("_flash_notice", r#"["saved"]"#)
			.with_value("user_id", "42");
		let before = session.clone();

		let _flash = FlashStore::load(&session);

		assert_eq!(session, before);
	}

	#[rstest]
	fn test_persist_sweeps_and_writes() {
		let mut session = MemorySession::new()
			.with_value("_flash_old", r#"["stale"]"#)
			.with_value("user_id", "42");
		let mut flash = FlashStore::new();
		flash.add("errors", "bad input");

		flash.persist(&mut session).unwrap();

		assert_eq!(session.get("_flash_old"), None);
		assert_eq!(session.get("_flash_errors").as_deref(), Some(r#"["bad input"]"#));
		assert_eq!(session.get("user_id").as_deref(), Some("42"));
		assert_eq!(session.save_count(), 1);
	}

	#[rstest]
	fn test_persist_leaves_store_intact(mut flash: FlashStore) {
		let mut session = MemorySession::new();
		flash.set("notice", "saved");

		flash.persist(&mut session).unwrap();

		assert_eq!(flash.get("notice"), vec!["saved"]);
	}

	#[rstest]
	fn test_persist_after_consumption_drops_entry() {
		let mut session = MemorySession::new().with_value("_flash_notice", r#"["saved"]"#);
		let mut flash = FlashStore::load(&session);

		let _ = flash.get("notice");
		flash.persist(&mut session).unwrap();

		assert!(session.is_empty());
	}

	#[rstest]
	fn test_persist_with_custom_prefix_leaves_default_namespace() {
		let mut session = MemorySession::new().with_value("_flash_notice", r#"["public"]"#);
		let config = FlashConfig::new().with_prefix("_admin_flash_");
		let mut admin = FlashStore::load_with_config(&session, &config).unwrap();
		assert!(admin.is_empty());

		admin.set("notice", "admin only");
		admin.persist(&mut session).unwrap();

		assert_eq!(session.get("_flash_notice").as_deref(), Some(r#"["public"]"#));
		assert_eq!(
			session.get("_admin_flash_notice").as_deref(),
			Some(r#"["admin only"]"#)
		);
	}
}
