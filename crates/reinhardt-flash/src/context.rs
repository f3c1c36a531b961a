//! Template context for flash messages
//!
//! Rendering consumes the flash: [`FlashContext::drain`] takes everything
//! out of the store through [`FlashStore::all`] and keeps it in key order so
//! templates render deterministically.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash::{FlashContext, FlashStore};
//!
//! let mut flash = FlashStore::new();
//! flash.add("errors", "name required");
//! flash.set("notice", "Draft kept");
//!
//! let context = FlashContext::drain(&mut flash);
//! assert!(flash.is_empty());
//! assert_eq!(context.errors(), ["name required".to_string()]);
//! assert_eq!(
//!     context.to_json(),
//!     serde_json::json!({"errors": ["name required"], "notice": ["Draft kept"]})
//! );
//! ```

use crate::flash::FlashStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Snapshot of flash messages for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlashContext {
	messages: BTreeMap<String, Vec<String>>,
	#[serde(skip)]
	errors_key: String,
}

impl FlashContext {
	/// Take every message out of the store
	pub fn drain(store: &mut FlashStore) -> Self {
		let errors_key = store.errors_key().to_string();
		Self {
			messages: store.all().into_iter().collect(),
			errors_key,
		}
	}

	/// Messages for `key`; empty when absent
	pub fn get(&self, key: &str) -> &[String] {
		self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
	}

	/// Messages under the store's errors key
	pub fn errors(&self) -> &[String] {
		self.get(&self.errors_key)
	}

	/// Whether `key` has at least one message
	pub fn has(&self, key: &str) -> bool {
		!self.get(key).is_empty()
	}

	/// Whether there is nothing to render
	pub fn is_empty(&self) -> bool {
		self.messages.values().all(Vec::is_empty)
	}

	/// Entries in key order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.messages
			.iter()
			.map(|(key, values)| (key.as_str(), values.as_slice()))
	}

	/// JSON object of message arrays, for template engines
	pub fn to_json(&self) -> Value {
		let object: Map<String, Value> = self
			.messages
			.iter()
			.map(|(key, values)| (key.clone(), Value::from(values.clone())))
			.collect();
		Value::Object(object)
	}
}
