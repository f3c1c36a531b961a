//! Flash configuration
//!
//! [`FlashConfig`] deserializes with defaults for every field, so it can be
//! embedded as an optional section of a larger settings document.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash::FlashConfig;
//!
//! let config: FlashConfig = serde_json::from_str(r#"{"prefix": "_msg_"}"#).unwrap();
//! assert_eq!(config.prefix, "_msg_");
//! assert_eq!(config.errors_key, "errors");
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{FlashError, Result};
use crate::namespace::{FLASH_PREFIX, FlashNamespace};
use serde::{Deserialize, Serialize};

/// Key consumed by [`FlashStore::errors`](crate::FlashStore::errors) by default
pub const DEFAULT_ERRORS_KEY: &str = "errors";

/// Flash store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
	/// Session key prefix for flash entries
	pub prefix: String,
	/// Flash key read by `errors()`
	pub errors_key: String,
}

impl FlashConfig {
	/// Create the default configuration
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::FlashConfig;
	///
	/// let config = FlashConfig::new();
	/// assert_eq!(config.prefix, "_flash_");
	/// assert_eq!(config.errors_key, "errors");
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: FLASH_PREFIX.to_string(),
			errors_key: DEFAULT_ERRORS_KEY.to_string(),
		}
	}

	/// Set the session key prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Set the key read by `errors()`
	pub fn with_errors_key(mut self, key: impl Into<String>) -> Self {
		self.errors_key = key.into();
		self
	}

	/// Check the configuration
	///
	/// An empty prefix would make every session key flash-owned, so the
	/// persist sweep would erase unrelated session data. A custom prefix must
	/// not overlap [`FLASH_PREFIX`] (for example `"_flash_admin_"`), otherwise
	/// a default store hydrates and sweeps its entries.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::FlashConfig;
	///
	/// assert!(FlashConfig::new().with_prefix("").validate().is_err());
	/// assert!(FlashConfig::new().with_prefix("_flash_admin_").validate().is_err());
	/// assert!(FlashConfig::new().with_prefix("_admin_flash_").validate().is_ok());
	/// ```
	pub fn validate(&self) -> Result<()> {
		if self.prefix.is_empty() {
			return Err(FlashError::InvalidConfig(
				"prefix must not be empty".to_string(),
			));
		}
		let namespace = self.namespace();
		if namespace.prefix() != FLASH_PREFIX && namespace.overlaps(&FlashNamespace::default()) {
			return Err(FlashError::InvalidConfig(format!(
				"prefix {:?} overlaps the default flash prefix {:?}",
				self.prefix, FLASH_PREFIX
			)));
		}
		if self.errors_key.is_empty() {
			return Err(FlashError::InvalidConfig(
				"errors_key must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Namespace described by this configuration
	pub fn namespace(&self) -> FlashNamespace {
		FlashNamespace::new(self.prefix.clone())
	}
}

impl Default for FlashConfig {
	fn default() -> Self {
		Self::new()
	}
}
