//! Flash key namespace inside a shared session
//!
//! Flash entries share the session's flat key space with everything else.
//! [`FlashNamespace`] owns the qualifying convention: a flash key `k` is
//! stored under `prefix + k`, and any session key starting with the prefix
//! belongs to the flash layer.
//!
//! Stripping removes the prefix once, at the start of the session key. A
//! legacy key such as `_flash_a_flash_b` hydrates as `a_flash_b`, not `ab`.
//!
//! Two namespaces sharing a session are only isolated when neither prefix
//! starts with the other; see [`FlashNamespace::overlaps`].
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash::FlashNamespace;
//!
//! let namespace = FlashNamespace::default();
//! assert_eq!(namespace.qualify("errors"), "_flash_errors");
//! assert_eq!(namespace.strip("_flash_errors"), Some("errors"));
//! assert_eq!(namespace.strip("user_id"), None);
//! ```

use std::borrow::Cow;

/// Prefix of every flash-owned session key
pub const FLASH_PREFIX: &str = "_flash_";

/// Qualifies flash keys into session keys and back
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlashNamespace {
	prefix: Cow<'static, str>,
}

impl FlashNamespace {
	/// Create a namespace with a custom prefix
	///
	/// The prefix is not validated here; see
	/// [`FlashConfig::validate`](crate::FlashConfig::validate).
	pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// The session key prefix
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Session key for a flash key
	pub fn qualify(&self, key: &str) -> String {
		let mut qualified = String::with_capacity(self.prefix.len() + key.len());
		qualified.push_str(&self.prefix);
		qualified.push_str(key);
		qualified
	}

	/// Flash key for a session key, if the session key is flash-owned
	///
	/// Only the leading prefix is removed, so flash keys that themselves
	/// contain the prefix survive a round trip.
	///
	/// ```rust
	/// use reinhardt_flash::FlashNamespace;
	///
	/// let namespace = FlashNamespace::default();
	/// assert_eq!(namespace.strip("_flash_a_flash_b"), Some("a_flash_b"));
	/// ```
	pub fn strip<'a>(&self, session_key: &'a str) -> Option<&'a str> {
		session_key.strip_prefix(self.prefix.as_ref())
	}

	/// Whether a session key belongs to this namespace
	pub fn owns(&self, session_key: &str) -> bool {
		session_key.starts_with(self.prefix.as_ref())
	}

	/// Whether the two namespaces can claim the same session key
	///
	/// True when either prefix starts with the other, including equal
	/// prefixes. A store in one namespace would then hydrate, and sweep on
	/// persist, the other's entries.
	///
	/// ```rust
	/// use reinhardt_flash::FlashNamespace;
	///
	/// let default = FlashNamespace::default();
	/// assert!(default.overlaps(&FlashNamespace::new("_flash_admin_")));
	/// assert!(!default.overlaps(&FlashNamespace::new("_admin_flash_")));
	/// ```
	pub fn overlaps(&self, other: &FlashNamespace) -> bool {
		self.prefix.starts_with(other.prefix()) || other.prefix.starts_with(self.prefix())
	}
}

impl Default for FlashNamespace {
	fn default() -> Self {
		Self::new(FLASH_PREFIX)
	}
}
