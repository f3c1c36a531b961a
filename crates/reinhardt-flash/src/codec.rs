//! Wire format for a flash key's values
//!
//! Each flash key occupies one session value holding the compact JSON array
//! of its messages: `["name required","email invalid"]`.

use crate::error::Result;

/// Encode a value list as a JSON array of strings
///
/// # Examples
///
/// ```
/// use reinhardt_flash::codec::encode_values;
///
/// let encoded = encode_values(&["name required".to_string(), "email invalid".to_string()]).unwrap();
/// assert_eq!(encoded, r#"["name required","email invalid"]"#);
/// ```
pub fn encode_values(values: &[String]) -> Result<String> {
	Ok(serde_json::to_string(values)?)
}

/// Decode a JSON array of strings
///
/// Anything other than an array of strings is rejected.
///
/// # Examples
///
/// ```
/// use reinhardt_flash::codec::decode_values;
///
/// assert_eq!(decode_values(r#"["saved"]"#).unwrap(), vec!["saved".to_string()]);
/// assert!(decode_values("not json").is_err());
/// ```
pub fn decode_values(raw: &str) -> Result<Vec<String>> {
	Ok(serde_json::from_str(raw)?)
}
