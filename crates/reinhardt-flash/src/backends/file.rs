//! File-backed session backend
//!
//! The whole session is stored as one JSON object mapping session keys to
//! string values. Changes stay in memory until [`Session::save`] rewrites the
//! file.

use crate::error::SessionError;
use crate::session::Session;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Session persisted as a JSON file
///
/// # Examples
///
/// ```no_run
/// use reinhardt_flash::{FileSession, FlashStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = FileSession::open("/tmp/sessions/abc123.json")?;
///
/// let mut flash = FlashStore::load(&session);
/// flash.set("notice", "Profile updated");
/// flash.persist(&mut session)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileSession {
	path: PathBuf,
	values: BTreeMap<String, String>,
}

impl FileSession {
	/// Open a session file
	///
	/// A missing file yields an empty session; the file is created on the
	/// first `save`. A file that is not a JSON object of strings is an error.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
		let path = path.as_ref().to_path_buf();
		let values: BTreeMap<String, String> = match fs::read_to_string(&path) {
			Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
			Ok(contents) => serde_json::from_str(&contents)?,
			Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
			Err(error) => return Err(error.into()),
		};

		tracing::debug!(
			path = %path.display(),
			keys = values.len(),
			"Session file opened"
		);

		Ok(Self { path, values })
	}

	/// Location of the session file
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Session for FileSession {
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
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}
		let contents = serde_json::to_string(&self.values)?;
		fs::write(&self.path, contents)?;

		tracing::debug!(
			path = %self.path.display(),
			keys = self.values.len(),
			"Session file saved"
		);
		Ok(())
	}

	fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
		self.values
			.range(prefix.to_string()..)
			.take_while(|(key, _)| key.starts_with(prefix))
			.map(|(key, _)| key.clone())
			.collect()
	}
}
