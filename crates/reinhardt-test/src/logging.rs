//! Test logging utilities
//!
//! Provides utilities for initializing logging in test environments and for
//! capturing the events a piece of code emits.

use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::layer::{Context, SubscriberExt as _};
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: Once = Once::new();

/// Initialize logging for tests (call once)
///
/// Installs a `tracing` fmt subscriber that writes through the test harness
/// so output is only shown for failing tests.
///
/// # Examples
///
/// ```
/// use reinhardt_test::logging::init_test_logging;
///
/// // In your test:
/// init_test_logging();
/// // Your test code
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_test_writer()
			.with_max_level(tracing::Level::DEBUG)
			.try_init();
	});
}

/// A tracing layer that captures events as `"[LEVEL] message"` lines
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
	/// Create an empty capture
	pub fn new() -> Self {
		Self::default()
	}

	/// Captured lines so far
	pub fn lines(&self) -> Vec<String> {
		match self.logs.lock() {
			Ok(logs) => logs.clone(),
			Err(poisoned) => poisoned.into_inner().clone(),
		}
	}

	/// Whether a line at `level` contains `needle`
	pub fn contains(&self, level: tracing::Level, needle: &str) -> bool {
		let tag = format!("[{level}]");
		self.lines()
			.iter()
			.any(|line| line.starts_with(&tag) && line.contains(needle))
	}

	/// Run `f` with this capture installed as the thread's default subscriber
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_test::logging::LogCapture;
	///
	/// let capture = LogCapture::new();
	/// capture.capture(|| tracing::warn!(key = "notice", "Something odd"));
	/// assert!(capture.contains(tracing::Level::WARN, "Something odd"));
	/// ```
	pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
		let _guard = tracing_subscriber::registry()
			.with(self.clone())
			.set_default();
		f()
	}
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
		// Collects the message and every structured field
		struct LineVisitor {
			message: String,
			fields: Vec<String>,
		}

		impl tracing::field::Visit for LineVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				} else {
					self.fields.push(format!("{}={:?}", field.name(), value));
				}
			}
		}

		let mut visitor = LineVisitor {
			message: String::new(),
			fields: Vec::new(),
		};
		event.record(&mut visitor);

		let mut line = format!("[{}] {}", event.metadata().level(), visitor.message);
		for field in visitor.fields {
			line.push(' ');
			line.push_str(&field);
		}

		match self.logs.lock() {
			Ok(mut logs) => logs.push(line),
			Err(poisoned) => poisoned.into_inner().push(line),
		}
	}
}
