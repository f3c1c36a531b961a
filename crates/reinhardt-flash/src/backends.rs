//! Reference session backends
//!
//! - [`MemorySession`]: process-local map, always saves successfully
//! - [`FileSession`]: JSON object on disk, one file per session

mod file;
mod memory;

pub use file::FileSession;
pub use memory::MemorySession;
