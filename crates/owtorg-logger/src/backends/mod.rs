//! Concrete loggers, one per output medium
//!
//! - `StreamLogger` writes to stdout, stderr or any `Write`
//! - `SystemLogger` emits through the host `tracing` subscriber
//! - `FileLogger` appends to a file, opening it for every line

mod file;
mod stream;
mod system;

pub use file::{FileLogger, DEFAULT_LOG_PATH};
pub use stream::StreamLogger;
pub use system::{level_for, SystemLogger};
