//! owtorg logger - a logging facade with composable backends
//!
//! This crate provides:
//! - The `Logger` trait: eight RFC 5424 severity methods plus a generic `log`
//! - Typed init callbacks applied when a logger is initialized
//! - Backends for a standard stream, the system log (`tracing`) and a file
//! - `Stack`, a composite logger that fans every call out to its members
//! - `StackConfig`, a declarative TOML/JSON description of a stack
//!
//! # Usage
//!
//! ```rust,no_run
//! use owtorg_logger::{init::callback, FileLogger, Initializable, Logger, Stack, StreamLogger};
//!
//! let mut file = FileLogger::new();
//! file.register_init_callbacks(vec![callback(|f: &mut FileLogger| {
//!     f.set_path("./app.log");
//!     Ok(())
//! })]);
//!
//! let mut stack = Stack::new();
//! stack.add(vec![Box::new(StreamLogger::new()), Box::new(file)])?;
//! stack.emergency(&[&"disk full"])?;
//! # Ok::<(), owtorg_logger::FacadeError>(())
//! ```

pub mod backends;
pub mod config;
pub mod format;
pub mod init;
pub mod logger;
pub mod macros;
pub mod stack;

#[cfg(test)]
pub(crate) mod test_support;

pub use backends::{FileLogger, StreamLogger, SystemLogger, DEFAULT_LOG_PATH};
pub use config::{BackendConfig, StackConfig, StreamTarget};
pub use format::{format_line, format_record};
pub use init::{InitCallback, InitCallbacks, Initializable};
pub use logger::Logger;
pub use owtorg_core_types::Severity;
pub use owtorg_errors::{ErrorKind, FacadeError, Result};
pub use stack::Stack;
