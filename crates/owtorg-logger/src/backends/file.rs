//! File backend
//!
//! Each line is its own open/append/close cycle. No handle outlives a call,
//! so there is nothing to flush or close when the logger is dropped.

use crate::format::format_line;
use crate::init::{InitCallbacks, Initializable};
use crate::logger::Logger;
use owtorg_errors::{FacadeError, Result};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Path used when neither the constructor nor a callback sets one
pub const DEFAULT_LOG_PATH: &str = "./owtorg-logger";

/// Logger that appends each line to a file
pub struct FileLogger {
    base_path: Option<PathBuf>,
    path: PathBuf,
    write_lock: Mutex<()>,
    callbacks: InitCallbacks<FileLogger>,
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl FileLogger {
    /// Log to [`DEFAULT_LOG_PATH`] unless a callback overrides it
    pub fn new() -> Self {
        Self {
            base_path: None,
            path: PathBuf::from(DEFAULT_LOG_PATH),
            write_lock: Mutex::new(()),
            callbacks: InitCallbacks::new(),
        }
    }

    /// Log to `path`; `init` falls back to it instead of the default
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            base_path: Some(path.clone()),
            path,
            ..Self::new()
        }
    }

    /// Current target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retarget the logger, typically from an init callback
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }
}

impl Initializable for FileLogger {
    const KIND: &'static str = "file";

    fn init_callbacks_mut(&mut self) -> &mut InitCallbacks<Self> {
        &mut self.callbacks
    }
}

impl Logger for FileLogger {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Reset the path to its base, then let callbacks override it
    fn init(&mut self) -> Result<()> {
        self.path = self
            .base_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));
        self.run_init_callbacks()
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        let line = format_line(level, values);
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| FacadeError::FileOpen {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(line.as_bytes())
            .map_err(|source| FacadeError::Write {
                target: self.path.display().to_string(),
                source,
            })
    }
}
