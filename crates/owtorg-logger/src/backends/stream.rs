//! Standard-stream backend

use crate::format::format_line;
use crate::init::{InitCallbacks, Initializable};
use crate::logger::Logger;
use owtorg_errors::{FacadeError, Result};
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Logger that writes each line to a stream, stdout by default
pub struct StreamLogger {
    name: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
    callbacks: InitCallbacks<StreamLogger>,
}

impl Default for StreamLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamLogger {
    /// Write to stdout
    pub fn new() -> Self {
        Self::with_writer("stdout", io::stdout())
    }

    /// Write to stderr
    pub fn stderr() -> Self {
        Self::with_writer("stderr", io::stderr())
    }

    /// Write to an arbitrary stream; `name` appears in write errors
    pub fn with_writer(name: &'static str, writer: impl Write + Send + 'static) -> Self {
        Self {
            name,
            writer: Mutex::new(Box::new(writer)),
            callbacks: InitCallbacks::new(),
        }
    }

    /// Swap the target stream, typically from an init callback
    pub fn set_writer(&mut self, name: &'static str, writer: impl Write + Send + 'static) {
        self.name = name;
        *self
            .writer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = Box::new(writer);
    }

    /// Name of the current stream
    pub fn stream_name(&self) -> &'static str {
        self.name
    }
}

impl Initializable for StreamLogger {
    const KIND: &'static str = "stream";

    fn init_callbacks_mut(&mut self) -> &mut InitCallbacks<Self> {
        &mut self.callbacks
    }
}

impl Logger for StreamLogger {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn init(&mut self) -> Result<()> {
        self.run_init_callbacks()
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        let line = format_line(level, values);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| FacadeError::Write {
                target: self.name.to_string(),
                source,
            })
    }
}
