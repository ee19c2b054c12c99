//! Shared fixtures for unit tests

use crate::format::format_record;
use crate::logger::Logger;
use owtorg_errors::{FacadeError, Result};
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Lines shared between loggers so dispatch order is observable
#[derive(Clone, Default)]
pub struct SharedLines(Arc<Mutex<Vec<String>>>);

impl SharedLines {
    pub fn push(&self, line: String) {
        self.0.lock().unwrap().push(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// In-memory writer for stream logger tests
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger that records `tag:line` into shared lines
pub struct RecordingLogger {
    tag: String,
    lines: SharedLines,
    inits: Arc<AtomicUsize>,
    fail_init: bool,
    fail_log: bool,
}

impl RecordingLogger {
    pub fn with_lines(tag: &str) -> (Self, SharedLines) {
        let lines = SharedLines::default();
        (Self::sharing(tag, &lines), lines)
    }

    pub fn sharing(tag: &str, lines: &SharedLines) -> Self {
        Self {
            tag: tag.to_string(),
            lines: lines.clone(),
            inits: Arc::new(AtomicUsize::new(0)),
            fail_init: false,
            fail_log: false,
        }
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_log(mut self) -> Self {
        self.fail_log = true;
        self
    }

    pub fn init_counter(&self) -> Arc<AtomicUsize> {
        self.inits.clone()
    }
}

impl Logger for RecordingLogger {
    fn kind(&self) -> &'static str {
        "recording"
    }

    fn init(&mut self) -> Result<()> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(FacadeError::InitCallback {
                logger: "recording",
                index: 0,
                source: Box::new(FacadeError::invalid_config(format!(
                    "{} rejected init",
                    self.tag
                ))),
            });
        }
        Ok(())
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        if self.fail_log {
            return Err(FacadeError::Write {
                target: self.tag.clone(),
                source: io::Error::new(io::ErrorKind::Other, "sink closed"),
            });
        }
        self.lines
            .push(format!("{}:{}", self.tag, format_record(level, values)));
        Ok(())
    }
}
