//! System-log backend
//!
//! Lines go through the host's `tracing` subscriber under the
//! `owtorg::syslog` target. Whatever subscriber the application installed
//! (see `owtorg_logging::init`) decides where they end up.

use crate::format::format_record;
use crate::init::{InitCallbacks, Initializable};
use crate::logger::Logger;
use owtorg_core_types::schema::TARGET_SYSLOG;
use owtorg_core_types::Severity;
use owtorg_errors::Result;
use std::fmt::Display;
use tracing::Level;

/// Logger that emits each line as a `tracing` event
pub struct SystemLogger {
    ident: String,
    callbacks: InitCallbacks<SystemLogger>,
}

impl Default for SystemLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemLogger {
    pub fn new() -> Self {
        Self {
            ident: String::new(),
            callbacks: InitCallbacks::new(),
        }
    }

    /// Identifier recorded with every event, empty by default
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn set_ident(&mut self, ident: impl Into<String>) {
        self.ident = ident.into();
    }
}

/// Map a label to the `tracing` level its events are emitted at
///
/// Labels outside the canonical eight are emitted at INFO.
pub fn level_for(label: &str) -> Level {
    match Severity::from_label(label) {
        Some(Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error) => {
            Level::ERROR
        }
        Some(Severity::Warning) => Level::WARN,
        Some(Severity::Notice | Severity::Info) | None => Level::INFO,
        Some(Severity::Debug) => Level::DEBUG,
    }
}

impl Initializable for SystemLogger {
    const KIND: &'static str = "system";

    fn init_callbacks_mut(&mut self) -> &mut InitCallbacks<Self> {
        &mut self.callbacks
    }
}

impl Logger for SystemLogger {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn init(&mut self) -> Result<()> {
        self.run_init_callbacks()
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        let record = format_record(level, values);
        let ident = self.ident.as_str();
        // tracing levels are fixed per callsite, hence one branch per level
        let event_level = level_for(level);
        if event_level == Level::ERROR {
            tracing::error!(target: TARGET_SYSLOG, severity = level, ident, "{}", record);
        } else if event_level == Level::WARN {
            tracing::warn!(target: TARGET_SYSLOG, severity = level, ident, "{}", record);
        } else if event_level == Level::DEBUG {
            tracing::debug!(target: TARGET_SYSLOG, severity = level, ident, "{}", record);
        } else {
            tracing::info!(target: TARGET_SYSLOG, severity = level, ident, "{}", record);
        }
        Ok(())
    }
}
