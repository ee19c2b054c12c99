//! The logger abstraction
//!
//! Every backend and the composite [`Stack`](crate::Stack) implement
//! [`Logger`]. Callers hold `Box<dyn Logger>` and never need to know which
//! medium a line ends up on.

use owtorg_core_types::Severity;
use owtorg_errors::Result;
use std::fmt::Display;

/// Severity-leveled logging over an arbitrary medium
///
/// Implementors only have to provide `kind`, `init` and `log`; each severity
/// method defaults to `log` with its canonical label. Composites override the
/// severity methods so that each member receives the identical call.
pub trait Logger: Send + Sync {
    /// Short name of the logger kind ("stream", "system", "file", "stack")
    fn kind(&self) -> &'static str;

    /// Apply the registered init callbacks
    ///
    /// Must run before the logger is used. A [`Stack`](crate::Stack) runs it
    /// for every logger added to it.
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::InitCallback` if a callback fails.
    fn init(&mut self) -> Result<()>;

    /// Write `values` tagged with an arbitrary `level` label
    ///
    /// Performs exactly one write to the medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()>;

    /// System is unusable
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn emergency(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Emergency.label(), values)
    }

    /// Action must be taken immediately
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn alert(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Alert.label(), values)
    }

    /// Critical conditions
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn critical(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Critical.label(), values)
    }

    /// Runtime errors that do not require immediate action
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn error(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Error.label(), values)
    }

    /// Exceptional occurrences that are not errors
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn warning(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Warning.label(), values)
    }

    /// Normal but significant events
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn notice(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Notice.label(), values)
    }

    /// Interesting events
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn info(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Info.label(), values)
    }

    /// Detailed debug information
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn debug(&self, values: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Debug.label(), values)
    }

    /// Route to the severity method matching `severity`
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    fn log_at(&self, severity: Severity, values: &[&dyn Display]) -> Result<()> {
        match severity {
            Severity::Emergency => self.emergency(values),
            Severity::Alert => self.alert(values),
            Severity::Critical => self.critical(values),
            Severity::Error => self.error(values),
            Severity::Warning => self.warning(values),
            Severity::Notice => self.notice(values),
            Severity::Info => self.info(values),
            Severity::Debug => self.debug(values),
        }
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        (**self).log(level, values)
    }

    fn emergency(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).emergency(values)
    }

    fn alert(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).alert(values)
    }

    fn critical(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).critical(values)
    }

    fn error(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).error(values)
    }

    fn warning(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).warning(values)
    }

    fn notice(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).notice(values)
    }

    fn info(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).info(values)
    }

    fn debug(&self, values: &[&dyn Display]) -> Result<()> {
        (**self).debug(values)
    }
}
