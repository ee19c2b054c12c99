//! Composite logger
//!
//! A [`Stack`] owns an ordered list of loggers and is itself a [`Logger`].
//! Every call is forwarded to each member in insertion order; stacks nest,
//! so a nested stack fans out further, depth first.
//!
//! Adding a stack to another runs its `init`, which clears its members before
//! running its own callbacks. A nested stack must therefore be configured
//! through `register_init_callbacks`; members added to it directly are
//! discarded when it joins another stack.
//!
//! Membership changes are atomic per call: if any logger passed to
//! [`Stack::add`] or [`Stack::set`] fails to initialize, the stack keeps the
//! members it had before the call.

use crate::config::StackConfig;
use crate::init::{InitCallbacks, Initializable};
use crate::logger::Logger;
use owtorg_errors::{FacadeError, Result};
use owtorg_logging::{log_op_end, log_op_error, log_op_start};
use std::fmt::Display;
use std::time::Instant;

/// Logger that fans every call out to its members
#[derive(Default)]
pub struct Stack {
    loggers: Vec<Box<dyn Logger>>,
    callbacks: InitCallbacks<Stack>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from a declarative description
    ///
    /// # Errors
    ///
    /// Returns an error if any configured backend fails to initialize.
    pub fn from_config(config: &StackConfig) -> Result<Self> {
        config.build()
    }

    /// Initialize `loggers` in order, then append them
    ///
    /// # Errors
    ///
    /// Returns the first init failure; no logger from this call is added.
    pub fn add(&mut self, loggers: Vec<Box<dyn Logger>>) -> Result<()> {
        let started = Instant::now();
        log_op_start!("stack_add", count = loggers.len());

        let mut loggers = loggers;
        if let Err(err) = init_all(&mut loggers) {
            log_op_error!("stack_add", err, duration_ms = elapsed_ms(started));
            return Err(err);
        }
        self.loggers.extend(loggers);

        log_op_end!(
            "stack_add",
            duration_ms = elapsed_ms(started),
            members = self.loggers.len()
        );
        Ok(())
    }

    /// Add a single logger
    ///
    /// # Errors
    ///
    /// Returns the logger's init failure; the logger is not added.
    pub fn push(&mut self, logger: impl Logger + 'static) -> Result<()> {
        self.add(vec![Box::new(logger)])
    }

    /// Replace every member with `loggers`, initializing each in order
    ///
    /// # Errors
    ///
    /// Returns the first init failure; the previous members are kept.
    pub fn set(&mut self, loggers: Vec<Box<dyn Logger>>) -> Result<()> {
        let started = Instant::now();
        log_op_start!("stack_set", count = loggers.len());

        let mut loggers = loggers;
        if let Err(err) = init_all(&mut loggers) {
            log_op_error!("stack_set", err, duration_ms = elapsed_ms(started));
            return Err(err);
        }
        self.loggers = loggers;

        log_op_end!(
            "stack_set",
            duration_ms = elapsed_ms(started),
            members = self.loggers.len()
        );
        Ok(())
    }

    /// Number of direct members
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Kind of each direct member, in dispatch order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.loggers.iter().map(|l| l.kind()).collect()
    }

    /// Run `call` on every member; all members are attempted
    fn dispatch<F>(&self, call: F) -> Result<()>
    where
        F: Fn(&dyn Logger) -> Result<()>,
    {
        let failures: Vec<FacadeError> = self
            .loggers
            .iter()
            .filter_map(|logger| call(logger.as_ref()).err())
            .collect();

        let failed = failures.len();
        let mut failures = failures.into_iter();
        match failures.next() {
            None => Ok(()),
            Some(first) if failed == 1 => Err(first),
            Some(first) => Err(FacadeError::Dispatch {
                failed,
                total: self.loggers.len(),
                first: Box::new(first),
            }),
        }
    }
}

fn init_all(loggers: &mut [Box<dyn Logger>]) -> Result<()> {
    loggers.iter_mut().try_for_each(|logger| logger.init())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl Initializable for Stack {
    const KIND: &'static str = "stack";

    fn init_callbacks_mut(&mut self) -> &mut InitCallbacks<Self> {
        &mut self.callbacks
    }
}

impl Logger for Stack {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Drop every member, then run the stack's own callbacks
    ///
    /// Stack callbacks usually repopulate it through `add` or `set`.
    fn init(&mut self) -> Result<()> {
        let started = Instant::now();
        log_op_start!("stack_init", callbacks = self.callbacks.len());

        self.loggers.clear();
        if let Err(err) = self.run_init_callbacks() {
            log_op_error!("stack_init", err, duration_ms = elapsed_ms(started));
            return Err(err);
        }

        log_op_end!(
            "stack_init",
            duration_ms = elapsed_ms(started),
            members = self.loggers.len()
        );
        Ok(())
    }

    fn log(&self, level: &str, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.log(level, values))
    }

    fn emergency(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.emergency(values))
    }

    fn alert(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.alert(values))
    }

    fn critical(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.critical(values))
    }

    fn error(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.error(values))
    }

    fn warning(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.warning(values))
    }

    fn notice(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.notice(values))
    }

    fn info(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.info(values))
    }

    fn debug(&self, values: &[&dyn Display]) -> Result<()> {
        self.dispatch(|logger| logger.debug(values))
    }
}
