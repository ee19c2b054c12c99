//! Init callbacks
//!
//! Every logger carries a list of callbacks that configure it when it is
//! initialized. A callback receives the concrete logger type, so a callback
//! written for a `FileLogger` cannot be registered on a `StreamLogger`.
//!
//! Concrete loggers embed an [`InitCallbacks`] and implement
//! [`Initializable`] to get registration and ordered execution for free.

use owtorg_errors::{FacadeError, Result};

/// Deferred configuration for a logger of type `T`
pub type InitCallback<T> = Box<dyn Fn(&mut T) -> Result<()> + Send + Sync>;

/// Box a closure as an [`InitCallback`]
///
/// Saves writing the `Box<dyn ...>` coercion at every call site.
pub fn callback<T, F>(f: F) -> InitCallback<T>
where
    F: Fn(&mut T) -> Result<()> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Ordered list of pending init callbacks
///
/// `generation` changes on every registration, so a run can tell whether one
/// of its callbacks registered a new list.
pub struct InitCallbacks<T> {
    callbacks: Vec<InitCallback<T>>,
    generation: u64,
}

impl<T> Default for InitCallbacks<T> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            generation: 0,
        }
    }
}

impl<T> std::fmt::Debug for InitCallbacks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitCallbacks")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

impl<T> InitCallbacks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list; earlier registrations are discarded
    pub fn replace(&mut self, callbacks: Vec<InitCallback<T>>) {
        self.callbacks = callbacks;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

}

/// Run every callback against `target`, stopping at the first failure
fn run_all<T>(callbacks: &[InitCallback<T>], target: &mut T, logger: &'static str) -> Result<()> {
    for (index, callback) in callbacks.iter().enumerate() {
        tracing::trace!(logger, index, "running init callback");
        callback(target).map_err(|source| FacadeError::InitCallback {
            logger,
            index,
            source: Box::new(source),
        })?;
    }
    Ok(())
}

/// Registration and execution of init callbacks for a concrete logger type
pub trait Initializable: Sized {
    /// Short name of the logger kind, used in errors and diagnostics
    const KIND: &'static str;

    /// Access the embedded callback list
    fn init_callbacks_mut(&mut self) -> &mut InitCallbacks<Self>;

    /// Replace the pending callbacks with `callbacks`
    ///
    /// Registration overwrites rather than appends, and does not run anything:
    /// call `init` to apply the new callbacks.
    fn register_init_callbacks(&mut self, callbacks: Vec<InitCallback<Self>>) {
        self.init_callbacks_mut().replace(callbacks);
    }

    /// Run the registered callbacks against `self`, in registration order
    ///
    /// Callbacks stay registered afterwards so a later `init` applies them
    /// again. A callback that registers a new list, even an empty one,
    /// replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InitCallback`] wrapping the first callback error.
    fn run_init_callbacks(&mut self) -> Result<()> {
        let slot = self.init_callbacks_mut();
        let generation = slot.generation;
        let callbacks = std::mem::take(&mut slot.callbacks);

        let result = run_all(&callbacks, self, Self::KIND);

        let slot = self.init_callbacks_mut();
        if slot.generation == generation {
            slot.callbacks = callbacks;
        }
        result
    }
}
