//! Canonical operation macros
//!
//! Every facade operation that changes configuration (stack add/set/init)
//! brackets itself with these, so diagnostics read the same everywhere.
//! Start and end are emitted at DEBUG; failures at ERROR.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use owtorg_logging::log_op_start;
/// log_op_start!("stack_add");
/// log_op_start!("stack_add", members = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use owtorg_logging::log_op_end;
/// log_op_end!("stack_add", duration_ms = 1);
/// log_op_end!("stack_add", duration_ms = 1, members = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` must expose `kind()` and `code()`, as `owtorg_errors::FacadeError` does.
///
/// # Example
///
/// ```ignore
/// # use owtorg_logging::log_op_error;
/// let err = owtorg_errors::FacadeError::invalid_config("empty path");
/// log_op_error!("stack_add", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err = &$err;
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err = &$err;
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
            $($field)*
        );
    }};
}
