//! Call-site macros
//!
//! Build the `&[&dyn Display]` argument list so callers can pass values of
//! mixed types directly:
//!
//! ```
//! # use owtorg_logger::{Stack, log_values, log_emergency};
//! let stack = Stack::new();
//! log_values!(stack, "custom level", "user", 42)?;
//! log_emergency!(stack, "disk full", 93.5)?;
//! # Ok::<(), owtorg_logger::FacadeError>(())
//! ```

/// Log values at an arbitrary level label
#[macro_export]
macro_rules! log_values {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        ($logger).log($level, &[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __severity_call {
    ($method:ident, $logger:expr $(, $value:expr)* $(,)?) => {{
        use $crate::Logger as _;
        ($logger).$method(&[$(&$value as &dyn ::std::fmt::Display),*])
    }};
}

/// Log values at Emergency
#[macro_export]
macro_rules! log_emergency {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(emergency, $logger $(, $value)*)
    };
}

/// Log values at Alert
#[macro_export]
macro_rules! log_alert {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(alert, $logger $(, $value)*)
    };
}

/// Log values at Critical
#[macro_export]
macro_rules! log_critical {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(critical, $logger $(, $value)*)
    };
}

/// Log values at Error
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(error, $logger $(, $value)*)
    };
}

/// Log values at Warning
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(warning, $logger $(, $value)*)
    };
}

/// Log values at Notice
#[macro_export]
macro_rules! log_notice {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(notice, $logger $(, $value)*)
    };
}

/// Log values at Info
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(info, $logger $(, $value)*)
    };
}

/// Log values at Debug
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__severity_call!(debug, $logger $(, $value)*)
    };
}
