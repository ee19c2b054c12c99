//! Canonical schema constants for diagnostic events
//!
//! These constants keep the facade's own `tracing` events consistent.

// Canonical field keys for structured diagnostics
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_MESSAGE: &str = "message";

// Facade fields
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_IDENT: &str = "ident";
pub const FIELD_LOGGER: &str = "logger";
pub const FIELD_MEMBERS: &str = "members";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Target used by the system-log backend for every line it emits
pub const TARGET_SYSLOG: &str = "owtorg::syslog";
