//! Diagnostics initialization
//!
//! Provides a single initialization point for the global `tracing` subscriber.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset or unparsable
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "owtorg=debug",
            // Keep every system-log line even when diagnostics are quieter
            Profile::Production => "owtorg=info,owtorg::syslog=debug",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the diagnostics facility
///
/// Call once at application startup, before the system-log backend is used.
/// Later calls are no-ops, whatever profile they pass.
///
/// # Profiles
///
/// - **Development**: Human-readable output, `owtorg=debug`
/// - **Production**: JSON output, `owtorg=info`
/// - **Test**: Bare registry
///
/// # Example
///
/// ```
/// use owtorg_logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // Capture is installed separately via init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}
