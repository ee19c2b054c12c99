//! Core types shared across the owtorg logging crates
//!
//! This crate provides the vocabulary used by both the facade and its
//! diagnostics facility:
//!
//! - **Severity**: the eight RFC 5424 levels and their canonical labels
//! - **Schema constants**: canonical field keys, event names and targets

pub mod schema;
pub mod severity;

pub use severity::{Severity, UnknownSeverity};
