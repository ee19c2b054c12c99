//! Declarative stack configuration
//!
//! A stack can be described in TOML or JSON instead of code:
//!
//! ```toml
//! [[backend]]
//! kind = "stream"
//! target = "stderr"
//!
//! [[backend]]
//! kind = "system"
//! ident = "billing"
//!
//! [[backend]]
//! kind = "file"
//! path = "./billing.log"
//! ```
//!
//! The description becomes the stack's own init callback, so `Stack::init`
//! rebuilds the members from it.

use crate::backends::{FileLogger, StreamLogger, SystemLogger};
use crate::init::{callback, Initializable};
use crate::logger::Logger;
use crate::stack::Stack;
use owtorg_errors::{FacadeError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Ordered list of backends making up a stack
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    #[serde(default, rename = "backend")]
    pub backends: Vec<BackendConfig>,
}

/// One backend entry, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    Stream {
        #[serde(default)]
        target: StreamTarget,
    },
    System {
        #[serde(default)]
        ident: Option<String>,
    },
    File {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

/// Standard stream written by a stream backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    #[default]
    Stdout,
    Stderr,
}

impl BackendConfig {
    /// Construct the backend this entry describes, uninitialized
    pub fn instantiate(&self) -> Box<dyn Logger> {
        match self {
            BackendConfig::Stream { target } => Box::new(match target {
                StreamTarget::Stdout => StreamLogger::new(),
                StreamTarget::Stderr => StreamLogger::stderr(),
            }),
            BackendConfig::System { ident } => {
                let mut logger = SystemLogger::new();
                if let Some(ident) = ident {
                    logger.set_ident(ident.clone());
                }
                Box::new(logger)
            }
            BackendConfig::File { path } => Box::new(match path {
                Some(path) => FileLogger::with_path(path.clone()),
                None => FileLogger::new(),
            }),
        }
    }
}

impl StackConfig {
    /// Parse a TOML description
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InvalidConfig`] if the document does not parse.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| FacadeError::invalid_config(e.to_string()))
    }

    /// Parse a JSON description of the form `{"backend": [{"kind": ...}]}`
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InvalidConfig`] if the document does not parse.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| FacadeError::invalid_config(e.to_string()))
    }

    /// Fresh, uninitialized backends in configured order
    pub fn instantiate_all(&self) -> Vec<Box<dyn Logger>> {
        self.backends.iter().map(BackendConfig::instantiate).collect()
    }

    /// Build an initialized stack whose init callback recreates these backends
    ///
    /// # Errors
    ///
    /// Returns an error if any backend fails to initialize.
    pub fn build(&self) -> Result<Stack> {
        let config = self.clone();
        let mut stack = Stack::new();
        stack.register_init_callbacks(vec![callback(move |s: &mut Stack| {
            s.add(config.instantiate_all())
        })]);
        stack.init()?;
        Ok(stack)
    }
}
