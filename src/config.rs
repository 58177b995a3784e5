// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_NAMESPACE};
use crate::error::{Result, TeardownError};
use std::env;

/// Teardown configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace holding the metadata service resources
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let raw = match env::var(vars::NAMESPACE) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(value)) => {
                return Err(TeardownError::Config(format!(
                    "{} is not valid unicode: {:?}",
                    vars::NAMESPACE,
                    value
                )))
            }
        };

        Ok(Config {
            namespace: resolve_namespace(raw),
        })
    }
}

/// Apply the default namespace to an absent or empty value
pub fn resolve_namespace(value: Option<String>) -> String {
    value
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}
