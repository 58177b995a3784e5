// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tracing setup for the command line.

use crate::constants::{env, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, logging to stderr.
pub fn init() {
    let filter = EnvFilter::try_from_env(env::LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
