// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    /// Target namespace for the teardown
    pub const NAMESPACE: &str = "DAX_NAMESPACE";
    /// Standard tracing filter
    pub const LOG_FILTER: &str = "RUST_LOG";
}

/// Namespace used when `DAX_NAMESPACE` is unset or empty
pub const DEFAULT_NAMESPACE: &str = "dax-int";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Names of the metadata service resources
pub mod resources {
    pub const INGRESS: &str = "dax-metaserv-ingress";
    pub const SERVICE: &str = "dax-metaserv-service";
    pub const DEPLOYMENT: &str = "dax-metaserv-deployment";
    pub const DATASETS_CLAIM: &str = "dax-metaserv-datasets-claim";
    pub const DATASETS_VOLUME: &str = "dax-int-metaserv-datasets-volume";
}
