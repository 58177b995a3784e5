// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::teardown::ResourceKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeardownError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Failed to delete {kind} {name} in namespace {namespace}: {source}")]
    DeleteFailed {
        kind: ResourceKind,
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

impl TeardownError {
    /// True when the API server reported the resource as absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TeardownError::DeleteFailed {
                source: kube::Error::Api(err),
                ..
            } if err.code == 404
        )
    }
}

pub type Result<T> = std::result::Result<T, TeardownError>;
