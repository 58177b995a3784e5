// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The fixed list of resources removed by a teardown.

use crate::constants::resources;
use std::fmt;

/// Kinds of resource the teardown knows how to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Ingress,
    Service,
    Deployment,
    PersistentVolumeClaim,
    PersistentVolume,
}

impl ResourceKind {
    /// Name as accepted by `kubectl delete`
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Ingress => "ingress",
            ResourceKind::Service => "service",
            ResourceKind::Deployment => "deployment",
            ResourceKind::PersistentVolumeClaim => "persistentvolumeclaim",
            ResourceKind::PersistentVolume => "persistentvolume",
        }
    }

    pub fn is_namespaced(&self) -> bool {
        !matches!(self, ResourceKind::PersistentVolume)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named resource to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteStep {
    pub kind: ResourceKind,
    pub name: &'static str,
}

impl DeleteStep {
    pub const fn new(kind: ResourceKind, name: &'static str) -> Self {
        Self { kind, name }
    }

    /// Render the step the way kubectl would be invoked for it
    pub fn command_line(&self, namespace: &str) -> String {
        if self.kind.is_namespaced() {
            format!("delete {} {} --namespace {}", self.kind, self.name, namespace)
        } else {
            format!("delete {} {}", self.kind, self.name)
        }
    }
}

/// Steps executed on every run, in order
pub const ACTIVE_STEPS: [DeleteStep; 3] = [
    DeleteStep::new(ResourceKind::Ingress, resources::INGRESS),
    DeleteStep::new(ResourceKind::Service, resources::SERVICE),
    DeleteStep::new(ResourceKind::Deployment, resources::DEPLOYMENT),
];

/// Steps that are defined but never executed. Running them drops the datasets.
pub const DISABLED_STEPS: [DeleteStep; 2] = [
    DeleteStep::new(ResourceKind::PersistentVolumeClaim, resources::DATASETS_CLAIM),
    DeleteStep::new(ResourceKind::PersistentVolume, resources::DATASETS_VOLUME),
];
