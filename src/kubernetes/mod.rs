// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and resource deletion.

pub mod client;
pub mod delete;

pub use client::create_client;
pub use delete::{delete_cluster_scoped, delete_namespaced};
