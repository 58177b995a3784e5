// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed deletion of single named resources

use either::Either;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::DeleteParams,
    core::Status,
    Api, Client, Resource,
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// Delete propagation matching `kubectl delete`
fn delete_params() -> DeleteParams {
    DeleteParams::background()
}

/// Delete a namespaced resource by name
pub async fn delete_namespaced<K>(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<(), kube::Error>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::namespaced(client.clone(), namespace);
    delete(api, name).await
}

/// Delete a cluster scoped resource by name
pub async fn delete_cluster_scoped<K>(client: &Client, name: &str) -> Result<(), kube::Error>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    <K as Resource>::DynamicType: Default,
{
    let api: Api<K> = Api::all(client.clone());
    delete(api, name).await
}

async fn delete<K>(api: Api<K>, name: &str) -> Result<(), kube::Error>
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    match api.delete(name, &delete_params()).await? {
        Either::Left(_) => debug!("{} is being deleted", name),
        Either::Right(status) => log_status(name, &status),
    }
    Ok(())
}

fn log_status(name: &str, status: &Status) {
    debug!("{} deleted: {:?}", name, status.status);
}
