// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Teardown invoker - deletes the metadata service resources one after another.

use crate::config::Config;
use crate::error::TeardownError;
use crate::kubernetes::{delete_cluster_scoped, delete_namespaced};
use crate::teardown::plan::{DeleteStep, ResourceKind, ACTIVE_STEPS, DISABLED_STEPS};
use crate::teardown::report::{StepOutcome, TeardownReport};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim, Service};
use k8s_openapi::api::networking::v1::Ingress;
use kube::Client;
use tracing::{debug, error, info, instrument, warn};

pub struct TeardownInvoker {
    client: Client,
    namespace: String,
}

impl TeardownInvoker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            namespace: config.namespace.clone(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Run every active step in order. A failed step never stops the ones after it.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn run(&self) -> TeardownReport {
        let mut report = TeardownReport::default();

        for step in ACTIVE_STEPS {
            report.push(self.execute(step).await);
        }

        for step in DISABLED_STEPS {
            debug!("Skipping disabled step: {}", step.command_line(&self.namespace));
        }

        let failed = report.failures().count();
        if failed == 0 {
            info!("Teardown of namespace {} complete", self.namespace);
        } else {
            warn!(
                "Teardown of namespace {} finished with {} of {} deletes failed",
                self.namespace,
                failed,
                report.outcomes.len()
            );
        }

        report
    }

    async fn execute(&self, step: DeleteStep) -> StepOutcome {
        info!("+ {}", step.command_line(&self.namespace));

        let result = self
            .delete(step)
            .await
            .map_err(|source| TeardownError::DeleteFailed {
                kind: step.kind,
                name: step.name.to_string(),
                namespace: self.namespace.clone(),
                source,
            });

        match &result {
            Ok(()) => info!("{} \"{}\" deleted", step.kind, step.name),
            Err(e) if e.is_not_found() => {
                error!("{} \"{}\" not found in namespace {}", step.kind, step.name, self.namespace)
            }
            Err(e) => error!("{}", e),
        }

        StepOutcome {
            step,
            namespace: self.namespace.clone(),
            result,
        }
    }

    async fn delete(&self, step: DeleteStep) -> Result<(), kube::Error> {
        let (client, ns, name) = (&self.client, self.namespace.as_str(), step.name);
        match step.kind {
            ResourceKind::Ingress => delete_namespaced::<Ingress>(client, ns, name).await,
            ResourceKind::Service => delete_namespaced::<Service>(client, ns, name).await,
            ResourceKind::Deployment => delete_namespaced::<Deployment>(client, ns, name).await,
            ResourceKind::PersistentVolumeClaim => {
                delete_namespaced::<PersistentVolumeClaim>(client, ns, name).await
            }
            ResourceKind::PersistentVolume => {
                delete_cluster_scoped::<PersistentVolume>(client, name).await
            }
        }
    }
}
