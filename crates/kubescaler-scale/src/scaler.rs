//! Scale applier — sets the desired replica count of one Deployment.
//!
//! Each call is a read-modify-write: fetch the Deployment, change
//! `spec.replicas`, replace the whole object. Changes made to other fields
//! between the fetch and the replace are overwritten.

use tracing::{info, warn};

use crate::client::DeploymentClient;
use crate::error::{ScaleError, ScaleResult};

/// What `Scaler::apply_scale` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleOutcome {
    /// The Deployment was replaced with the requested replica count.
    Scaled { replicas: u32 },
    /// The fetched Deployment had no spec; nothing was written.
    Skipped,
}

/// Applies replica counts through a `DeploymentClient`.
pub struct Scaler<C> {
    client: C,
}

impl<C: DeploymentClient> Scaler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Set the desired replica count of `namespace/name` to `replicas`.
    ///
    /// A Deployment that comes back without a spec is left alone and
    /// reported as `Skipped` rather than as an error. API errors from
    /// either call are returned as-is, without retry.
    pub async fn apply_scale(
        &self,
        namespace: &str,
        name: &str,
        replicas: u32,
    ) -> ScaleResult<ScaleOutcome> {
        let desired = i32::try_from(replicas).map_err(|_| ScaleError::ReplicasOutOfRange {
            namespace: namespace.to_string(),
            name: name.to_string(),
            replicas,
        })?;

        let mut deployment = self
            .client
            .get(namespace, name)
            .await
            .map_err(|source| ScaleError::Fetch {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            })?;

        let Some(spec) = deployment.spec.as_mut() else {
            warn!(namespace, name, "deployment has no spec, skipping");
            return Ok(ScaleOutcome::Skipped);
        };

        info!(namespace, name, replicas, "Scaling deployment: {namespace}/{name} to {replicas}");
        spec.replicas = Some(desired);

        self.client
            .replace(namespace, name, &deployment)
            .await
            .map_err(|source| ScaleError::Replace {
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            })?;

        Ok(ScaleOutcome::Scaled { replicas })
    }
}
