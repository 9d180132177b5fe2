//! Orchestrator seam.
//!
//! `DeploymentClient` is the only surface the scaler needs from the
//! cluster: read a Deployment and replace it whole. `KubeDeploymentClient`
//! backs it with the apps/v1 API; tests plug in an in-memory client.

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use kube::api::{Api, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::{debug, info};

use kubescaler_core::ClusterSource;

use crate::error::{ScaleError, ScaleResult};

/// Read and replace namespaced Deployments.
#[async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Fetch the current Deployment `namespace/name`.
    async fn get(&self, namespace: &str, name: &str) -> Result<Deployment, kube::Error>;

    /// Overwrite `namespace/name` with `deployment` (full replace, not a patch).
    async fn replace(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, kube::Error>;
}

/// `DeploymentClient` backed by a live cluster connection.
#[derive(Clone)]
pub struct KubeDeploymentClient {
    client: Client,
}

impl KubeDeploymentClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl DeploymentClient for KubeDeploymentClient {
    async fn get(&self, namespace: &str, name: &str) -> Result<Deployment, kube::Error> {
        self.api(namespace).get(name).await
    }

    async fn replace(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, kube::Error> {
        self.api(namespace)
            .replace(name, &PostParams::default(), deployment)
            .await
    }
}

/// Resolve cluster connection settings and build a client.
///
/// Called once per run; the returned client is shared by every scale call.
pub async fn connect(source: &ClusterSource) -> ScaleResult<Client> {
    let config = match source {
        ClusterSource::Explicit(path) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                ScaleError::Config(format!(
                    "failed to read kubeconfig {}: {e}",
                    path.display()
                ))
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| {
                    ScaleError::Config(format!(
                        "invalid kubeconfig {}: {e}",
                        path.display()
                    ))
                })?
        }
        ClusterSource::Ambient => Config::infer().await.map_err(|e| {
            ScaleError::Config(format!("failed to discover cluster configuration: {e}"))
        })?,
    };

    debug!(
        cluster_url = %config.cluster_url,
        namespace = %config.default_namespace,
        "resolved cluster configuration"
    );

    let client = Client::try_from(config)
        .map_err(|e| ScaleError::Config(format!("failed to create Kubernetes client: {e}")))?;

    match source.kubeconfig_path() {
        Some(path) => info!(kubeconfig = %path.display(), "cluster client ready"),
        None => info!("cluster client ready (default configuration)"),
    }

    Ok(client)
}
