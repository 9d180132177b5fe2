//! In-memory `DeploymentClient` for unit tests.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::error::ErrorResponse;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::client::DeploymentClient;

/// A call observed by `RecordingClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Get { id: String },
    Replace { id: String, replicas: Option<i32> },
}

/// Stores deployments keyed by `namespace/name` and records every call.
#[derive(Default)]
pub(crate) struct RecordingClient {
    deployments: Mutex<BTreeMap<String, Deployment>>,
    failing_replaces: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Call>>,
}

/// Shared buffer that collects formatted log output.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Route `info!` and above on the current thread into this buffer until
    /// the guard drops.
    pub(crate) fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub(crate) fn deployment(namespace: &str, name: &str, replicas: i32) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            resource_version: Some("1".to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(replicas),
            ..Default::default()
        }),
        status: None,
    }
}

pub(crate) fn api_error(code: u16, reason: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{reason} ({code})"),
        reason: reason.to_string(),
        code,
    })
}

fn id(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

impl RecordingClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_deployment(self, namespace: &str, name: &str, replicas: i32) -> Self {
        self.insert(deployment(namespace, name, replicas));
        self
    }

    pub(crate) fn with_object(self, d: Deployment) -> Self {
        self.insert(d);
        self
    }

    /// Register a deployment whose fetched representation has no spec.
    pub(crate) fn with_specless(self, namespace: &str, name: &str) -> Self {
        let mut d = deployment(namespace, name, 0);
        d.spec = None;
        self.insert(d);
        self
    }

    /// Make every replace of `namespace/name` fail with a 409 Conflict.
    pub(crate) fn failing_replace(self, namespace: &str, name: &str) -> Self {
        self.failing_replaces
            .lock()
            .unwrap()
            .insert(id(namespace, name));
        self
    }

    fn insert(&self, d: Deployment) {
        let key = id(
            d.metadata.namespace.as_deref().unwrap_or_default(),
            d.metadata.name.as_deref().unwrap_or_default(),
        );
        self.deployments.lock().unwrap().insert(key, d);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// `(id, replicas)` for every replace call, in order.
    pub(crate) fn replaced(&self) -> Vec<(String, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Replace { id, replicas } => Some((id, replicas.unwrap_or_default())),
                Call::Get { .. } => None,
            })
            .collect()
    }

    pub(crate) fn stored(&self, namespace: &str, name: &str) -> Option<Deployment> {
        self.deployments
            .lock()
            .unwrap()
            .get(&id(namespace, name))
            .cloned()
    }
}

#[async_trait]
impl DeploymentClient for RecordingClient {
    async fn get(&self, namespace: &str, name: &str) -> Result<Deployment, kube::Error> {
        let key = id(namespace, name);
        self.calls.lock().unwrap().push(Call::Get { id: key.clone() });
        self.deployments
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| api_error(404, "NotFound"))
    }

    async fn replace(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, kube::Error> {
        let key = id(namespace, name);
        self.calls.lock().unwrap().push(Call::Replace {
            id: key.clone(),
            replicas: deployment.spec.as_ref().and_then(|s| s.replicas),
        });
        if self.failing_replaces.lock().unwrap().contains(&key) {
            return Err(api_error(409, "Conflict"));
        }
        self.deployments
            .lock()
            .unwrap()
            .insert(key, deployment.clone());
        Ok(deployment.clone())
    }
}
