//! Error types for scale operations.

use thiserror::Error;

/// Result type alias for scale operations.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Errors that can occur while connecting to the cluster or scaling.
///
/// API failures carry the `kube::Error` returned by the orchestrator as
/// their source, untouched.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("cluster configuration error: {0}")]
    Config(String),

    #[error("failed to fetch deployment {namespace}/{name}: {source}")]
    Fetch {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to replace deployment {namespace}/{name}: {source}")]
    Replace {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("replica count {replicas} for {namespace}/{name} exceeds the API limit")]
    ReplicasOutOfRange {
        namespace: String,
        name: String,
        replicas: u32,
    },
}
