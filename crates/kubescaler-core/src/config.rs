//! Run configuration, resolved once at startup and passed explicitly.

use std::path::{Path, PathBuf};

use crate::types::ScaleMode;

/// Where the cluster connection settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterSource {
    /// A kubeconfig file given on the command line.
    Explicit(PathBuf),
    /// Default discovery: `KUBECONFIG`, `~/.kube/config`, then in-cluster.
    Ambient,
}

impl ClusterSource {
    pub fn kubeconfig_path(&self) -> Option<&Path> {
        match self {
            ClusterSource::Explicit(path) => Some(path),
            ClusterSource::Ambient => None,
        }
    }
}

impl From<Option<PathBuf>> for ClusterSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ClusterSource::Explicit(path),
            None => ClusterSource::Ambient,
        }
    }
}

/// Everything a single `up`/`down` run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Workload listing to read targets from.
    pub file: PathBuf,
    pub cluster: ClusterSource,
    pub mode: ScaleMode,
}

impl RunConfig {
    pub fn new(file: impl Into<PathBuf>, kubeconfig: Option<PathBuf>, mode: ScaleMode) -> Self {
        Self {
            file: file.into(),
            cluster: ClusterSource::from(kubeconfig),
            mode,
        }
    }
}
