//! Shared types used across kubescaler crates.

use std::fmt;

use serde::Deserialize;

/// One row of a workload listing: a deployment and the replica count it
/// should run with when scaled up.
///
/// Fields are positional in the input file, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScaleTarget {
    /// Deployment name.
    pub name: String,
    /// Namespace the deployment lives in.
    pub namespace: String,
    /// Ready/desired pod column as exported (e.g. `3/3`). Informational.
    pub pods: String,
    /// Replica count restored by `up`.
    pub replicas: u32,
    /// Age column as exported. Informational.
    pub age: u64,
    /// Condition column as exported (e.g. `Ready`). Informational.
    pub condition: String,
}

impl ScaleTarget {
    /// `namespace/name`, the form used in log lines and error messages.
    pub fn id(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// Which way a batch scales the listed deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Restore every deployment to its recorded replica count.
    Up,
    /// Scale every deployment to zero.
    Down,
}

impl ScaleMode {
    /// Replica count requested for `target` in this mode.
    ///
    /// `Down` ignores the recorded count entirely.
    pub fn replicas_for(&self, target: &ScaleTarget) -> u32 {
        match self {
            ScaleMode::Up => target.replicas,
            ScaleMode::Down => 0,
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMode::Up => write!(f, "up"),
            ScaleMode::Down => write!(f, "down"),
        }
    }
}
