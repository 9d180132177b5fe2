//! kubescaler-scale — applies replica counts to Kubernetes Deployments.
//!
//! # Flow
//!
//! ```text
//! connect(ClusterSource)         once per run
//!   └─ KubeDeploymentClient
//!        └─ Scaler::apply_scale   per target, in input order
//!             ├─ GET  apps/v1 Deployment
//!             ├─ no spec?  → Skipped (warn, no write)
//!             └─ PUT  full object with spec.replicas = n
//! ```
//!
//! `run_batch` drives the scaler over a listing and stops at the first
//! error. Nothing is retried and nothing already scaled is rolled back.

pub mod batch;
pub mod client;
pub mod error;
pub mod scaler;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{BatchReport, run_batch};
pub use client::{DeploymentClient, KubeDeploymentClient, connect};
pub use error::{ScaleError, ScaleResult};
pub use scaler::{ScaleOutcome, Scaler};
