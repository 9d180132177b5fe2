//! kubescaler-core — shared types for the kubescaler workspace.
//!
//! Holds the `ScaleTarget` record model, the `ScaleMode` that decides which
//! replica count each target is driven to, the immutable `RunConfig`
//! built once at startup, and the CSV record loader.
//!
//! Nothing in this crate talks to a cluster.

pub mod config;
pub mod records;
pub mod types;

pub use config::{ClusterSource, RunConfig};
pub use records::{RecordError, load_targets, read_targets};
pub use types::*;
