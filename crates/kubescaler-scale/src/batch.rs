//! Batch driver for `up` and `down` runs.

use tracing::info;

use kubescaler_core::{ScaleMode, ScaleTarget};

use crate::client::DeploymentClient;
use crate::error::ScaleResult;
use crate::scaler::{ScaleOutcome, Scaler};

/// Summary of a batch that ran to completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub scaled: usize,
    pub skipped: usize,
}

/// Scale every target in order, one at a time.
///
/// The first error aborts the batch and is returned; targets after it are
/// not touched and targets before it stay scaled.
pub async fn run_batch<C: DeploymentClient>(
    scaler: &Scaler<C>,
    targets: &[ScaleTarget],
    mode: ScaleMode,
) -> ScaleResult<BatchReport> {
    info!(%mode, count = targets.len(), "starting scale batch");

    let mut report = BatchReport::default();
    for target in targets {
        let replicas = mode.replicas_for(target);
        match scaler
            .apply_scale(&target.namespace, &target.name, replicas)
            .await?
        {
            ScaleOutcome::Scaled { .. } => report.scaled += 1,
            ScaleOutcome::Skipped => report.skipped += 1,
        }
    }

    info!(
        %mode,
        scaled = report.scaled,
        skipped = report.skipped,
        "scale batch complete"
    );
    Ok(report)
}
