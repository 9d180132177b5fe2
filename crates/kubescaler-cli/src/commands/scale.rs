//! `kubescaler up` / `kubescaler down`.
//!
//! The listing is loaded and validated before the cluster connection is
//! resolved, so a bad file never touches the cluster.

use anyhow::{Context, Result};
use tracing::info;

use kubescaler_core::{RunConfig, load_targets};
use kubescaler_scale::{KubeDeploymentClient, Scaler, connect, run_batch};

pub async fn run(config: &RunConfig) -> Result<()> {
    let targets = load_targets(&config.file).context("failed to load scale targets")?;
    info!(
        file = %config.file.display(),
        count = targets.len(),
        mode = %config.mode,
        "loaded scale targets"
    );

    let client = connect(&config.cluster)
        .await
        .context("failed to connect to the cluster")?;
    let scaler = Scaler::new(KubeDeploymentClient::new(client));

    let report = run_batch(&scaler, &targets, config.mode)
        .await
        .with_context(|| format!("scale {} aborted", config.mode))?;

    println!(
        "✓ Scaled {} deployment(s) {}",
        report.scaled, config.mode
    );
    if report.skipped > 0 {
        println!("  Skipped {} deployment(s) without a spec", report.skipped);
    }

    Ok(())
}
