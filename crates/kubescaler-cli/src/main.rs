use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use kubescaler_core::{RunConfig, ScaleMode};

mod commands;

#[derive(Debug, Parser)]
#[command(
    name = "kubescaler",
    about = "Kubernetes deployment scale helper",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Lens export of workload deployments (*.csv). Required.
    // Global args cannot be `required` in clap; presence is checked in
    // `into_run_config`.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Kubeconfig file path. Defaults to KUBECONFIG, ~/.kube/config,
    /// or the in-cluster service account.
    #[arg(short, long, global = true)]
    kubeconfig: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scale every listed deployment to its recorded replica count
    Up,
    /// Scale every listed deployment to zero replicas
    Down,
}

impl Cli {
    fn into_run_config(self) -> Result<RunConfig, clap::Error> {
        let Some(file) = self.file else {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  --file <FILE>",
            ));
        };
        let mode = match self.command {
            Commands::Up => ScaleMode::Up,
            Commands::Down => ScaleMode::Down,
        };
        Ok(RunConfig::new(file, self.kubeconfig, mode))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kubescaler=info".parse()?)
        )
        .init();

    let config = Cli::parse()
        .into_run_config()
        .unwrap_or_else(|e| e.exit());

    commands::scale::run(&config).await
}
