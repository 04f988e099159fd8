//! Command line driver for the Attendance Analyzer.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use attendance_analyzer::api::{AppState, create_router};
use attendance_analyzer::config::{ConfigLoader, RunConfig};
use attendance_analyzer::pipeline::run_batch;
use attendance_analyzer::sources::FeedClient;

#[derive(Parser)]
#[command(name = "attendance-analyzer")]
#[command(about = "Flags employees with anomalous attendance patterns", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to config/analyzer.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse the configured inputs once and write the result document
    Run(RunArgs),

    /// Serve the analysis over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Employee roster file
    #[arg(long)]
    employees: Option<PathBuf>,

    /// Attendance log file
    #[arg(long)]
    attendance: Option<PathBuf>,

    /// Event feed URL
    #[arg(long)]
    events_url: Option<String>,

    /// Weather feed URL
    #[arg(long)]
    weather_url: Option<String>,

    /// Result document path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Year whose weather records can excuse an absence
    #[arg(long)]
    year: Option<String>,
}

impl RunArgs {
    fn apply(self, config: &mut RunConfig) {
        if let Some(path) = self.employees {
            config.sources.employees_path = path;
        }
        if let Some(path) = self.attendance {
            config.sources.attendance_path = path;
        }
        if let Some(url) = self.events_url {
            config.sources.events_url = url;
        }
        if let Some(url) = self.weather_url {
            config.sources.weather_url = url;
        }
        if let Some(path) = self.output {
            config.sources.output_path = path;
        }
        if let Some(year) = self.year {
            config.analyzer.weather_year = year;
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = execute(cli).await {
        error!(error = %err, "Run failed");
        process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?.into_config();

    match cli.command {
        Commands::Run(args) => {
            args.apply(&mut config);
            let loader = ConfigLoader::from_config(config)?;
            run_batch(loader.config(), &FeedClient::new()).await?;
        }
        Commands::Serve { bind } => {
            let state = AppState::new(config.analyzer);
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            info!(address = %listener.local_addr()?, "Listening");
            axum::serve(listener, create_router(state)).await?;
        }
    }

    Ok(())
}
