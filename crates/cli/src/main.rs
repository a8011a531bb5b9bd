//! # nostradamus-cli
//!
//! Command-line interface for the Nostradamus prediction service. Runs the
//! service in-process by default, or talks to a server with `--remote`.

use clap::{Parser, Subcommand};
use client::{ClientConfig, PredictionClient};
use prediction_facade::{
    AppInfo, HistoricalData, ModelDescriptor, PredictionRequest, PredictionResponse,
    PredictionService, PredictionSummary, ServiceConfig,
};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "nostradamus")]
#[command(about = "Time series prediction CLI", long_about = None)]
struct Cli {
    /// API root of a running server (e.g. http://localhost:8080/api)
    #[arg(long, global = true)]
    remote: Option<String>,

    /// Request timeout in milliseconds (remote mode only)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show application metadata
    Info,

    /// List the available prediction models
    Models,

    /// Generate a prediction
    Predict {
        /// Number of periods to forecast (service default when omitted)
        #[arg(short, long, allow_negative_numbers = true)]
        periods: Option<i64>,

        /// Model identifier (auto, arima, prophet, lstm)
        #[arg(short, long)]
        model: Option<String>,

        /// Noise seed for reproducible output (local mode only)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of leading/trailing values shown in the summary
        #[arg(long, default_value = "5")]
        sample: usize,

        /// Write the full response as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch historical data for a dataset
    History {
        /// Dataset identifier
        dataset_id: String,
    },
}

/// Where requests are served from
enum Backend {
    Local(PredictionService),
    Remote(PredictionClient),
}

impl Backend {
    fn new(remote: Option<&str>, timeout_ms: Option<u64>, seed: Option<u64>) -> CliResult<Self> {
        let mut config = ServiceConfig::from_env().map_err(|e| e.to_string())?;

        match remote {
            Some(url) => {
                if seed.is_some() {
                    return Err("--seed is only supported for local predictions".to_string());
                }
                let timeout_ms = timeout_ms.unwrap_or(config.request_timeout_ms);
                let client = PredictionClient::new(ClientConfig::new(url).with_timeout_ms(timeout_ms))
                    .map_err(|e| e.to_string())?;
                Ok(Backend::Remote(client))
            }
            None => {
                if timeout_ms.is_some() {
                    return Err("--timeout-ms is only supported with --remote".to_string());
                }
                if seed.is_some() {
                    config.seed = seed;
                }
                let service = PredictionService::new(config).map_err(|e| e.to_string())?;
                Ok(Backend::Local(service))
            }
        }
    }

    async fn app_info(&self) -> CliResult<AppInfo> {
        match self {
            Backend::Local(service) => Ok(service.app_info()),
            Backend::Remote(client) => client.app_info().await.map_err(|e| e.to_string()),
        }
    }

    async fn list_models(&self) -> CliResult<Vec<ModelDescriptor>> {
        match self {
            Backend::Local(service) => Ok(service.list_models()),
            Backend::Remote(client) => client.list_models().await.map_err(|e| e.to_string()),
        }
    }

    async fn predict(&self, request: &PredictionRequest) -> CliResult<PredictionResponse> {
        let result = match self {
            Backend::Local(service) => service.predict(request),
            Backend::Remote(client) => client.predict(request).await,
        };
        result.map_err(|e| e.to_string())
    }

    async fn historical_data(&self, dataset_id: &str) -> CliResult<HistoricalData> {
        let result = match self {
            Backend::Local(service) => service.historical_data(dataset_id),
            Backend::Remote(client) => client.historical_data(dataset_id).await,
        };
        result.map_err(|e| e.to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))
}

fn render_info(info: &AppInfo) -> String {
    format!(
        "Nostradamus v{}\nAuthor:  {}\nLicense: {}\nStatus:  {}",
        info.version, info.author, info.license, info.status
    )
}

fn render_models(models: &[ModelDescriptor]) -> String {
    models
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {} ({})\n   {}", i + 1, m.name, m.id, m.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_history(data: &HistoricalData) -> String {
    format!(
        "Dataset:   {}\nRecords:   {}\nTimestamp: {}",
        data.dataset_id,
        data.records.len(),
        data.timestamp
    )
}

/// Write prediction results to file
fn write_prediction(response: &PredictionResponse, path: &PathBuf) -> CliResult<()> {
    let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(&mut file, response)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    println!("Prediction written to {:?}", path);
    Ok(())
}

async fn run(cli: Cli) -> CliResult<()> {
    let seed = match &cli.command {
        Commands::Predict { seed, .. } => *seed,
        _ => None,
    };
    let backend = Backend::new(cli.remote.as_deref(), cli.timeout_ms, seed)?;

    match cli.command {
        Commands::Info => {
            let info = backend.app_info().await?;
            let text = if cli.json { to_json(&info)? } else { render_info(&info) };
            println!("{}", text);
        }

        Commands::Models => {
            let models = backend.list_models().await?;
            let text = if cli.json {
                to_json(&models)?
            } else {
                render_models(&models)
            };
            println!("{}", text);
        }

        Commands::Predict {
            periods,
            model,
            sample,
            output,
            ..
        } => {
            let request = PredictionRequest { periods, model };
            let response = backend.predict(&request).await?;

            if cli.json {
                println!("{}", to_json(&response)?);
            } else {
                print!("{}", PredictionSummary::new(&response, sample));
            }
            if let Some(path) = output {
                write_prediction(&response, &path)?;
            }
        }

        Commands::History { dataset_id } => {
            let data = backend.historical_data(&dataset_id).await?;
            let text = if cli.json { to_json(&data)? } else { render_history(&data) };
            println!("{}", text);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
