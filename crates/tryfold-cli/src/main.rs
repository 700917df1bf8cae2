use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tryfold_core::{BatchConfig, BatchLoaderBuilder, FetchError, Fetcher};

/// Fetch a batch of keys and print the partial-result response as JSON.
#[derive(Parser, Debug)]
#[command(name = "tryfold")]
#[command(about = "Run a simulated batch fetch and print {data, errors}")]
struct Args {
    /// Keys to fetch.
    #[arg(required = true)]
    keys: Vec<String>,

    /// Key whose fetch fails with code 500 (repeatable).
    #[arg(long = "fail", value_name = "KEY")]
    fail: Vec<String>,

    /// Key whose fetch panics (repeatable).
    #[arg(long = "panic", value_name = "KEY")]
    panic: Vec<String>,

    /// Maximum number of fetches in flight.
    #[arg(long, default_value_t = BatchConfig::default().max_concurrency)]
    max_concurrency: usize,

    /// Simulated latency per fetch, in milliseconds.
    #[arg(long, default_value = "10")]
    latency_ms: u64,
}

/// Stand-in for a remote service: echoes the key unless told otherwise.
struct SimulatedRemote {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    latency: Duration,
}

#[async_trait]
impl Fetcher<String, String> for SimulatedRemote {
    async fn fetch(&self, key: &String) -> Result<String, FetchError> {
        tokio::time::sleep(self.latency).await;

        if self.panicking.contains(key) {
            panic!("simulated crash while fetching {key}");
        }
        if self.failing.contains(key) {
            return Err(FetchError::failed(500, format!("remote refused {key}")));
        }
        Ok(format!("data{key}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let remote = SimulatedRemote {
        failing: args.fail.into_iter().collect(),
        panicking: args.panic.into_iter().collect(),
        latency: Duration::from_millis(args.latency_ms),
    };

    let loader = BatchLoaderBuilder::new()
        .fetcher(remote)
        .max_concurrency(args.max_concurrency)
        .build()?;

    info!(keys = args.keys.len(), max_concurrency = args.max_concurrency, "loading batch");
    let response = loader.load_response(args.keys).await;
    info!(
        loaded = response.data.len(),
        failed = response.errors.len(),
        "batch loaded"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
