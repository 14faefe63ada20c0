mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use curator_acquire::MuseumClient;
use curator_model::Config;
use curator_store::MongoStore;
use pipeline::RunOutcome;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Build a mini exhibition from the Cleveland Museum of Art open-access API")]
#[command(version)]
struct Cli {
    /// Path to the JSON config file with MongoDB credentials
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Title of the exhibition to start from
    #[arg(short, long, default_value = pipeline::DEFAULT_EXHIBITION)]
    exhibition: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(cli: &Cli) {
    // Keep the HTTP and database drivers quiet at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,mongodb=warn,hyper=warn,hyper_util=warn,rustls=warn",
        LogLevel::Trace => "trace,mongodb=warn,hyper=warn,hyper_util=warn,rustls=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    // Fail before any network activity if the config is incomplete
    let config = Config::load(&cli.config)
        .with_context(|| format!("Please provide all required MongoDB configurations in {}", cli.config))?;
    tracing::debug!(?config, "Loaded configuration");

    let client = MuseumClient::new(&config.api_base_url).context("Failed to build HTTP client")?;

    tracing::info!(exhibition = %cli.exhibition, api = %client.base_url(), "Building mini exhibition");
    let outcome = pipeline::run(&client, &cli.exhibition, || MongoStore::connect(&config)).await;

    match outcome {
        RunOutcome::Persisted(report) => {
            tracing::info!(inserted = report.inserted, skipped = report.skipped, "Mini exhibition saved");
        }
        other => tracing::warn!(outcome = ?other, "Mini exhibition not saved"),
    }

    Ok(())
}
