//! valcurs - daily exchange rates from XML to sorted JSON
//!
//! ```text
//! valcurs --config config.yaml
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Convert a daily exchange-rate XML document into JSON sorted by value
#[derive(Parser, Debug)]
#[command(name = "valcurs")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (YAML format)
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = service_cli::load_config(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;

    let report = service_cli::run(&config).map_err(|e| {
        let context = format!(
            "converting {} ({} stage)",
            config.input_file.display(),
            e.stage()
        );
        anyhow::Error::new(e).context(context)
    })?;

    info!(
        records = report.records,
        output = %report.output.display(),
        bytes = report.bytes_written,
        "Conversion complete"
    );

    Ok(())
}
