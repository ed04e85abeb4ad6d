use anyhow::Context;
use assort::config::{Config, MalformedJson};
use assort::{numeric, AmountPolicy, ContentType, Pipeline};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assort", about = "Normalize supplier product feeds")]
struct Cli {
    /// Log at debug level to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a CSV or JSON payload and print canonical products as JSON.
    Normalize {
        /// Payload file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// MIME type of the payload (`text/csv` or `application/json`).
        #[arg(long, short = 't')]
        content_type: String,
        /// Default unparseable amounts to 0.0 instead of failing.
        #[arg(long)]
        lenient_amount: bool,
        /// Fail on malformed JSON instead of yielding no products.
        #[arg(long)]
        strict_json: bool,
        /// Config file to use instead of ~/.config/assort/config.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Normalize a human-formatted number to a fixed-precision decimal.
    Decimal {
        raw: String,
        /// Decimal places; defaults to `decimal_precision` from the config.
        #[arg(long, short = 'p')]
        precision: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Command::Normalize {
            file,
            content_type,
            lenient_amount,
            strict_json,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if lenient_amount {
                config.normalize.amount_policy = AmountPolicy::Lenient;
            }
            if strict_json {
                config.json.on_malformed = MalformedJson::Error;
            }

            let content_type: ContentType = content_type.parse()?;
            let payload = read_payload(file.as_deref())?;
            let products = Pipeline::new(config).run(&payload, content_type)?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Command::Decimal { raw, precision } => {
            let precision = match precision {
                Some(precision) => precision,
                None => load_config(None)?.normalize.decimal_precision,
            };
            println!("{}", numeric::normalize_decimal(&raw, precision)?);
        }
    }
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            Config::load_from(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unavailable; using defaults");
            Config::defaults()
        })),
    }
}

fn read_payload(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading payload {}", path.display())),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("reading payload from stdin")?;
            Ok(payload)
        }
    }
}
