//! Command-line interface for the FINN client.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::client::FinnClient;
use crate::config::{validate_ad_type, validate_finn_code, ClientConfig};
use crate::decode::FeedDecoder;
use crate::error::Result;
use crate::types::{Decoded, Property, Resultset};

/// FINN client - Fetch real-estate listings and decode them into structured records.
#[derive(Parser)]
#[command(name = "finn-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// API base URL (default: $FINN_API_URL or https://cache.api.finn.no/iad/).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search listings of an ad type.
    Search {
        /// Ad type (e.g., realestate-homes)
        ad_type: String,

        /// Query parameter as key=value (repeatable)
        #[arg(short = 'q', long = "query", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },

    /// Get a single listing by FINN code.
    Get {
        /// Ad type (e.g., realestate-homes)
        ad_type: String,

        /// FINN code of the ad
        finn_code: String,
    },

    /// Get a single listing from its API URL.
    Fetch {
        /// Absolute URL of the ad document
        url: String,
    },

    /// Decode a local XML document (feed or entry) without network access.
    Decode {
        /// Path to the XML file
        file: PathBuf,

        /// Decode as a feed even if the root element is not `feed`
        #[arg(long)]
        feed: bool,
    },
}

/// Serialization format for decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Parse a `key=value` query parameter.
fn parse_query_pair(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid query parameter '{s}': expected key=value"))?;
    if key.is_empty() {
        return Err(format!("invalid query parameter '{s}': empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url.clone());
    }

    let output = cli.output.as_deref();
    match &cli.command {
        Commands::Search { ad_type, query } => {
            validate_ad_type(ad_type)?;
            let resultset = with_spinner(&format!("Searching {ad_type}..."), || {
                FinnClient::new(config)?.search(ad_type, query)
            })?;
            report_resultset(&resultset);
            emit(&resultset, cli.format, output)
        }
        Commands::Get { ad_type, finn_code } => {
            validate_ad_type(ad_type)?;
            validate_finn_code(finn_code)?;
            let property = with_spinner(&format!("Fetching {finn_code}..."), || {
                FinnClient::new(config)?.get_object(ad_type, finn_code)
            })?;
            report_property(&property);
            emit(&property, cli.format, output)
        }
        Commands::Fetch { url } => {
            let property = with_spinner(&format!("Fetching {url}..."), || {
                FinnClient::new(config)?.get_object_by_url(url)
            })?;
            report_property(&property);
            emit(&property, cli.format, output)
        }
        Commands::Decode { file, feed } => {
            let bytes = fs::read(file)?;
            let xml = std::str::from_utf8(&bytes)?;
            let decoder = FeedDecoder::new();
            let decoded = if *feed {
                Decoded::Feed(decoder.decode_resultset(xml)?)
            } else {
                decoder.decode_document(xml)?
            };
            match &decoded {
                Decoded::Feed(resultset) => report_resultset(resultset),
                Decoded::Entry(property) => report_property(property),
            }
            emit(&decoded, cli.format, output)
        }
    }
}

/// Run a network operation behind a spinner on stderr.
fn with_spinner<T>(message: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = op();
    pb.finish_and_clear();
    result
}

fn report_resultset(resultset: &Resultset) {
    eprintln!(
        "{} {} ({} of {} results)",
        style("Decoded").bold(),
        style(&resultset.title).cyan(),
        style(resultset.len()).green(),
        resultset.total_results
    );
}

fn report_property(property: &Property) {
    eprintln!(
        "{} {} {}",
        style("Decoded").bold(),
        style(&property.id).cyan(),
        style(&property.title).green()
    );
    if property.is_disposed() {
        eprintln!("  Status: {}", style(&property.status).yellow().bold());
    }
}

/// Serialize `value` and write it to `output` or stdout.
fn emit<T: Serialize>(value: &T, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = render(value, format)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

/// Render a record in the requested format, newline-terminated.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
