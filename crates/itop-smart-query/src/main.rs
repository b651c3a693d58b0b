//! iTop smart query CLI: answers one natural-language question against an
//! iTop instance and prints the report.
//!
//! Usage: `itop-smart-query [--config FILE] [--mode detailed|summary|table]
//! [--class NAME] [--limit N] <query words...>` or `--list-operations`.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use itop_client::ITopClient;
use itop_smart_query::{AppConfig, OutputMode, SmartQueryOptions, SmartQueryProcessor, Taxonomy};

#[derive(Debug, Parser)]
#[command(name = "itop-smart-query")]
#[command(version)]
#[command(about = "Answer natural-language questions against an iTop instance")]
struct Cli {
    /// TOML config file (reads ITOP_* environment variables if not provided)
    #[arg(long)]
    config: Option<String>,

    /// Output mode: detailed, summary or table
    #[arg(long)]
    mode: Option<OutputMode>,

    /// Query this backend class instead of detecting one
    #[arg(long)]
    class: Option<String>,

    /// Result cap, clamped to the configured maximum
    #[arg(long)]
    limit: Option<u32>,

    /// List the REST operations the instance supports and exit
    #[arg(long)]
    list_operations: bool,

    /// The question, e.g. "show all production servers"
    #[arg(required_unless_present = "list_operations")]
    query: Vec<String>,
}

impl Cli {
    fn query_text(&self) -> String {
        self.query.join(" ")
    }

    fn query_options(&self) -> SmartQueryOptions {
        SmartQueryOptions {
            mode: self.mode,
            force_class: self.class.clone(),
            limit: self.limit,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.backend.base_url,
        "itop-smart-query starting"
    );

    // ── Wire the processor ──────────────────────────────────────
    let client = ITopClient::new(config.backend.clone())?;
    let processor =
        SmartQueryProcessor::new(Arc::new(Taxonomy::standard()), Arc::new(client), config.query);

    let output = if cli.list_operations {
        processor.list_operations().await
    } else {
        processor
            .smart_query(&cli.query_text(), &cli.query_options())
            .await
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("itop-smart-query").chain(args.iter().copied()))
    }

    #[test]
    fn query_words_are_joined() {
        let cli = parse(&["show", "all", "production", "servers"]).unwrap();
        assert_eq!(cli.query_text(), "show all production servers");
        assert!(cli.config.is_none());
        assert!(!cli.list_operations);
        assert_eq!(cli.query_options(), SmartQueryOptions::default());
    }

    #[test]
    fn flags_are_parsed() {
        let cli = parse(&[
            "--config", "itop.toml", "--mode", "table", "--class", "Server", "--limit", "25",
            "servers",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("itop.toml"));
        let options = cli.query_options();
        assert_eq!(options.mode, Some(OutputMode::Table));
        assert_eq!(options.force_class.as_deref(), Some("Server"));
        assert_eq!(options.limit, Some(25));
    }

    #[test]
    fn list_operations_needs_no_query() {
        assert!(parse(&["--list-operations"]).unwrap().list_operations);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--limit"]).is_err());
        assert!(parse(&["--limit", "many", "servers"]).is_err());
        assert!(parse(&["--verbose", "servers"]).is_err());
        assert!(parse(&["--mode", "fancy", "servers"]).is_err());
    }
}
