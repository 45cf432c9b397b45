//! SafeSight: heuristic file and URL triage.
//!
//! This is the main entry point for the CLI application.

use safesight::core::config::Config;
use safesight::core::error::Result;
use safesight::file::FileAnalyzer;
use safesight::ui::cli::{Cli, Commands, OutputFormat};
use safesight::ui::report;
use safesight::url::UrlAnalyzer;
use safesight::utils::logging::{init_logging, LogConfig};
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    init_logging(log_config);

    log::info!("SafeSight v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default();
    config.validate()?;

    match cli.command {
        Some(Commands::File { path, name }) => run_file(&config, &path, name, cli.format),
        Some(Commands::Url { url, no_fetch }) => {
            run_url(&config, &url, no_fetch, cli.format).await
        }
        None => {
            println!("SafeSight - Heuristic File and URL Triage");
            println!("Run with --help for usage information");
            Ok(())
        }
    }
}

fn run_file(
    config: &Config,
    path: &Path,
    name: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let declared_name = name.unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let analyzer = FileAnalyzer::with_config(&config.file);
    let result = analyzer.analyze_file(path, &declared_name)?;

    match format {
        OutputFormat::Text => print!("{}", report::render_file_text(&result)),
        OutputFormat::Json => println!("{}", report::render_file_json(&result)?),
    }

    Ok(())
}

async fn run_url(config: &Config, url: &str, no_fetch: bool, format: OutputFormat) -> Result<()> {
    let analyzer = if no_fetch {
        UrlAnalyzer::offline(&config.network)
    } else {
        UrlAnalyzer::with_config(&config.network)
    };

    let result = analyzer.analyze_url(url).await?;

    match format {
        OutputFormat::Text => print!("{}", report::render_url_text(&result)),
        OutputFormat::Json => println!("{}", report::render_url_json(&result)?),
    }

    Ok(())
}
