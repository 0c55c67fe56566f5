mod export;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use voyage_core::{AppConfig, CampaignRequest};

#[derive(Debug, Parser)]
#[command(name = "voyage-cli")]
#[command(about = "Plan multi-platform luxury travel campaigns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a campaign plan and print it
    Plan {
        /// Request file (YAML or JSON); falls back to `VOYAGE_REQUEST_PATH`, then the sample brief
        #[arg(long)]
        request: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Export the scheduled posts as CSV
    Export {
        /// Request file (YAML or JSON); falls back to `VOYAGE_REQUEST_PATH`, then the sample brief
        #[arg(long)]
        request: Option<PathBuf>,
        /// Destination file; defaults to `VOYAGE_EXPORT_PATH`
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a request and print the normalized input
    Validate {
        #[arg(long)]
        request: Option<PathBuf>,
    },
    /// List the supported platforms
    Platforms,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = voyage_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Plan { request, format }) => run_plan(&config, request.as_deref(), format),
        Some(Commands::Export { request, output }) => {
            run_export(&config, request.as_deref(), output.as_deref())
        }
        Some(Commands::Validate { request }) => run_validate(&config, request.as_deref()),
        Some(Commands::Platforms) => {
            print!("{}", render::render_platforms());
            Ok(())
        }
        None => run_plan(&config, None, OutputFormat::Table),
    }
}

/// Load the explicit request file, else the configured one, else the sample brief.
fn resolve_request(config: &AppConfig, explicit: Option<&Path>) -> anyhow::Result<CampaignRequest> {
    match explicit.or(config.request_path.as_deref()) {
        Some(path) => voyage_core::load_request(path)
            .with_context(|| format!("failed to load request {}", path.display())),
        None => {
            tracing::info!("no request file given; using the sample brief");
            Ok(CampaignRequest::sample(chrono::Utc::now().date_naive()))
        }
    }
}

fn run_plan(
    config: &AppConfig,
    request_path: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let request = resolve_request(config, request_path)?;
    let plan = voyage_core::plan_from_request(&request)?;

    match format {
        OutputFormat::Table => print!("{}", render::render_plan(&plan, config.preview_limit)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

fn run_export(
    config: &AppConfig,
    request_path: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let request = resolve_request(config, request_path)?;
    let plan = voyage_core::plan_from_request(&request)?;
    let output = output.unwrap_or(config.export_path.as_path());

    std::fs::write(output, export::posts_to_csv(&plan.posts))
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), posts = plan.posts.len(), "campaign exported");
    println!("exported {} posts to {}", plan.posts.len(), output.display());
    Ok(())
}

fn run_validate(config: &AppConfig, request_path: Option<&Path>) -> anyhow::Result<()> {
    let request = resolve_request(config, request_path)?;
    let input = voyage_core::validate(&request)?;
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(())
}
