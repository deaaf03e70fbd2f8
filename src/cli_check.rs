use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cd_inventory::cli_style::{self, get_styles};
use cd_inventory::config::{AppConfig, CliConfig, FileConfig};
use cd_inventory::persistence::{load_inventory, LoadError};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

fn parse_dir(s: &str) -> Result<PathBuf, String> {
    let path = parse_path(s)?;
    if !path.exists() {
        return Err(format!("Directory does not exist: {}", s));
    }
    if !path.is_dir() {
        return Err(format!("Path is not a directory: {}", s));
    }
    Ok(path)
}

/// Reads the inventory files without opening the interactive menu, for
/// checking what a data directory holds or whether it still loads.
#[derive(Parser, Debug)]
#[command(styles = get_styles())]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding the inventory files. Can also be specified in config file.
    #[clap(long, value_parser = parse_dir)]
    pub data_dir: Option<PathBuf>,

    /// File name of the binary snapshot inside the data directory.
    #[clap(long)]
    pub snapshot_file: Option<String>,

    /// File name of the text fallback inside the data directory.
    #[clap(long)]
    pub text_file: Option<String>,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            data_dir: args.data_dir.clone(),
            snapshot_file: args.snapshot_file.clone(),
            text_file: args.text_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    info!("Checking inventory data in {:?}", config.data_dir);

    match load_inventory(&config.snapshot_path(), &config.text_path()) {
        Ok(loaded) => {
            cli_style::print_success(&format!(
                "{} record(s) loaded from the {}.",
                loaded.inventory.len(),
                loaded.source
            ));
            cli_style::print_inventory(loaded.inventory.records());
            Ok(())
        }
        Err(LoadError::NotFound { .. }) => {
            cli_style::print_info("No inventory data found, nothing to check.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
