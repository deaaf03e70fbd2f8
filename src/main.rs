use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{Config, Editor};
use std::path::{Path, PathBuf};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cd_inventory::cli_style::{self, get_styles};
use cd_inventory::config::{AppConfig, CliConfig, FileConfig};
use cd_inventory::inventory::{parse_record_id, Inventory, Record};
use cd_inventory::menu::{MenuChoice, MENU_ENTRIES};
use cd_inventory::persistence::{load_inventory, save_snapshot, LoadError};

const PROMPT: &str = ">> ";

type MenuEditor = Editor<(), FileHistory>;

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

/// Interactive manager for a CD collection.
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
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
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
    debug!("Resolved configuration: {:?}", config);

    let snapshot_path = config.snapshot_path();
    let text_path = config.text_path();

    cli_style::print_welcome(&config);

    let mut inventory = match load_inventory(&snapshot_path, &text_path) {
        Ok(loaded) => {
            cli_style::print_success(&format!(
                "Loaded {} record(s) from the {}.",
                loaded.inventory.len(),
                loaded.source
            ));
            loaded.inventory
        }
        Err(LoadError::NotFound { .. }) => {
            cli_style::print_info("No saved inventory found, starting empty.");
            Inventory::new()
        }
        Err(err) => {
            cli_style::print_error(&format!("Could not load the inventory: {}", err));
            cli_style::print_warning("Starting with an empty inventory.");
            Inventory::new()
        }
    };

    let editor_config = Config::builder().build();
    let mut rl = Editor::<(), FileHistory>::with_config(editor_config)?;

    loop {
        cli_style::print_menu(MENU_ENTRIES);
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(err) => {
                cli_style::print_error(&format!("Error: {:?}", err));
                break;
            }
        };
        let _ = rl.add_history_entry(&line);

        let choice = match MenuChoice::parse(&line) {
            Some(choice) => choice,
            None => {
                cli_style::print_warning("Pick one of [l, a, i, d, s, x].");
                continue;
            }
        };

        match choice {
            MenuChoice::Load => handle_load(&mut rl, &mut inventory, &snapshot_path, &text_path)?,
            MenuChoice::Add => handle_add(&mut rl, &mut inventory)?,
            MenuChoice::Display => cli_style::print_inventory(inventory.records()),
            MenuChoice::Delete => handle_delete(&mut rl, &mut inventory)?,
            MenuChoice::Save => handle_save(&mut rl, &inventory, &snapshot_path)?,
            MenuChoice::Exit => break,
        }
    }

    cli_style::print_goodbye();
    Ok(())
}

/// Reads one prompt line. `None` means the user backed out with CTRL-C or
/// CTRL-D and the current operation should be cancelled.
fn prompt_line(rl: &mut MenuEditor, text: &str) -> Result<Option<String>> {
    match rl.readline(text) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn pause(rl: &mut MenuEditor) -> Result<()> {
    let _ = prompt_line(rl, "Press [ENTER] to return to the menu. ")?;
    Ok(())
}

fn handle_add(rl: &mut MenuEditor, inventory: &mut Inventory) -> Result<()> {
    let raw_id = match prompt_line(rl, "Enter ID: ")? {
        Some(line) => line,
        None => {
            cli_style::print_warning("Add cancelled.");
            return Ok(());
        }
    };
    let title = match prompt_line(rl, "What is the CD's title? ")? {
        Some(line) => line,
        None => {
            cli_style::print_warning("Add cancelled.");
            return Ok(());
        }
    };
    let artist = match prompt_line(rl, "What is the artist's name? ")? {
        Some(line) => line,
        None => {
            cli_style::print_warning("Add cancelled.");
            return Ok(());
        }
    };

    match Record::parse(raw_id.trim(), title.trim(), artist.trim()) {
        Ok(record) => {
            inventory.add(record);
            cli_style::print_success("CD added to the inventory.");
        }
        Err(err) => cli_style::print_error(&err.to_string()),
    }
    cli_style::print_inventory(inventory.records());
    Ok(())
}

fn handle_delete(rl: &mut MenuEditor, inventory: &mut Inventory) -> Result<()> {
    cli_style::print_inventory(inventory.records());
    let raw_id = match prompt_line(rl, "Which ID would you like to delete? ")? {
        Some(line) => line,
        None => {
            cli_style::print_warning("Delete cancelled.");
            return Ok(());
        }
    };

    match parse_record_id(&raw_id) {
        Ok(id) => match inventory.remove_first(id) {
            Some(_) => cli_style::print_success("The CD was removed."),
            None => cli_style::print_warning("Could not find this CD!"),
        },
        Err(err) => cli_style::print_error(&err.to_string()),
    }
    cli_style::print_inventory(inventory.records());
    Ok(())
}

fn handle_load(
    rl: &mut MenuEditor,
    inventory: &mut Inventory,
    snapshot_path: &Path,
    text_path: &Path,
) -> Result<()> {
    cli_style::print_warning("Reloading from file will throw away any unsaved changes.");
    let answer =
        prompt_line(rl, "Type 'yes' to continue and reload from file: ")?.unwrap_or_default();
    if answer.trim().to_lowercase() != "yes" {
        cli_style::print_info("Cancelling, the inventory was NOT reloaded.");
        pause(rl)?;
        cli_style::print_inventory(inventory.records());
        return Ok(());
    }

    match load_inventory(snapshot_path, text_path) {
        Ok(loaded) => {
            *inventory = loaded.inventory;
            cli_style::print_success(&format!(
                "Reloaded {} record(s) from the {}.",
                inventory.len(),
                loaded.source
            ));
        }
        Err(LoadError::NotFound { .. }) => {
            *inventory = Inventory::new();
            cli_style::print_warning("No inventory file found, the inventory is now empty.");
        }
        Err(err) => {
            cli_style::print_error(&err.to_string());
            cli_style::print_warning("Keeping the current in-memory inventory.");
        }
    }
    cli_style::print_inventory(inventory.records());
    Ok(())
}

fn handle_save(rl: &mut MenuEditor, inventory: &Inventory, snapshot_path: &Path) -> Result<()> {
    cli_style::print_inventory(inventory.records());
    let answer = prompt_line(rl, "Save this inventory to file? [y/n] ")?.unwrap_or_default();
    if answer.trim().to_lowercase() == "y" {
        match save_snapshot(snapshot_path, inventory.records()) {
            Ok(()) => {
                cli_style::print_success(&format!("Inventory saved to {:?}.", snapshot_path))
            }
            Err(err) => cli_style::print_error(&err.to_string()),
        }
    } else {
        cli_style::print_info("The inventory was NOT saved to file.");
        pause(rl)?;
    }
    Ok(())
}
