//! runed - a minimal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! runed notes.txt
//! runed --tab-stop 8 Makefile
//! runed --width unicode --log-file runed.log README.md
//! ```
//!
//! Ctrl+S saves, Ctrl+Q quits without prompting.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use runed::app::App;
use runed::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use runed::editor::WidthPolicy;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "runed", version, about, long_about = None)]
struct Cli {
    /// File to edit; also the save target
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(long, value_name = "N")]
    tab_stop: Option<usize>,

    /// How wide (two-cell) characters are detected
    #[arg(long, value_enum)]
    width: Option<WidthPolicy>,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save_defaults: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear_defaults: bool,
}

// The editor owns the screen, so logs only go to stderr at WARN unless a
// log file is given.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_level = if log_file.is_some() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear_defaults {
        clear_config_flags(&global_path)?;
    }
    if cli.save_defaults {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear_defaults {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;
    tracing::debug!(?effective, file = ?cli.file, "starting");

    let mut app = App::new(cli.file).with_render_options(effective.render_options());
    app.run().context("Application error")
}
