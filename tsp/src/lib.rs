use crate::bookmark::{BookmarkStore, JsonFileStore, MemoryStore};
use crate::config::Config;
use crate::environment::{LOG_FILE, get_state_file};
use crate::errors::display_user_error;
use crate::opener::{BrowserOpener, PrintOpener, UrlOpener};
use crate::output::{TableRenderer, TerminalOutput};
use crate::repl::Repl;
use crate::startpage::Startpage;
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tsp_types::ExitStatus;

pub mod bookmark;
pub mod completion;
pub mod config;
pub mod environment;
pub mod errors;
pub mod history;
pub mod input;
pub mod interpreter;
pub mod opener;
pub mod output;
pub mod repl;
pub mod search;
pub mod startpage;
pub mod utils;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run a single line and exit
    #[arg(short, long)]
    pub command: Option<String>,

    /// Print URLs instead of opening them in the browser
    #[arg(long)]
    pub dry_run: bool,

    /// Keep bookmark changes in memory only
    #[arg(long)]
    pub no_save: bool,

    #[command(subcommand)]
    pub subcommand: Option<SubCommand>,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Replace all bookmarks with the links of a browser bookmark export
    Import {
        /// Bookmark HTML file exported from the browser
        file: PathBuf,
    },
    /// Write the bookmarks as a browser bookmark HTML file
    Export {
        /// Destination; defaults to a dated file in the current directory
        file: Option<PathBuf>,
    },
}

pub fn lib_main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = Config::try_load();
    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    if let Err(err) = init_tracing(&log_level) {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }
    let config = loaded.unwrap_or_else(|err| {
        warn!("ignoring config: {:#}", err);
        Config::default()
    });

    setup_panic_handler();

    match run(cli, config) {
        Ok(code) => code,
        Err(err) => {
            display_user_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let interactive = cli.command.is_none() && cli.subcommand.is_none();
    let mut startpage = build_startpage(&cli, config, interactive)?;
    startpage.load();

    if let Some(subcommand) = cli.subcommand {
        let status = match subcommand {
            SubCommand::Import { file } => {
                startpage.run_builtin("import", vec![file.display().to_string()])?
            }
            SubCommand::Export { file } => {
                let args = file.map(|f| f.display().to_string()).into_iter().collect();
                startpage.run_builtin("export", args)?
            }
        };
        return Ok(exit_code(status));
    }

    if let Some(line) = cli.command {
        return Ok(exit_code(startpage.submit(&line)));
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    let mut repl = Repl::new(startpage);
    rt.block_on(repl.run_interactive())?;
    Ok(ExitCode::SUCCESS)
}

fn build_startpage(cli: &Cli, config: Config, interactive: bool) -> Result<Startpage> {
    let storage_path = config.storage_path()?;
    debug!("bookmark storage {}", storage_path.display());

    let file_store = JsonFileStore::new(storage_path);
    let store: Box<dyn BookmarkStore> = if cli.no_save {
        let bookmarks = file_store.load_all().unwrap_or_else(|err| {
            warn!("failed to seed in-memory store: {}", err);
            Vec::new()
        });
        Box::new(MemoryStore::new(bookmarks))
    } else {
        Box::new(file_store)
    };

    let opener: Box<dyn UrlOpener> = if cli.dry_run || !config.open_in_browser {
        Box::new(PrintOpener::stdout())
    } else {
        Box::new(BrowserOpener)
    };

    let startpage = Startpage::new(
        config,
        store,
        Box::new(TerminalOutput::stdout(interactive)),
        opener,
    );
    Ok(if interactive {
        startpage.with_renderer(Box::new(TableRenderer))
    } else {
        startpage
    })
}

fn exit_code(status: ExitStatus) -> ExitCode {
    match status {
        ExitStatus::ExitedWith(code) => ExitCode::from(code.clamp(0, 255) as u8),
    }
}

/// Log to `tsp.log` in the state directory. `TSP_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let log_path = get_state_file(LOG_FILE)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_env("TSP_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::sync::Arc::new(log_file))
        .init();
    Ok(())
}

pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // the prompt runs in raw mode
        let _ = crossterm::terminal::disable_raw_mode();

        let payload = panic_info.payload().downcast_ref::<&str>().map_or_else(
            || {
                if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic payload".to_string()
                }
            },
            |s| (*s).to_string(),
        );

        let location = panic_info.location().map_or_else(
            || "Unknown location".to_string(),
            |location| {
                format!(
                    "{}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
            },
        );

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC");
        tracing::error!("PANIC OCCURRED: {payload} at {location}");

        eprintln!("\n=== tsp PANIC ===");
        eprintln!("Message: {payload}");
        eprintln!("Location: {location}");
        eprintln!("Timestamp: {timestamp}");
        eprintln!("See {LOG_FILE} in the state directory for details");
        eprintln!("=================\n");
    }));
}
