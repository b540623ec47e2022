use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rankings::commands::{self, FilterArgs};
use rankings::config;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "rankings")]
#[command(version, about = "Filter, sort and render all-time team rankings")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Commands,
}

/// Filter options shared by the render and table commands
#[derive(Args)]
struct FilterOpts {
    /// Starting query string, as found in a page URL (e.g. "years=1996,2001")
    #[arg(short, long)]
    query: Option<String>,

    /// Add a year to the selection (repeatable)
    #[arg(short, long = "year")]
    years: Vec<String>,

    /// Add a league to the selection (repeatable)
    #[arg(short, long = "league")]
    leagues: Vec<String>,

    /// Team name search text
    #[arg(short, long)]
    search: Option<String>,

    /// Click a column header (repeatable; the same column twice flips direction)
    #[arg(long)]
    sort: Vec<String>,
}

impl From<FilterOpts> for FilterArgs {
    fn from(opts: FilterOpts) -> Self {
        FilterArgs {
            query: opts.query,
            years: opts.years,
            leagues: opts.leagues,
            search: opts.search,
            sort: opts.sort,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the ranking page regions as HTML
    Render {
        /// JSON rows file, or an HTML page with --html
        data: PathBuf,

        /// Read rows from the page's embedded payload block
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        filters: FilterOpts,
    },
    /// Print the filtered rankings as a text table
    Table {
        /// JSON rows file, or an HTML page with --html
        data: PathBuf,

        /// Read rows from the page's embedded payload block
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        filters: FilterOpts,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[page]");
    println!("path: {}", cfg.page.path);
    println!("team_link_prefix: {}", cfg.page.team_link_prefix);
    println!("empty_message: {}", cfg.page.empty_message);
    println!("payload_element_id: {}", cfg.page.payload_element_id);
    println!("event_capacity: {}", cfg.page.event_capacity);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(command: Commands, config: &config::Config) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Render { data, html, filters } => {
            commands::render::run(&data, html, &filters.into(), config)
        }
        Commands::Table { data, html, filters } => {
            commands::table::run(&data, html, &filters.into(), config)
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Err(e) = execute_command(cli.command, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
