use clap::{Args, Parser, Subcommand};
use nba::api::Client;
use nba::commands::{self, DateSelection};
use nba::config;
use nba::data_provider::NbaDataProvider;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nba")]
#[command(about = "NBA games in your terminal", long_about = "NBA games in your terminal\n\nShows a preview, a live dashboard or the final box score for a game on a given day.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the live API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(multiple = false)]
struct DateArgs {
    /// Date of the game (2018-01-05, 2018/01/05, 20180105, 01/05/2018 or "January 5, 2018")
    #[arg(short, long)]
    date: Option<String>,

    /// Today's games
    #[arg(long)]
    today: bool,

    /// Tomorrow's games
    #[arg(long)]
    tomorrow: bool,

    /// Yesterday's games
    #[arg(long)]
    yesterday: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a game: preview, live dashboard or final box score
    Game {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Display current configuration
    Config,
}

fn create_client(config: &config::Config) -> anyhow::Result<Box<dyn NbaDataProvider>> {
    let client = Client::with_config(&config.api)?;
    Ok(Box::new(client))
}

#[cfg(feature = "development")]
fn create_provider(cli: &Cli, config: &config::Config) -> anyhow::Result<Box<dyn NbaDataProvider>> {
    if cli.mock {
        return Ok(Box::new(nba::dev::MockClient::new()));
    }
    create_client(config)
}

#[cfg(not(feature = "development"))]
fn create_provider(_cli: &Cli, config: &config::Config) -> anyhow::Result<Box<dyn NbaDataProvider>> {
    create_client(config)
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
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[live]");
    println!("poll_interval: {} seconds", cfg.live.poll_interval);
    println!("halftime_poll_interval: {} seconds", cfg.live.halftime_poll_interval);
    println!();
    println!("[api]");
    println!("data_base_url: {}", cfg.api.data_base_url);
    println!("stats_base_url: {}", cfg.api.stats_base_url);
    println!("request_timeout: {} seconds", cfg.api.request_timeout);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("header_fg: {:?}", cfg.display.header_fg);
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
async fn execute_command(cli: &Cli, config: &config::Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Game { date } => {
            let selection = DateSelection::from_flags(
                date.date.clone(),
                date.today,
                date.tomorrow,
                date.yesterday,
            )?;
            let provider = create_provider(cli, config)?;
            let today = chrono::Local::now().date_naive();
            commands::game::run(provider.as_ref(), selection, today, config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = cli.command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&cli, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
