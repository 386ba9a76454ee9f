use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profix_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "profix")]
#[command(author, version, about = "Tools for the Profix Auto Care site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/profix/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file if none exists
    Init,
    /// Run the booking endpoint
    Serve,
    /// Submit a booking to the endpoint
    Book(commands::book::BookArgs),
    /// Check a form value with the site validators
    Check {
        #[command(subcommand)]
        field: CheckField,
    },
    /// Hero image sequence tools
    Frames {
        #[command(subcommand)]
        action: FramesAction,
    },
    /// Simulate scroll playback toward a progress value
    Scrub {
        /// Progress to move to
        #[arg(long)]
        to: f64,
        /// Progress to start from
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Maximum number of animation ticks
        #[arg(long, default_value_t = 60)]
        ticks: usize,
        /// Override the configured smoothing factor
        #[arg(long)]
        smoothing: Option<f64>,
    },
}

#[derive(Subcommand)]
enum CheckField {
    /// Validate an email address
    Email { value: String },
    /// Validate and format a phone number
    Phone { value: String },
}

#[derive(Subcommand)]
enum FramesAction {
    /// List the frame filenames of the configured sequence
    List,
    /// Write SVG placeholder frames
    Generate {
        /// Output directory (defaults to the configured sequence directory)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Arc::new(config);

    match cli.command {
        Commands::Init => commands::init::run(&config, cli.config.as_deref()).map(|_| ()),
        Commands::Serve => commands::serve::run(config).await,
        Commands::Book(args) => commands::book::run(&config, args).await,
        Commands::Check { field } => match field {
            CheckField::Email { value } => commands::check::email(&value),
            CheckField::Phone { value } => commands::check::phone(&value),
        },
        Commands::Frames { action } => match action {
            FramesAction::List => commands::frames::list(&config),
            FramesAction::Generate { out } => commands::frames::generate(&config, out),
        },
        Commands::Scrub {
            to,
            from,
            ticks,
            smoothing,
        } => commands::scrub::run(&config, from, to, ticks, smoothing),
    }
}
