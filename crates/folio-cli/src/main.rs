use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A portfolio page viewer for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip animations and render final values immediately
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// View a page (the bundled sample when no file is given)
    Run {
        /// Page document to load
        #[arg(short, long)]
        page: Option<PathBuf>,
    },
    /// Submit the contact form from the command line
    Send {
        /// Sender name
        #[arg(short, long)]
        name: String,
        /// Reply-to address
        #[arg(short, long)]
        email: String,
        /// Message body
        #[arg(short, long)]
        message: String,
    },
    /// Validate a page document and print a summary
    Check {
        /// Page document to validate
        page: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if cli.reduced_motion {
        config.motion.reduced_motion = true;
    }
    let config = Arc::new(config);

    // The TUI owns the terminal, so its logs go to a file; everything else
    // logs to stderr.
    let in_tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    let _guard = init_logging(&config, in_tui)?;

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page).await,
        None => commands::run::run(config, None).await,
        Some(Commands::Send {
            name,
            email,
            message,
        }) => commands::send::run(&config, name, email, message).await,
        Some(Commands::Check { page }) => commands::check::run(&page),
    }
}

fn init_logging(
    config: &AppConfig,
    to_file: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let appender = tracing_appender::rolling::never(config.data_dir(), "folio.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
        Ok(None)
    }
}
