//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::list::OutputFormat;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "Content layer and scaffolding tool for a personal portfolio and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new collection entry
    New {
        /// Collection to add to (blog, work)
        #[arg(long, default_value = "blog")]
        collection: String,

        /// Title of the new entry (company name for work entries)
        title: String,
    },

    /// Validate all content collections
    #[command(alias = "c")]
    Check,

    /// List site content
    List {
        /// Type of content to list (blog, work, socials, pages)
        #[arg(default_value = "blog")]
        r#type: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the homepage selection
    Summary,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { collection, title } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} entry: {}", collection, title);
            folio.new_entry(&collection, &title)?;
        }

        Commands::Check => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio.check()?;
        }

        Commands::List { r#type, format } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, format)?;
        }

        Commands::Summary => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::summary::run(&folio)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
