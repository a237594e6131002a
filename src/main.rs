//! CLI entry point for staffsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "staffsite")]
#[command(version)]
#[command(about = "Content query core and sitemap generator for the staffing site", long_about = None)]
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
    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List site content
    List {
        /// Type of content to list (posts, categories, authors, links)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
    },

    /// Validate the content set
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "staffsite=debug,info"
    } else {
        "staffsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = staffsite::Site::new(&base_dir)?;

    match cli.command {
        Commands::Serve { port, ip } => {
            tracing::info!("Starting API server at http://{}:{}", ip, port);
            staffsite::server::start(&site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            staffsite::commands::list::run(&site, &r#type)?;
        }

        Commands::Sitemap { out } => {
            let out_dir = if out.is_absolute() {
                out
            } else {
                site.base_dir.join(out)
            };
            staffsite::commands::sitemap::run(&site, &out_dir)?;
        }

        Commands::Check => {
            staffsite::commands::check::run(&site)?;
        }
    }

    Ok(())
}
