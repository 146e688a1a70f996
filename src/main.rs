//! CLI entry point for pagegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(version = "0.1.0")]
#[command(about = "A minimal static page generator", long_about = None)]
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
    /// Render a markdown file through an HTML template
    #[command(alias = "r")]
    Render {
        /// Markdown source file with front-matter
        markdown: PathBuf,

        /// HTML template file containing the marker tokens
        template: PathBuf,

        /// Destination for the filled template
        #[arg(short, long)]
        output: PathBuf,

        /// Override the date marker token
        #[arg(long)]
        date_marker: Option<String>,

        /// Override the title marker token
        #[arg(long)]
        title_marker: Option<String>,

        /// Override the body marker token
        #[arg(long)]
        body_marker: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagegen=debug,info"
    } else {
        "pagegen=info"
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
        Commands::Render {
            markdown,
            template,
            output,
            date_marker,
            title_marker,
            body_marker,
        } => {
            let mut pagegen = pagegen::Pagegen::new(&base_dir)?;

            if let Some(marker) = date_marker {
                pagegen.config.markers.date = marker;
            }
            if let Some(marker) = title_marker {
                pagegen.config.markers.title = marker;
            }
            if let Some(marker) = body_marker {
                pagegen.config.markers.body = marker;
            }

            tracing::info!("Rendering {:?} with template {:?}", markdown, template);
            pagegen.render(&markdown, &template, &output)?;
            println!("Rendered {}", output.display());
        }

        Commands::Version => {
            println!("pagegen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
