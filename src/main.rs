//! QueryDesk Docs CLI
//!
//! Renders documentation components to static HTML for the site build.
//!
//! ## Usage
//!
//! ```bash
//! # Render the guide catalog to stdout
//! querydesk-docs render guides
//!
//! # Render the tag reference sheet for the dark theme into a file
//! querydesk-docs render tags --dark --out build/tags.html
//!
//! # Render a single tag or heading
//! querydesk-docs render tag DELETE
//! querydesk-docs render tag GET --color zinc --variant small
//! querydesk-docs render heading delete-a-query "Delete a query" --tag DELETE --level 3
//!
//! # List the guide catalog
//! querydesk-docs guides
//! querydesk-docs guides --json
//! ```

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use querydesk_ui::GUIDES;

use crate::render::{render_fragment, Section};

/// QueryDesk Docs - component renderer
#[derive(Parser)]
#[command(name = "querydesk-docs")]
#[command(version)]
#[command(about = "Render QueryDesk documentation components to static HTML")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a component fragment to HTML
    Render {
        #[command(subcommand)]
        fragment: Section,

        /// Write to this file instead of stdout
        #[arg(short, long, global = true)]
        out: Option<PathBuf>,

        /// Wrap the fragment in a dark theme container
        #[arg(long, global = true)]
        dark: bool,
    },

    /// List the guide catalog
    Guides {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render { fragment, out, dark } => {
            let html = render_fragment(&fragment, dark);
            match out {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent).with_context(|| {
                            format!("Failed to create directory {}", parent.display())
                        })?;
                    }
                    fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(?fragment, path = %path.display(), "wrote fragment");
                }
                None => println!("{}", html),
            }
        }

        Commands::Guides { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(GUIDES)?);
            } else {
                for guide in GUIDES {
                    println!("{}\t{}", guide.name, guide.href);
                }
            }
        }
    }

    Ok(())
}
