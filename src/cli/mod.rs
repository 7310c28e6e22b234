pub mod cleanup;
pub mod ingest;
pub mod init;
pub mod migrate;
pub mod seed;
pub mod serve;
pub mod sync;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipper")]
#[command(version)]
#[command(about = "Backend for a localized academy site", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "clipper.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config and media directory skeleton
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the HTTP API
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "4000")]
        port: u16,
    },
    /// Apply pending schema migrations
    Migrate,
    /// Scan one route folder into media_files
    Seed {
        /// Route tag: gallery, students-gallery, success-stories, instructors
        route: String,
        /// Folder to scan; defaults to <media.root>/<route>
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Seed every route folder and drop records whose file is gone
    Sync,
    /// Import original photos as gallery items with responsive variants
    Ingest {
        source: PathBuf,
        /// Tag every imported item instead of using the parent folder name
        #[arg(long)]
        tag: Option<String>,
    },
    /// Remove broken gallery assets and orphaned items
    Cleanup,
}
