// Command line interface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Data Lakehouse case-study page
#[derive(Parser, Debug)]
#[command(name = "lakehouse-case-study")]
#[command(version)]
#[command(about = "Render or serve the Cloud Native Data Lakehouse case study")]
pub struct Cli {
    /// Use /images/<file> paths instead of the remote placeholders
    #[arg(long, global = true, default_value_t = false)]
    pub local_images: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Serve the page over HTTP (default)
    Serve {
        /// Listen host, overrides server.host
        #[arg(long)]
        host: Option<String>,

        /// Listen port, overrides server.port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write the page to an HTML file
    Render {
        /// Output file, overrides output.path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
