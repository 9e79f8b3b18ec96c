use clap::{Parser, Subcommand};
use sqlblob_core::StoreKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlblob")]
#[command(about = "Path-keyed object storage in a relational database", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store kind: sqlite or mysql (overrides config)
    #[arg(long, global = true, env = "SQLBLOB_BACKEND")]
    pub backend: Option<StoreKind>,

    /// Connection string: SQLite path or MySQL DSN (overrides config)
    #[arg(long, global = true, env = "SQLBLOB_DSN")]
    pub dsn: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the objects table if missing
    Init,

    /// List stored objects
    Ls {
        /// Path prefix (only the empty prefix is supported)
        #[arg(default_value = "")]
        prefix: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write an object's content to stdout or a file
    Get {
        path: String,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store a file (or stdin with `-`) under a path
    Put {
        path: String,

        /// Source file, `-` for stdin
        source: PathBuf,
    },

    /// Delete an object
    Rm { path: String },

    /// Show size, modification time and digest of an object
    Stat { path: String },
}
