//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagtype")]
#[command(about = "Extract type expressions from documentation tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: tagtype.toml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the type expression from a tag's text
    Extract {
        /// Tag name without the leading @ (e.g., param, returns)
        tag: String,

        /// Raw tag text (e.g., "{string} name The name")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Print the whole processed tag as JSON
        #[arg(long)]
        json: bool,
    },

    /// Flatten a parsed type tree (catharsis JSON) into type names
    Flatten {
        /// JSON file to read, or - for stdin
        #[arg(default_value = "-")]
        file: String,
    },

    /// Write a default tagtype.toml
    Init {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
