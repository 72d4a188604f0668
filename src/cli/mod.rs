// Command-line interface
pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-box")]
#[command(about = "Recipe Box - browse, filter and export recipes", long_about = None)]
pub struct Cli {
    /// Catalog file (YAML or JSON) replacing the bundled recipes
    #[arg(long, global = true, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Search recipes by text and tags
    Search {
        /// Text matched against name, description and tags
        #[arg(default_value = "")]
        query: String,

        /// Comma-separated tags; every tag must be present
        #[arg(long)]
        tags: Option<String>,
    },

    /// Show a single recipe
    Show {
        /// Recipe ID
        recipe_id: i64,
    },

    /// Export a recipe as a .docx document
    Export {
        /// Recipe ID
        recipe_id: i64,

        /// Output directory
        #[arg(short, long, env = "EXPORT_DIR")]
        output: Option<PathBuf>,
    },

    /// List the tag catalog
    Tags,

    /// Validate a catalog file
    Validate {
        /// Catalog file to check
        file: PathBuf,
    },
}
