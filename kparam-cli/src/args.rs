use std::path::PathBuf;
use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Command line arguments for the kparam tool
#[derive(Parser, Debug)]
#[command(author, version, about = "Typed name=value parameter registry demo")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only log errors
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse parameters into the demo registry and print every value
    Demo {
        /// Output format (default: text, or the config file's format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Parameters, e.g. test=5 btest latest=1,2,3 strtest=hi
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Print a text and a numeric environment variable
    Env {
        /// Variable printed as text
        #[arg(long, default_value = "GETENV_ADD")]
        text: String,

        /// Variable converted to an integer
        #[arg(long, default_value = "GETENV_NUM")]
        number: String,
    },
}
