mod chat;
mod data_cmd;
mod diagnose;
mod symptoms;

pub use chat::run_chat;
pub use data_cmd::run_data;
pub use diagnose::run_diagnose;
pub use symptoms::run_symptoms;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "symcheck")]
#[command(author, version, about = "Turn symptom descriptions into ranked diagnosis candidates")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (can repeat: -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: text (default) or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the reference tables
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive symptom conversation (default)
    Chat,

    /// Rank diagnoses for one description without a conversation
    Diagnose {
        /// Symptom description; multiple words are joined
        #[arg(required = true)]
        text: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every recognizable symptom
    Symptoms {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the reference data
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
}

#[derive(Subcommand)]
pub enum DataCommands {
    /// Load the tables and print the load report
    Check,

    /// Print the resolved data directory
    Path,
}
