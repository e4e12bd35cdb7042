use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tsuyaku", version, about = "Translate text through a chain of public translation APIs")]
pub struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the configured level (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer JSON messages read line by line from stdin
    Serve,

    /// Translate text once and print the result
    Translate {
        /// Source language, or "auto"
        #[arg(long)]
        from: Option<String>,

        /// Target language
        #[arg(long)]
        to: Option<String>,

        /// Text to translate; read from stdin when omitted
        text: Vec<String>,
    },

    /// Print the language guessed for the text
    Detect {
        #[arg(required = true)]
        text: Vec<String>,
    },
}
