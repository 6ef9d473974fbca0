use std::path::PathBuf;

use civic_core::models::Persona;
use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "civic", version, about = "CivicConnect terminal chat client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version
    Version,

    /// Structure raw model output and print it as JSON
    Structure {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Chat with a persona through a running API server
    Chat {
        /// chat, lawbot, talk2gov or translate
        #[arg(short, long, default_value = "chat")]
        persona: Persona,

        /// Target language (translate persona only)
        #[arg(short, long)]
        language: Option<String>,

        /// API server base URL
        #[arg(long, env = "CIVIC_SERVER_URL", default_value = "http://localhost:8080")]
        server: Url,
    },
}
