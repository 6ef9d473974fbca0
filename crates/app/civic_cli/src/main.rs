// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use civic_core::models::Persona;
use civic_core::structurer::structure_reply;
use clap::Parser;
use cli::{Cli, Commands};
use url::Url;

mod cli;
mod client;
mod logging;
mod render;
mod repl;
mod session;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Structure { file } => structure(file.as_deref())?,
        Commands::Chat {
            persona,
            language,
            server,
        } => chat(persona, language, server)?,
    }

    Ok(())
}

fn structure(file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", serde_json::to_string_pretty(&structure_reply(&raw))?);
    Ok(())
}

fn chat(persona: Persona, language: Option<String>, server: Url) -> Result<()> {
    let language = language.filter(|l| !l.trim().is_empty());
    if persona == Persona::Translator && language.is_none() {
        return Err(Error::Custom(
            "--language is required for the translate persona".into(),
        ));
    }

    log::info!("chatting with {persona} at {server}");
    let backend = client::ApiClient::new(server);
    let mut session = session::ChatSession::new(persona);
    repl::run(
        &backend,
        &mut session,
        language.as_deref(),
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )
}
