//! PyFix - upload Python files to a code analysis service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use pyfix_app::config::resolve_settings;
use pyfix_app::{Engine, Message};
use pyfix_client::{Endpoint, HttpAnalysisClient};
use pyfix_core::logging;

/// PyFix - check, test, and fix Python files with an analysis service
#[derive(Parser, Debug)]
#[command(name = "pyfix")]
#[command(about = "Upload a Python file for analysis and browse the results", long_about = None)]
struct Args {
    /// Python file to select on startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Analysis service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file to use instead of pyfix.toml lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Analyze FILE once and print NDJSON events instead of starting the TUI
    #[arg(long, requires = "file")]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();
    color_eyre::install()?;
    logging::init().wrap_err("failed to initialize logging")?;

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = resolve_settings(&working_dir, args.config.as_deref(), args.server.as_deref());

    let endpoint = Endpoint::new(&settings.server.url, &settings.server.upload_path)?;
    let mut engine = Engine::new(settings, HttpAnalysisClient::new(endpoint));

    if args.headless {
        let file = args
            .file
            .ok_or_else(|| eyre!("--headless requires a FILE argument"))?;
        let succeeded = pyfix::run_headless(engine, &file, &mut std::io::stdout()).await?;
        if !succeeded {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(path) = args.file {
        engine.process_message(Message::LoadFile { path });
    }
    pyfix::run(engine).await?;
    Ok(())
}
