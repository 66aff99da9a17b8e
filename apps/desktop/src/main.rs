use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{config::DEFAULT_SETTINGS_FILE, load_settings_from, HttpUsersApi, UserManager};
use tracing_subscriber::EnvFilter;

mod commands;
mod controller;
mod prompt;
mod render;

use commands::parse_command;
use controller::{dispatch, Flow};
use prompt::{stdin_lines, TerminalPrompt};

#[derive(Parser, Debug)]
#[command(about = "Manage users of the SGU REST API from the terminal")]
struct Args {
    /// Settings file with api_host, api_port and api_base.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long)]
    api_host: Option<String>,
    #[arg(long)]
    api_port: Option<String>,
    #[arg(long)]
    api_base: Option<String>,
    /// Delete without asking for confirmation.
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config);
    if let Some(v) = args.api_host {
        settings.api_host = v;
    }
    if let Some(v) = args.api_port {
        settings.api_port = v;
    }
    if let Some(v) = args.api_base {
        settings.api_base = v;
    }

    let api = HttpUsersApi::new(&settings).context("invalid API settings")?;
    tracing::info!(base_url = api.base_url(), "using users API");

    let input = stdin_lines();
    let manager = UserManager::new(api, TerminalPrompt::new(input.clone(), args.yes));

    manager.start().await;
    println!("{}", render::render(&manager.snapshot().await));
    println!("type 'help' for commands");

    loop {
        let line = input.lock().await.next_line().await?;
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match dispatch(&manager, cmd).await {
            Flow::Render(status) => {
                println!("{}", render::render(&manager.snapshot().await));
                if let Some(status) = status {
                    println!("{status}");
                }
            }
            Flow::Print(text) => println!("{text}"),
            Flow::Quit => break,
        }
    }

    Ok(())
}
