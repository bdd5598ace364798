use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{GameClient, GuessOutcome, HttpGameService, ServiceEndpoints};
use shared::domain::GuessLetter;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    task::JoinHandle,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod render;

use command::{parse_command, Command, USAGE};
use config::{load_settings, Settings};
use render::render_board;

#[derive(Parser, Debug)]
#[command(name = "quote-game", about = "Guess the hidden quotation one letter at a time")]
struct Args {
    /// Base URL of the game service.
    #[arg(long)]
    server_url: Option<String>,
    /// Settings file to load instead of ./quote_game.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

type Client = Arc<GameClient<HttpGameService>>;

fn new_session(endpoints: &ServiceEndpoints, settings: &Settings) -> Result<Client> {
    let service = HttpGameService::new(endpoints.clone(), settings.request_timeout())
        .context("failed to build HTTP client")?;
    Ok(Arc::new(GameClient::new(service)))
}

fn redraw(client: &Client) -> Result<()> {
    let board = render_board(&client.snapshot());
    let mut stdout = io::stdout().lock();
    write!(stdout, "\n{board}\n> ")?;
    stdout.flush()?;
    Ok(())
}

/// Runs the guess in the background so the board stays responsive while the
/// service answers; completion is reported on `done`.
fn spawn_guess(
    client: &Client,
    letter: GuessLetter,
    done: &mpsc::UnboundedSender<GuessOutcome>,
) -> JoinHandle<()> {
    let client = Arc::clone(client);
    let done = done.clone();
    tokio::spawn(async move {
        let outcome = client.submit_guess(letter).await;
        let _ = done.send(outcome);
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(secs) = args.request_timeout_secs {
        settings.request_timeout_secs = Some(secs);
    }

    let endpoints = ServiceEndpoints::resolve(
        &settings.server_url,
        &settings.start_path,
        &settings.guess_path,
    )
    .with_context(|| format!("invalid game service address '{}'", settings.server_url))?;
    info!(
        start_url = %endpoints.start_url,
        guess_url = %endpoints.guess_url,
        "starting quote game"
    );

    let mut client = new_session(&endpoints, &settings)?;
    client.initialize().await;
    println!("{USAGE}");
    redraw(&client)?;

    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    let mut guesses: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Select(index)) => client.select_position(index),
                    Ok(Command::Guess(letter)) => {
                        guesses.retain(|handle| !handle.is_finished());
                        guesses.push(spawn_guess(&client, letter, &done_tx));
                        continue;
                    }
                    Ok(Command::Show) => {}
                    Ok(Command::Reload) => {
                        for handle in guesses.drain(..) {
                            handle.abort();
                        }
                        client = new_session(&endpoints, &settings)?;
                        client.initialize().await;
                    }
                    Ok(Command::Help) => println!("{USAGE}"),
                    Ok(Command::Quit) => break,
                    Err(err) => println!("{err}\n{USAGE}"),
                }
                redraw(&client)?;
            }
            Some(outcome) = done_rx.recv() => {
                debug!(?outcome, "guess finished");
                redraw(&client)?;
            }
        }
    }

    Ok(())
}
