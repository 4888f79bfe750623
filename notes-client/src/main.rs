mod api;
mod command;
mod controller;
mod models;
mod state;
mod view;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use std::{sync::Arc, time::Duration};

use api::HttpNotesApi;
use command::Command;
use controller::{DeleteOutcome, NotesController};

#[derive(Debug, Parser)]
#[command(version, about = "Terminal client for notes-server")]
struct Args {
    /// Base URL of the notes server
    #[arg(long, env = "NOTES_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "NOTES_API_TIMEOUT", default_value_t = 30)]
    timeout_secs: u64,
}

async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    question: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(question.as_bytes()).await?;
    stdout.flush().await?;
    Ok(lines.next_line().await?.unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log setup, kept off stdout so it does not mix with the screen
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api = HttpNotesApi::new(&args.api_url, Duration::from_secs(args.timeout_secs))?;
    let controller = NotesController::new(Arc::new(api));
    println!("Connected to notes server at address {}\n", args.api_url);

    controller.load().await;
    println!("{}", view::render(&controller.state()));
    println!("{}", command::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Add(text) => {
                controller.set_content(text);
                if !controller.submit().await {
                    println!("Nothing to add");
                }
            }
            Command::Delete(number) => {
                let target = number
                    .checked_sub(1)
                    .and_then(|idx| controller.state().notes.get(idx).cloned());
                let Some(note) = target else {
                    println!("No note number {number}");
                    continue;
                };

                let question = format!("Delete \"{}\"? [y/N] ", note.content);
                let answer = prompt(&mut lines, &question).await?;
                let outcome = controller
                    .delete(&note.id, |_| command::is_yes(&answer))
                    .await;
                if outcome == DeleteOutcome::Declined {
                    println!("Kept note");
                }
            }
            Command::Refresh => controller.load().await,
            Command::Help => {
                println!("{}", command::HELP);
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("Unknown command '{input}', type 'help'");
                continue;
            }
        }

        println!("{}", view::render(&controller.state()));
    }

    Ok(())
}
