//! Zenon landing binary
//!
//! Plays the intro and pages through the card deck in a terminal.

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use zenon_content::{sitemap, PageMetadata};
use zenon_landing::{load_deck, logging, render, Command, LandingConfig, Ports, Reply, Session, SessionEvent};
use zenon_nav::CopyMethod;

#[derive(Parser)]
#[command(name = "zenon-landing")]
#[command(about = "Zenon Network landing deck in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Open the landing page at a path (`/` plays the intro)
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the sitemap XML
    Sitemap,
    /// Print page metadata for a card as JSON
    Meta { card_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = LandingConfig::from_env()?;
    let deck = load_deck(&config)?;

    match cli.command.unwrap_or(Mode::Open { path: "/".to_string() }) {
        Mode::Sitemap => {
            let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
            print!("{}", sitemap::to_xml(&sitemap::entries(&config.base_url, &deck), &today));
        }
        Mode::Meta { card_id } => {
            let meta = PageMetadata::for_card_id(&config.base_url, &deck, &card_id);
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        Mode::Open { path } => {
            tracing::info!(%path, cards = deck.len(), "Starting Zenon landing");
            let ports = Ports::system(&config);
            run(Session::start(config, deck, ports, &path)).await?;
        }
    }

    Ok(())
}

async fn run(mut session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    match session.intro_snapshot() {
        Some(snapshot) => println!("{}", render::intro(&snapshot)),
        None => redraw(&session),
    }

    loop {
        tokio::select! {
            event = session.next_event() => match event {
                SessionEvent::Intro(snapshot) => println!("{}", render::intro(&snapshot)),
                SessionEvent::DeckOpened => redraw(&session),
            },
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };
                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                match session.apply(command).await {
                    Reply::None => {}
                    Reply::Redraw => redraw(&session),
                    Reply::Shared(outcome) => {
                        let note = match outcome.method {
                            CopyMethod::Clipboard => "copied to clipboard",
                            CopyMethod::Fallback => "copied via terminal",
                            CopyMethod::Failed => "copy failed",
                        };
                        println!("{} ({note})", outcome.url);
                    }
                    Reply::Link(url) => println!("{url}"),
                    Reply::Status(status) => println!("{}", serde_json::to_string(&status)?),
                    Reply::Quit => return Ok(()),
                }
            }
        }
    }
}

fn redraw(session: &Session) {
    if let Some(nav) = session.nav() {
        println!("\n{}\n", render::card(nav));
    }
}
