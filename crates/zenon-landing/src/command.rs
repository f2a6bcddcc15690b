//! Line commands read from the terminal.

use zenon_content::LinkTarget;
use zenon_intro::IntroInput;

use crate::error::{Error, Result};

/// One reader command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A key press, named the way the browser names it (`"ArrowDown"`,
    /// `"j"`, `"Space"`, ...)
    Key(String),
    /// Pointer or skip input for the intro
    Intro(IntroInput),
    /// Scroll the deck by a number of units (negative scrolls up)
    Scroll(f64),
    /// Press the navigation dot for a card (zero-based)
    Dot(usize),
    Share,
    Link(LinkTarget),
    Brand,
    Status,
    Quit,
}

impl Command {
    /// Parse a line of input. An empty line is the Enter key.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Key("Enter".to_string()));
        };

        let command = match head {
            "q" | "quit" | "exit" => Command::Quit,
            "skip" => Command::Intro(IntroInput::Skip),
            "click" => Command::Intro(IntroInput::Click),
            "wheel" => Command::Intro(IntroInput::Wheel {
                delta_y: number(words.next(), line)?,
            }),
            "swipe" => Command::Intro(IntroInput::Swipe {
                start_y: number(words.next(), line)?,
                end_y: number(words.next(), line)?,
            }),
            "scroll" => Command::Scroll(number(words.next(), line)?),
            "dot" => {
                let n: usize = words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| Error::Command(line.to_string()))?;
                Command::Dot(n - 1)
            }
            "share" => Command::Share,
            "repo" => Command::Link(LinkTarget::Repository),
            "docs" => Command::Link(LinkTarget::Gitbook),
            "brand" => Command::Brand,
            "status" => Command::Status,
            key => Command::Key(key_name(key).to_string()),
        };
        Ok(command)
    }
}

fn key_name(word: &str) -> &str {
    match word {
        "down" => "ArrowDown",
        "up" => "ArrowUp",
        "home" => "Home",
        "end" => "End",
        "space" => "Space",
        "enter" => "Enter",
        "esc" | "escape" => "Escape",
        other => other,
    }
}

fn number(word: Option<&str>, line: &str) -> Result<f64> {
    word.and_then(|w| w.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::Command(line.to_string()))
}
