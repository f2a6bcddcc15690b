//! Plain-text rendering of the intro and the active card.

use std::fmt::Write;

use zenon_content::{CardMedia, CardVariant};
use zenon_intro::IntroSnapshot;
use zenon_nav::{DotState, NavController};

const CURSOR: char = '█';
const BAR_WIDTH: usize = 24;

/// One frame of the intro.
pub fn intro(snapshot: &IntroSnapshot) -> String {
    let mut out = String::from(snapshot.revealed);
    if snapshot.cursor_visible {
        out.push(CURSOR);
    }
    if let Some(hint) = snapshot.skip_hint {
        let _ = write!(out, "    [{hint}]");
    }
    out
}

/// The active card with its navigation chrome.
pub fn card(nav: &NavController) -> String {
    let card = nav.active_card();
    let mut out = String::new();

    let rail: String = nav
        .dots()
        .iter()
        .map(|dot| match dot.state {
            DotState::Visited => '•',
            DotState::Active => '●',
            DotState::Upcoming => '○',
        })
        .collect();
    let filled = (nav.progress().bar * BAR_WIDTH as f64).round() as usize;
    let _ = writeln!(
        out,
        "{rail}  [{}{}] {}/{}",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled)),
        nav.active_index() + 1,
        nav.deck().len()
    );
    let _ = writeln!(out);

    match card.variant() {
        CardVariant::Quote => {
            let _ = writeln!(out, "    \"{}\"", card.title);
            let _ = writeln!(out, "        {}", card.subtitle);
        }
        _ => {
            let _ = writeln!(out, "{}", card.title.to_uppercase());
            let _ = writeln!(out, "{}", card.subtitle);
            match card.media() {
                Some(CardMedia::Video { embed_url }) => {
                    let _ = writeln!(out, "\n  ▶ {embed_url}");
                }
                Some(CardMedia::Image { src, link }) => {
                    let _ = writeln!(out, "\n  [image] {}", link.unwrap_or(src));
                }
                None => {}
            }
            if !card.description.is_empty() {
                let _ = writeln!(out, "\n{}", card.description);
            }
            for point in &card.key_points {
                let _ = writeln!(out, "  - {point}");
            }
        }
    }

    let _ = writeln!(out);
    let share = if nav.copied().is_set() { "Copied!" } else { "Share" };
    let _ = write!(out, "{share}    Powered by ZENON");
    out
}
