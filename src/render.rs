//! ANSI terminal reports for forged sigils.
//!
//! Provides the details panel for one sigil and a legend of every script
//! table and kamea, with optional color.

use std::io::IsTerminal;

use crate::alphabet::Script;
use crate::assemble::{Interior, Sigil, SigilRequest};
use crate::geometry::Planet;

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Configuration for terminal rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Enable ANSI color codes.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: atty_detect(),
        }
    }
}

impl RenderConfig {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// The processed intent and everything derived from it.
pub fn render_details(request: &SigilRequest, sigil: &Sigil, config: &RenderConfig) -> String {
    let mut lines = Vec::new();
    let label = |name: &str| config.paint(BOLD, name);

    lines.push(format!("{} {}", label("Method:"), config.paint(CYAN, request.method.name())));
    lines.push(format!("{} {}", label("Alphabet:"), config.paint(CYAN, request.script.name())));

    let direction = if request.script.is_right_to_left() {
        config.paint(DIM, " (right to left)")
    } else {
        String::new()
    };
    lines.push(format!(
        "{} {}{direction}",
        label("Magickal String (Ring):"),
        config.paint(GREEN, &sigil.ring),
    ));
    lines.push(format!(
        "{} {}",
        label("Numeric Seed:"),
        config.paint(YELLOW, &sigil.seed.to_string())
    ));

    match &sigil.interior {
        Interior::Wheel { path } => {
            lines.push(request.wheel_base.describe());
            if request.chaos_mode {
                lines.push("Chaos mode: wheel points permuted by the seed.".to_string());
            }
            lines.push(format!("{} {}", label("Path points:"), path.len()));
        }
        Interior::Mantra { letters, symbols } => {
            lines.push(
                "The sigil is generated by overlaying the letters of the processed intent."
                    .to_string(),
            );
            lines.push(format!(
                "{} {} {}",
                label("Letters for Mantra:"),
                config.paint(GREEN, symbols),
                config.paint(DIM, &format!("({letters})")),
            ));
        }
    }

    if sigil.is_blank() {
        lines.push(config.paint(DIM, "Nothing to forge: the intent contains no letters."));
    }

    lines.join("\n")
}

/// Print a legend of every script table and every kamea.
pub fn render_legend(config: &RenderConfig) -> String {
    let mut lines = Vec::new();

    lines.push(config.paint(BOLD, "Magickal Alphabets"));
    lines.push(String::new());
    for script in Script::ALL {
        lines.push(format!("  {}:", config.paint(BOLD, script.name())));
        let row: Vec<String> = ('A'..='Z')
            .zip(script.table().iter())
            .map(|(letter, symbol)| format!("{letter}={}", config.paint(GREEN, symbol)))
            .collect();
        for chunk in row.chunks(13) {
            lines.push(format!("    {}", chunk.join(" ")));
        }
        lines.push(String::new());
    }

    lines.push(config.paint(BOLD, "Planetary Kameas"));
    for planet in Planet::ALL {
        let kamea = planet.kamea();
        lines.push(String::new());
        lines.push(format!(
            "  {} ({n}x{n}):",
            config.paint(BOLD, planet.name()),
            n = kamea.order
        ));
        for row in kamea.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
            lines.push(format!("   {}", config.paint(YELLOW, &cells.join(""))));
        }
    }

    lines.join("\n")
}

/// Color only when stdout is a terminal and `TERM` is not `dumb`.
fn atty_detect() -> bool {
    std::io::stdout().is_terminal() && std::env::var("TERM").is_ok_and(|term| term != "dumb")
}
