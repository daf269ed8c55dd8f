//! Plain-text renderer: gallows, revealed pattern and keyboard.

use std::io::Write;

use tracing::{instrument, warn};

use crate::controller::RoundRenderer;
use crate::games::hangman::{Letter, RoundStatus, RoundView};

const GALLOWS_WIDTH: usize = 10;
const GALLOWS_HEIGHT: usize = 7;

/// Draws the gallows after `stage` wrong attempts (0-10).
///
/// Parts appear in order: base, post, beam, rope, head, body, right arm,
/// left arm, right leg, left leg.
pub fn gallows(stage: u8) -> Vec<String> {
    let mut grid = [[' '; GALLOWS_WIDTH]; GALLOWS_HEIGHT];
    let mut put = |row: usize, col: usize, c: char| grid[row][col] = c;

    if stage >= 1 {
        for col in 0..=6 {
            put(6, col, '=');
        }
    }
    if stage >= 2 {
        for row in 0..=5 {
            put(row, 2, '|');
        }
    }
    if stage >= 3 {
        put(0, 2, '+');
        for col in 3..=6 {
            put(0, col, '-');
        }
        put(0, 7, '+');
    }
    let figure = [
        (4, 1, 7, '|'),
        (5, 2, 7, 'O'),
        (6, 3, 7, '|'),
        (7, 3, 8, '\\'),
        (8, 3, 6, '/'),
        (9, 4, 8, '\\'),
        (10, 4, 6, '/'),
    ];
    for (from, row, col, c) in figure {
        if stage >= from {
            put(row, col, c);
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// The A-Z keyboard in rows breaking after G, N and U; used letters are
/// replaced by `-`.
pub fn keyboard(view: &RoundView) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    for letter in Letter::alphabet() {
        let key = if view.used_letters().contains(&letter) {
            '-'
        } else {
            letter.as_char()
        };
        row.push(key.to_string());
        if matches!(letter.as_char(), 'G' | 'N' | 'U') {
            rows.push(row.join(" "));
            row.clear();
        }
    }
    if !row.is_empty() {
        rows.push(row.join(" "));
    }
    rows
}

/// Renders rounds as text to any writer.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, view: &RoundView) -> std::io::Result<()> {
        writeln!(self.out)?;
        for line in gallows(*view.wrong_attempts()) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "  {}", view.pattern_text())?;
        writeln!(
            self.out,
            "  Wrong guesses: {}/{}",
            view.wrong_attempts(),
            view.max_attempts()
        )?;
        writeln!(self.out)?;
        for line in keyboard(view) {
            writeln!(self.out, "  {}", line)?;
        }

        match (view.status(), view.word()) {
            (RoundStatus::Won, _) => writeln!(self.out, "\nWell done! You found the word.")?,
            (RoundStatus::Lost, Some(word)) => {
                writeln!(self.out, "\nOut of attempts. The word was '{}'.", word)?
            }
            _ => {}
        }
        self.out.flush()
    }
}

impl<W: Write> RoundRenderer for TextRenderer<W> {
    #[instrument(skip(self, view), fields(status = %view.status()))]
    fn render(&mut self, view: &RoundView) {
        if let Err(e) = self.draw(view) {
            warn!(error = %e, "Failed to render round");
        }
    }
}
