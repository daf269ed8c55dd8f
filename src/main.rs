//! Hangman - terminal front-end.
//!
//! Plays rounds on stdin/stdout and manages the word store.

#![warn(missing_docs)]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use hangman::cli::{Cli, Command, PlayInput, parse_play_input};
use hangman::{
    AppConfig, ErrorKind, HangmanError, RoundController, RoundRenderer, StoreError,
    TextRenderer, Theme, WordStore,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(db_path) = &cli.db_path {
        config = config.with_db_path(db_path.clone());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(db_path = %config.db_path(), "Starting hangman");
    let store = WordStore::open(config.db_path().clone())
        .with_context(|| format!("Failed to open word store '{}'", config.db_path()))?;

    let command = cli.command.unwrap_or(Command::Play { theme: None });
    debug!(?command, "Dispatching command");

    match command {
        Command::Play { theme } => {
            if let Some(theme) = theme {
                config = config.with_default_theme(theme);
            }
            play(store, config.default_theme())
        }
        Command::Themes => list_themes(&store),
        Command::Words { theme } => list_words(&store, theme.as_deref()),
        Command::Add { word, theme } => {
            let inserted = store.add_word(&word)?;
            let text = word.trim().to_uppercase();
            if inserted {
                println!("Added {}", text);
            } else {
                println!("{} is already in the catalog", text);
            }
            if let Some(name) = theme {
                let theme = require_theme(&store, &name)?;
                store.assign_word(*theme.id(), &text)?;
                println!("Assigned {} to {}", text, theme.name());
            }
            Ok(())
        }
        Command::Edit { old, new } => {
            let word = store.update_word(&old, &new)?;
            println!("Renamed {} to {}", old.trim().to_uppercase(), word.text());
            Ok(())
        }
        Command::Delete { word } => {
            store.delete_word(&word)?;
            println!("Deleted {}", word.trim().to_uppercase());
            Ok(())
        }
        Command::CreateTheme { name } => {
            let theme = store.create_theme(&name)?;
            println!("Created theme {} (id {})", theme.name(), theme.id());
            Ok(())
        }
        Command::Assign { word, theme } => {
            let theme = require_theme(&store, &theme)?;
            store.assign_word(*theme.id(), &word)?;
            println!("Assigned {} to {}", word.trim().to_uppercase(), theme.name());
            Ok(())
        }
        Command::Unassign { word, theme } => {
            let theme = require_theme(&store, &theme)?;
            store.unassign_word(*theme.id(), &word)?;
            println!("Removed {} from {}", word.trim().to_uppercase(), theme.name());
            Ok(())
        }
        Command::Reset => {
            store.reset_to_seed()?;
            println!("Word store reset to seed data");
            Ok(())
        }
    }
}

/// Looks up a theme by name, failing with `NotFound`.
fn require_theme(store: &WordStore, name: &str) -> Result<Theme, StoreError> {
    store
        .theme_by_name(name)?
        .ok_or_else(|| StoreError::NotFound(format!("theme '{}'", name.trim())))
}

#[instrument(skip(store))]
fn list_themes(store: &WordStore) -> Result<()> {
    for theme in store.list_themes()? {
        let count = store.words_for_theme(*theme.id())?.len();
        println!("{:>3}  {} ({} words)", theme.id(), theme.name(), count);
    }
    Ok(())
}

#[instrument(skip(store))]
fn list_words(store: &WordStore, theme: Option<&str>) -> Result<()> {
    match theme {
        Some(name) => {
            let theme = require_theme(store, name)?;
            for word in store.words_for_theme(*theme.id())? {
                println!("{}", word);
            }
        }
        None => {
            for word in store.list_words()? {
                println!("{}", word.text());
            }
        }
    }
    Ok(())
}

/// Interactive loop: one line per guess, `new` for a new round, `theme NAME`
/// to switch theme, `quit` to leave.
#[instrument(skip(store))]
fn play(store: WordStore, theme: &str) -> Result<()> {
    let mut controller = RoundController::new(store, theme, TextRenderer::new(io::stdout()))?;
    println!("Theme: {}", controller.theme().name());
    start_round(&mut controller)?;

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_play_input(&line) {
            PlayInput::Quit => break,
            PlayInput::NewRound => {
                start_round(&mut controller)?;
            }
            PlayInput::ListThemes => list_themes(controller.store())?,
            PlayInput::Theme(name) => match controller
                .select_theme(&name)
                .map(|theme| theme.name().clone())
            {
                Ok(selected) => {
                    println!("Theme: {}", selected);
                    start_round(&mut controller)?;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    println!("{}. Type 'themes' to list them.", e)
                }
                Err(e) => return Err(e.into()),
            },
            PlayInput::Invalid => {
                println!("Type a single letter, 'new', 'theme NAME', 'themes' or 'quit'.")
            }
            PlayInput::Guess(c) => match controller.guess(c) {
                Ok(outcome) if outcome.repeated() => {
                    println!("'{}' was already used.", c.to_ascii_uppercase())
                }
                Ok(outcome) if outcome.status.is_terminal() => {
                    println!("Type 'new' for another round or 'quit'.")
                }
                Ok(_) => {}
                Err(HangmanError::NoRound) => println!("Type 'new' to start a round."),
                Err(e) if e.kind() == ErrorKind::InvalidInput => println!("{}", e),
                Err(e) => return Err(e.into()),
            },
        }
        prompt()?;
    }

    info!("Leaving game");
    Ok(())
}

/// Starts a round, telling the player when the theme has no words.
fn start_round<R: RoundRenderer>(controller: &mut RoundController<R>) -> Result<()> {
    match controller.new_round() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::EmptyPool => {
            let name = controller.theme().name().clone();
            println!(
                "Theme '{}' has no words yet. Add some with: hangman add WORD --theme \"{}\"",
                name, name
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
