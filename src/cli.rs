//! Command-line interface for hangman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hangman - guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Hangman with a themed word store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the word store database (overrides the config file)
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play rounds interactively
    Play {
        /// Theme to draw words from (defaults to the configured theme)
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// List themes
    Themes,

    /// List words, either the whole catalog or one theme
    Words {
        /// Only list words of this theme
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Add a word to the catalog
    Add {
        /// Word to add
        word: String,

        /// Also assign the word to this theme
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Rename a word everywhere it is used
    Edit {
        /// Current spelling
        old: String,

        /// New spelling
        new: String,
    },

    /// Delete a word and its theme memberships
    Delete {
        /// Word to delete
        word: String,
    },

    /// Create a new theme
    CreateTheme {
        /// Theme name
        name: String,
    },

    /// Assign an existing word to a theme
    Assign {
        /// Word to assign
        word: String,

        /// Theme to assign it to
        #[arg(short, long)]
        theme: String,
    },

    /// Remove a word from a theme, keeping it in the catalog
    Unassign {
        /// Word to remove
        word: String,

        /// Theme to remove it from
        #[arg(short, long)]
        theme: String,
    },

    /// Wipe the store and restore the seed themes and words
    Reset,
}

/// What the player typed during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    /// A single character to guess.
    Guess(char),
    /// Start a new round.
    NewRound,
    /// Switch to the named theme and start a round on it.
    Theme(String),
    /// Show the available themes.
    ListThemes,
    /// Leave the game.
    Quit,
    /// Nothing usable.
    Invalid,
}

/// Parses one line typed at the play prompt.
pub fn parse_play_input(line: &str) -> PlayInput {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "quit" | "exit" => PlayInput::Quit,
        "new" | "next" => PlayInput::NewRound,
        "theme" | "themes" => PlayInput::ListThemes,
        _ => {
            if let Some((command, name)) = input.split_once(char::is_whitespace) {
                if command.eq_ignore_ascii_case("theme") {
                    return PlayInput::Theme(name.trim().to_string());
                }
            }
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => PlayInput::Guess(c),
                _ => PlayInput::Invalid,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_input_letters() {
        assert_eq!(parse_play_input("a\n"), PlayInput::Guess('a'));
        assert_eq!(parse_play_input("  Z "), PlayInput::Guess('Z'));
        assert_eq!(parse_play_input("7"), PlayInput::Guess('7'));
    }

    #[test]
    fn test_parse_play_input_commands() {
        assert_eq!(parse_play_input("quit"), PlayInput::Quit);
        assert_eq!(parse_play_input("EXIT"), PlayInput::Quit);
        assert_eq!(parse_play_input("q"), PlayInput::Guess('q'));
        assert_eq!(parse_play_input("new"), PlayInput::NewRound);
    }

    #[test]
    fn test_parse_play_input_theme_switch() {
        assert_eq!(
            parse_play_input("theme Designer\n"),
            PlayInput::Theme("Designer".to_string())
        );
        assert_eq!(
            parse_play_input("THEME  Front End "),
            PlayInput::Theme("Front End".to_string())
        );
        assert_eq!(parse_play_input("theme"), PlayInput::ListThemes);
        assert_eq!(parse_play_input("Themes"), PlayInput::ListThemes);
        assert_eq!(parse_play_input("themed x"), PlayInput::Invalid);
    }

    #[test]
    fn test_parse_play_input_invalid() {
        assert_eq!(parse_play_input(""), PlayInput::Invalid);
        assert_eq!(parse_play_input("ab"), PlayInput::Invalid);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["hangman", "--db-path", "x.db", "add", "rust", "-t", "Developpeur"]);
        assert_eq!(cli.db_path.as_deref(), Some("x.db"));
        assert_eq!(
            cli.command,
            Some(Command::Add {
                word: "rust".to_string(),
                theme: Some("Developpeur".to_string()),
            })
        );
    }

    #[test]
    fn test_cli_defaults_to_no_command() {
        let cli = Cli::parse_from(["hangman"]);
        assert!(cli.command.is_none());
    }
}
