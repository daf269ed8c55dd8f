//! Database models for themes, the word catalog and theme membership.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use crate::db::{StoreError, schema};

/// A named category grouping a subset of words.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::themes)]
pub struct Theme {
    id: i32,
    name: String,
}

/// Insertable theme model.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::themes)]
pub struct NewTheme {
    name: String,
}

/// Catalog entry for a guessable word, independent of any theme.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::words)]
pub struct Word {
    id: i32,
    #[diesel(column_name = word)]
    text: String,
}

/// Insertable catalog word.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::words)]
pub struct NewWord {
    #[diesel(column_name = word)]
    text: String,
}

/// Membership of a catalog word in a theme.
///
/// `text` duplicates the catalog spelling and is kept in sync by the store.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Associations, Selectable, Insertable, Getters,
    new,
)]
#[diesel(table_name = schema::theme_words)]
#[diesel(primary_key(theme_id, word_id))]
#[diesel(belongs_to(Theme))]
#[diesel(belongs_to(Word))]
pub struct ThemeWord {
    theme_id: i32,
    word_id: i32,
    #[diesel(column_name = word)]
    text: String,
}

/// Canonical catalog spelling of a word: trimmed and uppercased.
///
/// # Errors
///
/// Returns [`StoreError::InvalidInput`] if nothing is left after trimming or
/// the word contains anything other than ASCII letters.
#[instrument(fields(raw = %raw))]
pub fn normalize_word(raw: &str) -> Result<String, StoreError> {
    let text = raw.trim().to_uppercase();
    if text.is_empty() {
        return Err(StoreError::InvalidInput("word is empty".to_string()));
    }
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(StoreError::InvalidInput(format!(
            "'{}' must contain only the letters A-Z",
            text
        )));
    }
    Ok(text)
}

/// Canonical theme name: trimmed, case preserved.
///
/// # Errors
///
/// Returns [`StoreError::InvalidInput`] if the name is blank.
#[instrument(fields(raw = %raw))]
pub fn normalize_theme_name(raw: &str) -> Result<String, StoreError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(StoreError::InvalidInput("theme name is empty".to_string()))
    } else {
        Ok(name.to_string())
    }
}
