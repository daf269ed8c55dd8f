//! SQLite-backed word store: themes, the word catalog and theme membership.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::seed::seed;
use crate::db::{
    DbError, NewTheme, NewWord, StoreError, Theme, ThemeWord, Word, normalize_theme_name,
    normalize_word, schema,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Durable catalog of themes, words and theme-word associations.
///
/// Every operation opens its own connection. Operations that touch both the
/// catalog and the associations run in a single transaction, so a failure
/// never leaves a half-renamed word or an orphan association behind.
#[derive(Debug, Clone)]
pub struct WordStore {
    db_path: String,
}

impl WordStore {
    /// Opens the store at `db_path`, applying pending migrations.
    ///
    /// A database without any theme is treated as a first run and receives
    /// the seed data. An existing database is never wiped.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidInput`] for an in-memory database path, which
    ///   would not survive the per-operation connections.
    /// - [`StoreError::Database`] if the database cannot be opened or
    ///   migrated.
    #[instrument(skip(db_path))]
    pub fn open(db_path: impl Into<String>) -> Result<Self, StoreError> {
        let db_path = db_path.into();
        info!(path = %db_path, "Opening WordStore");
        if is_in_memory(&db_path) {
            warn!(path = %db_path, "Rejecting in-memory database");
            return Err(StoreError::InvalidInput(format!(
                "'{}' is an in-memory database; the word store needs a file",
                db_path
            )));
        }

        let store = Self { db_path };
        let mut conn = store.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;

        let theme_count: i64 = schema::themes::table.count().get_result(&mut conn)?;
        if theme_count == 0 {
            info!("Empty store, inserting seed data");
            conn.transaction::<_, StoreError, _>(seed)?;
        } else {
            debug!(theme_count, "Existing store found");
        }

        Ok(store)
    }

    /// Returns the database path this store was opened with.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection with foreign keys enforced.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))?;
        diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;
        Ok(conn)
    }

    /// Drops every theme, word and association, then re-inserts the seed data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs; the store
    /// is left unchanged in that case.
    #[instrument(skip(self))]
    pub fn reset_to_seed(&self) -> Result<(), StoreError> {
        warn!(path = %self.db_path, "Resetting word store to seed data");
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            diesel::delete(schema::theme_words::table).execute(conn)?;
            diesel::delete(schema::words::table).execute(conn)?;
            diesel::delete(schema::themes::table).execute(conn)?;
            seed(conn)
        })
    }

    /// Lists all themes, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_themes(&self) -> Result<Vec<Theme>, StoreError> {
        let mut conn = self.connection()?;
        let themes = schema::themes::table
            .order(schema::themes::id.asc())
            .select(Theme::as_select())
            .load(&mut conn)?;

        debug!(count = themes.len(), "Themes loaded");
        Ok(themes)
    }

    /// Looks up a theme by its exact name. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn theme_by_name(&self, name: &str) -> Result<Option<Theme>, StoreError> {
        let mut conn = self.connection()?;
        let theme = schema::themes::table
            .filter(schema::themes::name.eq(name.trim()))
            .select(Theme::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(theme)
    }

    /// Creates a new theme.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] if the name is blank or already
    /// taken.
    #[instrument(skip(self))]
    pub fn create_theme(&self, name: &str) -> Result<Theme, StoreError> {
        let name = normalize_theme_name(name)?;
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            let taken = schema::themes::table
                .filter(schema::themes::name.eq(&name))
                .select(Theme::as_select())
                .first(conn)
                .optional()?;
            if taken.is_some() {
                return Err(StoreError::InvalidInput(format!(
                    "theme '{}' already exists",
                    name
                )));
            }

            let theme = diesel::insert_into(schema::themes::table)
                .values(&NewTheme::new(name.clone()))
                .returning(Theme::as_returning())
                .get_result(conn)?;

            info!(theme_id = theme.id(), name = %theme.name(), "Theme created");
            Ok(theme)
        })
    }

    /// Returns the word texts of a theme, in catalog order.
    ///
    /// An unknown theme simply has no words: the result is empty, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn words_for_theme(&self, theme_id: i32) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection()?;
        let words = schema::theme_words::table
            .filter(schema::theme_words::theme_id.eq(theme_id))
            .order(schema::theme_words::word_id.asc())
            .select(schema::theme_words::word)
            .load::<String>(&mut conn)?;

        debug!(theme_id, count = words.len(), "Theme words loaded");
        Ok(words)
    }

    /// Lists the whole word catalog, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_words(&self) -> Result<Vec<Word>, StoreError> {
        let mut conn = self.connection()?;
        let words = schema::words::table
            .order(schema::words::id.asc())
            .select(Word::as_select())
            .load(&mut conn)?;
        Ok(words)
    }

    /// Looks up a catalog word by text (case-insensitive). Returns `None` if
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn find_word(&self, text: &str) -> Result<Option<Word>, StoreError> {
        let mut conn = self.connection()?;
        find_word(&mut conn, &lookup_key(text))
    }

    /// Adds a word to the catalog.
    ///
    /// The text is trimmed and uppercased first. Adding a word that already
    /// exists is a no-op; the return value tells whether a row was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] for blank or non-alphabetic text.
    #[instrument(skip(self))]
    pub fn add_word(&self, text: &str) -> Result<bool, StoreError> {
        let text = normalize_word(text)?;
        let mut conn = self.connection()?;

        let inserted = diesel::insert_or_ignore_into(schema::words::table)
            .values(&NewWord::new(text.clone()))
            .execute(&mut conn)?;

        if inserted > 0 {
            info!(word = %text, "Word added");
        } else {
            debug!(word = %text, "Word already in catalog");
        }
        Ok(inserted > 0)
    }

    /// Renames a catalog word and every theme association that refers to it.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if `old_text` is not in the catalog.
    /// - [`StoreError::InvalidInput`] if `new_text` is blank, non-alphabetic or
    ///   already used by another word.
    #[instrument(skip(self))]
    pub fn update_word(&self, old_text: &str, new_text: &str) -> Result<Word, StoreError> {
        let old_text = lookup_key(old_text);
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            let word = find_word(conn, &old_text)?
                .ok_or_else(|| StoreError::NotFound(format!("word '{}'", old_text)))?;
            let new_text = normalize_word(new_text)?;

            if *word.text() == new_text {
                debug!(word = %new_text, "Rename to same text, nothing to do");
                return Ok(word);
            }
            if find_word(conn, &new_text)?.is_some() {
                return Err(StoreError::InvalidInput(format!(
                    "word '{}' already exists",
                    new_text
                )));
            }

            let renamed = diesel::update(schema::words::table.find(*word.id()))
                .set(schema::words::word.eq(&new_text))
                .returning(Word::as_returning())
                .get_result(conn)?;

            let propagated = diesel::update(
                schema::theme_words::table.filter(schema::theme_words::word_id.eq(*word.id())),
            )
            .set(schema::theme_words::word.eq(&new_text))
            .execute(conn)?;

            info!(
                word_id = word.id(),
                old = %old_text,
                new = %new_text,
                propagated,
                "Word renamed"
            );
            Ok(renamed)
        })
    }

    /// Deletes a catalog word together with all of its theme associations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the word is not in the catalog.
    #[instrument(skip(self))]
    pub fn delete_word(&self, text: &str) -> Result<(), StoreError> {
        let text = lookup_key(text);
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            let word = find_word(conn, &text)?
                .ok_or_else(|| StoreError::NotFound(format!("word '{}'", text)))?;

            let memberships = diesel::delete(
                schema::theme_words::table.filter(schema::theme_words::word_id.eq(*word.id())),
            )
            .execute(conn)?;
            diesel::delete(schema::words::table.find(*word.id())).execute(conn)?;

            info!(word_id = word.id(), word = %text, memberships, "Word deleted");
            Ok(())
        })
    }

    /// Makes a catalog word part of a theme. Assigning twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the theme or the word does not exist.
    #[instrument(skip(self))]
    pub fn assign_word(&self, theme_id: i32, text: &str) -> Result<(), StoreError> {
        let text = lookup_key(text);
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            let theme = find_theme(conn, theme_id)?;
            let word = find_word(conn, &text)?
                .ok_or_else(|| StoreError::NotFound(format!("word '{}'", text)))?;

            let inserted = diesel::insert_or_ignore_into(schema::theme_words::table)
                .values(&ThemeWord::new(*theme.id(), *word.id(), word.text().clone()))
                .execute(conn)?;

            debug!(theme = %theme.name(), word = %text, inserted, "Word assigned");
            Ok(())
        })
    }

    /// Removes a word from a theme, keeping it in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the word does not exist or is not a
    /// member of the theme.
    #[instrument(skip(self))]
    pub fn unassign_word(&self, theme_id: i32, text: &str) -> Result<(), StoreError> {
        let text = lookup_key(text);
        let mut conn = self.connection()?;

        conn.transaction::<_, StoreError, _>(|conn| {
            let word = find_word(conn, &text)?
                .ok_or_else(|| StoreError::NotFound(format!("word '{}'", text)))?;

            let removed = diesel::delete(
                schema::theme_words::table
                    .filter(schema::theme_words::theme_id.eq(theme_id))
                    .filter(schema::theme_words::word_id.eq(*word.id())),
            )
            .execute(conn)?;

            if removed == 0 {
                return Err(StoreError::NotFound(format!(
                    "word '{}' in theme {}",
                    text, theme_id
                )));
            }
            info!(theme_id, word = %text, "Word unassigned");
            Ok(())
        })
    }
}

/// SQLite paths that name a private in-memory database.
fn is_in_memory(db_path: &str) -> bool {
    let path = db_path.trim();
    path == ":memory:" || path.starts_with("file::memory:") || path.contains("mode=memory")
}

/// Key used to look up existing words: the canonical uppercase spelling.
fn lookup_key(text: &str) -> String {
    text.trim().to_uppercase()
}

fn find_word(conn: &mut SqliteConnection, text: &str) -> Result<Option<Word>, StoreError> {
    let word = schema::words::table
        .filter(schema::words::word.eq(text))
        .select(Word::as_select())
        .first(conn)
        .optional()?;
    Ok(word)
}

fn find_theme(conn: &mut SqliteConnection, theme_id: i32) -> Result<Theme, StoreError> {
    schema::themes::table
        .find(theme_id)
        .select(Theme::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::NotFound(format!("theme {}", theme_id)))
}
