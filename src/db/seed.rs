//! First-run seed data for the word store.

use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::{NewTheme, NewWord, StoreError, Theme, ThemeWord, Word, schema};

/// Themes and their word lists inserted into a fresh store.
pub const SEED_THEMES: &[(&str, &[&str])] = &[
    (
        "Developpeur",
        &[
            "PYTHON",
            "HTML",
            "CSS",
            "JAVASCRIPT",
            "DATABASE",
            "INTERFACE",
            "MOBILE",
            "NETWORK",
            "CODE",
        ],
    ),
    (
        "Designer",
        &[
            "SKETCH",
            "FIGMA",
            "ADOBE",
            "PROTOTYPE",
            "UX",
            "UI",
            "VECTOR",
            "MOCKUP",
            "WIREFRAME",
        ],
    ),
];

/// Inserts the seed themes, catalog words and memberships.
///
/// Existing rows are left alone, so seeding twice is harmless. Callers wrap
/// this in a transaction.
#[instrument(skip(conn))]
pub(crate) fn seed(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    for (theme_name, words) in SEED_THEMES {
        diesel::insert_or_ignore_into(schema::themes::table)
            .values(&NewTheme::new((*theme_name).to_string()))
            .execute(conn)?;
        let theme = schema::themes::table
            .filter(schema::themes::name.eq(*theme_name))
            .select(Theme::as_select())
            .first(conn)?;

        for text in *words {
            diesel::insert_or_ignore_into(schema::words::table)
                .values(&NewWord::new((*text).to_string()))
                .execute(conn)?;
            let word = schema::words::table
                .filter(schema::words::word.eq(*text))
                .select(Word::as_select())
                .first(conn)?;

            diesel::insert_or_ignore_into(schema::theme_words::table)
                .values(&ThemeWord::new(*theme.id(), *word.id(), word.text().clone()))
                .execute(conn)?;
        }
        debug!(theme = %theme_name, count = words.len(), "Seeded theme");
    }

    info!(themes = SEED_THEMES.len(), "Seed data inserted");
    Ok(())
}
