//! Persistence layer for themes, the word catalog and theme membership.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod seed;

pub use error::{DbError, StoreError};
pub use models::{NewTheme, NewWord, Theme, ThemeWord, Word, normalize_theme_name, normalize_word};
pub use repository::WordStore;
pub use seed::SEED_THEMES;
