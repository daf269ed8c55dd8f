//! Tests for word store operations.

use tempfile::NamedTempFile;

use hangman::{SEED_THEMES, StoreError, WordStore};

/// Creates a temporary database file with schema and seed data applied,
/// returns the file handle (must stay in scope to keep the file alive) and a
/// ready store.
fn setup_test_store() -> (NamedTempFile, WordStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = WordStore::open(db_path).expect("Failed to open store");
    (db_file, store)
}

fn theme_id(store: &WordStore, name: &str) -> i32 {
    *store
        .theme_by_name(name)
        .expect("Query failed")
        .expect("Theme missing")
        .id()
}

#[test]
fn test_open_seeds_fresh_store() {
    let (_db, store) = setup_test_store();
    let themes = store.list_themes().expect("List failed");
    let names: Vec<&str> = themes.iter().map(|t| t.name().as_str()).collect();
    assert_eq!(names, vec!["Developpeur", "Designer"]);
}

#[test]
fn test_open_rejects_in_memory_database() {
    for path in [":memory:", " :memory: ", "file::memory:?cache=shared", "file:words?mode=memory"] {
        assert!(
            matches!(WordStore::open(path), Err(StoreError::InvalidInput(_))),
            "{} should be rejected",
            path
        );
    }
}

#[test]
fn test_words_for_theme_in_seed_order() {
    let (_db, store) = setup_test_store();
    for (name, words) in SEED_THEMES {
        let id = theme_id(&store, name);
        let loaded = store.words_for_theme(id).expect("Query failed");
        assert_eq!(loaded, words.iter().map(|w| w.to_string()).collect::<Vec<_>>());
    }
}

#[test]
fn test_seed_links_designer_words_to_their_own_rows() {
    let (_db, store) = setup_test_store();
    let designer = theme_id(&store, "Designer");
    let words = store.words_for_theme(designer).expect("Query failed");
    assert!(words.contains(&"FIGMA".to_string()));
    assert!(!words.contains(&"PYTHON".to_string()));
    assert!(store.find_word("FIGMA").expect("Query failed").is_some());
}

#[test]
fn test_words_for_unknown_theme_is_empty() {
    let (_db, store) = setup_test_store();
    let words = store.words_for_theme(9999).expect("Query failed");
    assert!(words.is_empty());
}

#[test]
fn test_reopen_keeps_added_words() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let store = WordStore::open(db_path.clone()).expect("Open failed");
    store.add_word("rust").expect("Add failed");
    drop(store);

    let reopened = WordStore::open(db_path).expect("Reopen failed");
    assert!(reopened.find_word("RUST").expect("Query failed").is_some());
    assert_eq!(reopened.list_themes().expect("List failed").len(), 2);
}

#[test]
fn test_add_word_normalizes() {
    let (_db, store) = setup_test_store();
    let inserted = store.add_word("  kotlin ").expect("Add failed");
    assert!(inserted);
    let word = store.find_word("KOTLIN").expect("Query failed").expect("Missing");
    assert_eq!(word.text(), "KOTLIN");
}

#[test]
fn test_add_existing_word_is_noop() {
    let (_db, store) = setup_test_store();
    let before = store.list_words().expect("List failed").len();
    let inserted = store.add_word("python").expect("Duplicate add should not fail");
    assert!(!inserted);
    assert_eq!(store.list_words().expect("List failed").len(), before);
}

#[test]
fn test_add_word_rejects_blank_and_symbols() {
    let (_db, store) = setup_test_store();
    assert!(matches!(store.add_word("   "), Err(StoreError::InvalidInput(_))));
    assert!(matches!(store.add_word("C#"), Err(StoreError::InvalidInput(_))));
}

#[test]
fn test_update_word_propagates_to_themes() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");

    let renamed = store.update_word("CODE", "CODER").expect("Update failed");
    assert_eq!(renamed.text(), "CODER");

    let words = store.words_for_theme(dev).expect("Query failed");
    assert!(words.contains(&"CODER".to_string()));
    assert!(!words.contains(&"CODE".to_string()));
    assert!(store.find_word("CODE").expect("Query failed").is_none());
}

#[test]
fn test_update_word_propagates_to_every_theme() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");
    let designer = theme_id(&store, "Designer");
    store.assign_word(designer, "CSS").expect("Assign failed");

    store.update_word("css", "sass").expect("Update failed");

    for id in [dev, designer] {
        let words = store.words_for_theme(id).expect("Query failed");
        assert!(words.contains(&"SASS".to_string()));
        assert!(!words.contains(&"CSS".to_string()));
    }
}

#[test]
fn test_update_missing_word_not_found() {
    let (_db, store) = setup_test_store();
    let result = store.update_word("COBOL", "FORTRAN");
    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert!(store.find_word("FORTRAN").expect("Query failed").is_none());
}

#[test]
fn test_update_missing_word_checked_before_new_text() {
    let (_db, store) = setup_test_store();
    assert!(matches!(
        store.update_word("COBOL", "  "),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.update_word("COBOL", "F#"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_update_existing_word_to_invalid_text_rejected() {
    let (_db, store) = setup_test_store();
    assert!(matches!(
        store.update_word("CODE", "  "),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(store.find_word("CODE").expect("Query failed").is_some());
}

#[test]
fn test_update_onto_existing_word_leaves_both() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");
    let before = store.words_for_theme(dev).expect("Query failed");

    let result = store.update_word("HTML", "CSS");
    assert!(matches!(result, Err(StoreError::InvalidInput(_))));

    assert_eq!(store.words_for_theme(dev).expect("Query failed"), before);
    assert!(store.find_word("HTML").expect("Query failed").is_some());
}

#[test]
fn test_update_word_same_text_is_noop() {
    let (_db, store) = setup_test_store();
    let word = store.update_word("mobile", "MOBILE").expect("Update failed");
    assert_eq!(word.text(), "MOBILE");
}

#[test]
fn test_delete_word_cascades() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");
    let designer = theme_id(&store, "Designer");
    store.assign_word(designer, "HTML").expect("Assign failed");

    store.delete_word("HTML").expect("Delete failed");

    for id in [dev, designer] {
        let words = store.words_for_theme(id).expect("Query failed");
        assert!(!words.contains(&"HTML".to_string()));
    }
    assert!(matches!(store.delete_word("HTML"), Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.update_word("HTML", "XHTML"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_delete_missing_word_not_found() {
    let (_db, store) = setup_test_store();
    let before = store.list_words().expect("List failed");
    assert!(matches!(store.delete_word("PERL"), Err(StoreError::NotFound(_))));
    assert_eq!(store.list_words().expect("List failed"), before);
}

#[test]
fn test_create_theme_and_assign() {
    let (_db, store) = setup_test_store();
    let theme = store.create_theme("  Ops ").expect("Create failed");
    assert_eq!(theme.name(), "Ops");
    assert!(store.words_for_theme(*theme.id()).expect("Query failed").is_empty());

    store.add_word("docker").expect("Add failed");
    store.assign_word(*theme.id(), "docker").expect("Assign failed");
    store.assign_word(*theme.id(), "DOCKER").expect("Second assign is a no-op");
    store.assign_word(*theme.id(), "network").expect("Assign failed");

    let words = store.words_for_theme(*theme.id()).expect("Query failed");
    assert_eq!(words, vec!["NETWORK".to_string(), "DOCKER".to_string()]);
}

#[test]
fn test_create_duplicate_theme_fails() {
    let (_db, store) = setup_test_store();
    let result = store.create_theme("Designer");
    assert!(matches!(result, Err(StoreError::InvalidInput(_))));
    assert!(matches!(store.create_theme(" "), Err(StoreError::InvalidInput(_))));
}

#[test]
fn test_assign_requires_existing_theme_and_word() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");
    assert!(matches!(store.assign_word(dev, "ELIXIR"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.assign_word(4242, "CODE"), Err(StoreError::NotFound(_))));
}

#[test]
fn test_unassign_keeps_catalog_word() {
    let (_db, store) = setup_test_store();
    let dev = theme_id(&store, "Developpeur");

    store.unassign_word(dev, "mobile").expect("Unassign failed");

    assert!(!store.words_for_theme(dev).expect("Query failed").contains(&"MOBILE".to_string()));
    assert!(store.find_word("MOBILE").expect("Query failed").is_some());
    assert!(matches!(store.unassign_word(dev, "MOBILE"), Err(StoreError::NotFound(_))));
}

#[test]
fn test_reset_to_seed_restores_seed_rows() {
    let (_db, store) = setup_test_store();
    store.add_word("haskell").expect("Add failed");
    store.delete_word("PYTHON").expect("Delete failed");
    store.create_theme("Extra").expect("Create failed");

    store.reset_to_seed().expect("Reset failed");

    assert!(store.find_word("HASKELL").expect("Query failed").is_none());
    assert!(store.find_word("PYTHON").expect("Query failed").is_some());
    assert_eq!(store.list_themes().expect("List failed").len(), SEED_THEMES.len());
    let dev = theme_id(&store, "Developpeur");
    assert_eq!(store.words_for_theme(dev).expect("Query failed").len(), 9);
}
