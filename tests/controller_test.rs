//! Tests for the round controller and its render callback.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use hangman::{
    ErrorKind, HangmanError, RoundController, RoundRenderer, RoundStatus, RoundView, WordStore,
};

/// Renderer that keeps every view it was asked to draw.
#[derive(Debug, Default)]
struct RecordingRenderer {
    views: Vec<RoundView>,
}

impl RoundRenderer for RecordingRenderer {
    fn render(&mut self, view: &RoundView) {
        self.views.push(view.clone());
    }
}

fn setup_test_store() -> (NamedTempFile, WordStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = WordStore::open(db_path).expect("Failed to open store");
    (db_file, store)
}

fn controller(theme: &str) -> (NamedTempFile, RoundController<RecordingRenderer>) {
    let (db, store) = setup_test_store();
    let controller = RoundController::new(store, theme, RecordingRenderer::default())
        .expect("Controller creation failed");
    (db, controller)
}

#[test]
fn test_unknown_theme_not_found() {
    let (_db, store) = setup_test_store();
    let result = RoundController::new(store, "Astronaut", RecordingRenderer::default());
    let err = result.expect_err("Unknown theme should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_guess_before_round_fails() {
    let (_db, mut controller) = controller("Developpeur");
    assert_eq!(controller.guess('a'), Err(HangmanError::NoRound));
    assert!(controller.view().is_none());
    assert!(controller.renderer().views.is_empty());
}

#[test]
fn test_new_round_draws_from_theme() {
    let (_db, mut controller) = controller("Designer");
    let pool = controller
        .store()
        .words_for_theme(*controller.theme().id())
        .expect("Query failed");

    let mut rng = StdRng::seed_from_u64(7);
    let session = controller.new_round_with_rng(&mut rng).expect("Round failed");
    assert!(pool.contains(&session.selected_word().to_string()));
    assert_eq!(session.status(), RoundStatus::InProgress);
    assert_eq!(controller.renderer().views.len(), 1);
}

#[test]
fn test_every_accepted_guess_renders() {
    let (_db, mut controller) = controller("Developpeur");
    controller.new_round().expect("Round failed");

    controller.guess('e').expect("Guess failed");
    controller.guess('e').expect("Repeat should not fail");
    assert_eq!(controller.renderer().views.len(), 3);

    assert!(controller.guess('7').is_err());
    assert_eq!(controller.renderer().views.len(), 3);

    let last = controller.renderer().views.last().expect("No view");
    assert_eq!(Some(last.clone()), controller.view());
}

#[test]
fn test_invalid_guess_is_invalid_input() {
    let (_db, mut controller) = controller("Developpeur");
    controller.new_round().expect("Round failed");
    let before = controller.view();

    let err = controller.guess('#').expect_err("Symbol should be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(controller.view(), before);
}

#[test]
fn test_empty_theme_cannot_start() {
    let (_db, store) = setup_test_store();
    store.create_theme("Empty").expect("Create failed");
    let mut controller = RoundController::new(store, "Empty", RecordingRenderer::default())
        .expect("Controller creation failed");

    let err = controller.new_round().expect_err("Empty pool should fail");
    assert_eq!(err.kind(), ErrorKind::EmptyPool);
    assert!(controller.view().is_none());
    assert!(controller.renderer().views.is_empty());
}

#[test]
fn test_round_played_to_win() {
    let (_db, mut controller) = controller("Developpeur");
    controller.new_round().expect("Round failed");
    let word = controller
        .session()
        .as_ref()
        .expect("No session")
        .selected_word()
        .to_string();

    let mut status = RoundStatus::InProgress;
    for c in word.chars() {
        status = controller.guess(c).expect("Guess failed").status;
        if status.is_terminal() {
            break;
        }
    }
    assert_eq!(status, RoundStatus::Won);

    let view = controller.view().expect("No view");
    assert_eq!(view.word().as_deref(), Some(word.as_str()));
    assert_eq!(
        controller.guess('a').map_err(|e| e.kind()),
        Err(ErrorKind::InvalidInput)
    );
}

#[test]
fn test_word_edit_applies_to_next_round() {
    let (_db, store) = setup_test_store();
    let theme = store.create_theme("Solo").expect("Create failed");
    store.add_word("alpha").expect("Add failed");
    store.assign_word(*theme.id(), "ALPHA").expect("Assign failed");

    let mut controller = RoundController::new(store, "Solo", RecordingRenderer::default())
        .expect("Controller creation failed");
    controller.new_round().expect("Round failed");

    controller
        .store()
        .update_word("ALPHA", "OMEGA")
        .expect("Update failed");

    let current = controller.session().as_ref().expect("No session");
    assert_eq!(current.selected_word(), "ALPHA");

    let next = controller.new_round().expect("Round failed");
    assert_eq!(next.selected_word(), "OMEGA");
}

#[test]
fn test_select_theme_switches_pool() {
    let (_db, mut controller) = controller("Developpeur");
    let theme = controller.select_theme("Designer").expect("Select failed");
    assert_eq!(theme.name(), "Designer");
    assert_eq!(
        controller.select_theme("Nope").map(|_| ()).map_err(|e| e.kind()),
        Err(ErrorKind::NotFound)
    );
    assert_eq!(controller.theme().name(), "Designer");
}

#[test]
fn test_new_round_for_theme_id() {
    let (_db, mut controller) = controller("Developpeur");
    let designer = controller
        .store()
        .theme_by_name("Designer")
        .expect("Query failed")
        .expect("Theme missing");
    let pool = controller
        .store()
        .words_for_theme(*designer.id())
        .expect("Query failed");

    let session = controller.new_round_for(*designer.id()).expect("Round failed");
    assert!(pool.contains(&session.selected_word().to_string()));
    assert_eq!(controller.theme(), &designer);

    let err = controller.new_round_for(9999).expect_err("Unknown id should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_theme_switch_mid_session_starts_from_new_pool() {
    let (_db, mut controller) = controller("Developpeur");
    controller.new_round().expect("Round failed");
    controller.guess('e').expect("Guess failed");

    controller.select_theme("Designer").expect("Select failed");
    let designer = controller
        .store()
        .words_for_theme(*controller.theme().id())
        .expect("Query failed");

    let session = controller.new_round().expect("Round failed");
    assert!(designer.contains(&session.selected_word().to_string()));
    assert!(session.used_letters().is_empty());
}
