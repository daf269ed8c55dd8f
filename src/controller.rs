//! Round controller: ties the word store, the active theme and the current
//! session together, and drives the renderer.

use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::db::{StoreError, Theme, WordStore};
use crate::error::HangmanError;
use crate::games::hangman::{GameSession, GuessOutcome, RoundView};

/// Render callback invoked after every state change of a round.
pub trait RoundRenderer {
    /// Draws the given round snapshot.
    fn render(&mut self, view: &RoundView);
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl RoundRenderer for NoopRenderer {
    fn render(&mut self, _view: &RoundView) {}
}

/// Owns the word store and at most one round.
///
/// There is no global store: whoever builds the controller hands it the
/// [`WordStore`] to use. Word edits made through `store()` apply to the next
/// round; the current word is never swapped.
#[derive(Debug, Getters)]
pub struct RoundController<R: RoundRenderer> {
    store: WordStore,
    theme: Theme,
    session: Option<GameSession>,
    renderer: R,
}

impl<R: RoundRenderer> RoundController<R> {
    /// Creates a controller playing the theme named `theme_name`.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no theme has that name.
    #[instrument(skip(store, renderer))]
    pub fn new(store: WordStore, theme_name: &str, renderer: R) -> Result<Self, HangmanError> {
        let theme = resolve_theme(&store, theme_name)?;
        info!(theme = %theme.name(), theme_id = theme.id(), "Creating RoundController");
        Ok(Self {
            store,
            theme,
            session: None,
            renderer,
        })
    }

    /// Switches the active theme. The current round, if any, is kept until
    /// the next [`RoundController::new_round`].
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no theme has that name.
    #[instrument(skip(self))]
    pub fn select_theme(&mut self, name: &str) -> Result<&Theme, HangmanError> {
        self.theme = resolve_theme(&self.store, name)?;
        info!(theme = %self.theme.name(), "Theme selected");
        Ok(&self.theme)
    }

    /// Starts a new round on the active theme, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyPool` error if the theme has no playable word; the
    /// previous round is discarded either way.
    #[instrument(skip(self), fields(theme = %self.theme.name()))]
    pub fn new_round(&mut self) -> Result<&GameSession, HangmanError> {
        self.new_round_with_rng(&mut rand::rng())
    }

    /// Makes `theme_id` the active theme and starts a round on it.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no theme has that id, or an `EmptyPool`
    /// error if it has no playable word.
    #[instrument(skip(self))]
    pub fn new_round_for(&mut self, theme_id: i32) -> Result<&GameSession, HangmanError> {
        self.theme = self
            .store
            .list_themes()?
            .into_iter()
            .find(|theme| *theme.id() == theme_id)
            .ok_or_else(|| StoreError::NotFound(format!("theme {}", theme_id)))?;
        self.new_round()
    }

    /// Like [`RoundController::new_round`] with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// Returns an `EmptyPool` error if the theme has no playable word.
    #[instrument(skip(self, rng), fields(theme = %self.theme.name()))]
    pub fn new_round_with_rng<G: Rng + ?Sized>(
        &mut self,
        rng: &mut G,
    ) -> Result<&GameSession, HangmanError> {
        self.session = None;
        let theme_id = *self.theme.id();
        let pool = self.store.words_for_theme(theme_id)?;
        debug!(theme_id, pool_size = pool.len(), "Pool loaded");

        let session = GameSession::start_with_rng(theme_id, &pool, rng).inspect_err(|e| {
            warn!(error = %e, "Cannot start round");
        })?;
        self.renderer.render(&session.view());
        Ok(self.session.insert(session))
    }

    /// Forwards a guess to the current round and re-renders it.
    ///
    /// Repeated letters are accepted as no-ops and still re-render.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `c` is not a letter, the round is over or no round
    ///   was started. The round is unchanged in that case.
    #[instrument(skip(self))]
    pub fn guess(&mut self, c: char) -> Result<GuessOutcome, HangmanError> {
        let session = self.session.as_mut().ok_or(HangmanError::NoRound)?;
        let outcome = session.guess(c)?;
        self.renderer.render(&session.view());
        Ok(outcome)
    }

    /// Returns the current round snapshot, if a round was started.
    pub fn view(&self) -> Option<RoundView> {
        self.session.as_ref().map(GameSession::view)
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

/// Resolves a theme name to its stored row.
#[instrument(skip(store))]
fn resolve_theme(store: &WordStore, name: &str) -> Result<Theme, HangmanError> {
    store
        .theme_by_name(name)?
        .ok_or_else(|| StoreError::NotFound(format!("theme '{}'", name.trim())).into())
}
