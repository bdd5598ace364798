use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::domain::{GameState, GuessLetter};
use tracing::{error, info, warn};

pub mod error;
pub mod guess;
pub mod session;
pub mod status;
pub mod transport;
pub mod view;

pub use error::ServiceError;
pub use guess::{GuessController, GuessPhase, GuessRejection};
pub use session::SessionController;
pub use status::StatusMessage;
pub use transport::{GameService, HttpGameService, ServiceEndpoints};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    AlreadyLoaded,
    InProgress,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    NoSelection,
    InFlight,
    Correct,
    Incorrect,
    Completed { correct: bool },
    Failed,
}

impl From<GuessRejection> for GuessOutcome {
    fn from(value: GuessRejection) -> Self {
        match value {
            GuessRejection::NoSelection => Self::NoSelection,
            GuessRejection::InFlight => Self::InFlight,
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub game: GameState,
    pub selected_index: Option<usize>,
    pub phase: GuessPhase,
    pub message: StatusMessage,
}

#[derive(Default)]
struct ClientInner {
    session: SessionController,
    guess: GuessController,
    message: StatusMessage,
    loading: bool,
}

fn lock_inner(inner: &Mutex<ClientInner>) -> MutexGuard<'_, ClientInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy)]
enum PendingKind {
    Load,
    Guess,
}

/// Marks a request as outstanding until it is completed. Dropping it while
/// still armed (the caller's future was cancelled) releases the load or
/// guess guard so the session can carry on.
struct PendingRequest<'a> {
    inner: &'a Mutex<ClientInner>,
    kind: PendingKind,
    armed: bool,
}

impl<'a> PendingRequest<'a> {
    fn new(inner: &'a Mutex<ClientInner>, kind: PendingKind) -> Self {
        Self {
            inner,
            kind,
            armed: true,
        }
    }

    fn complete(mut self) -> MutexGuard<'a, ClientInner> {
        self.armed = false;
        lock_inner(self.inner)
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!(kind = ?self.kind, "request abandoned before completion");
        let mut inner = lock_inner(self.inner);
        match self.kind {
            PendingKind::Load => inner.loading = false,
            PendingKind::Guess => inner.guess.abandon(),
        }
    }
}

/// One game session against a [`GameService`].
///
/// State lives behind a single lock that is never held across a network
/// call, so snapshots stay available while a request is outstanding. Drop
/// the client to end the session.
pub struct GameClient<S: GameService> {
    service: S,
    inner: Mutex<ClientInner>,
}

impl<S: GameService> GameClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            inner: Mutex::new(ClientInner::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn lock(&self) -> MutexGuard<'_, ClientInner> {
        lock_inner(&self.inner)
    }

    /// Starts the session. Only the first successful call reaches the
    /// service; after a failure the caller may try again.
    pub async fn initialize(&self) -> LoadOutcome {
        {
            let mut inner = self.lock();
            if inner.session.is_loaded() {
                return LoadOutcome::AlreadyLoaded;
            }
            if inner.loading {
                return LoadOutcome::InProgress;
            }
            inner.loading = true;
        }

        let pending = PendingRequest::new(&self.inner, PendingKind::Load);
        let result = self.service.start_session().await;

        let mut inner = pending.complete();
        inner.loading = false;
        let applied = result.and_then(|body| Ok(inner.session.apply_start(body)?));
        match applied {
            Ok(()) => {
                let game = inner.session.game();
                info!(
                    positions = game.answered_quote.chars().count(),
                    category = %game.category,
                    "game session loaded"
                );
                inner.message = StatusMessage::Empty;
                LoadOutcome::Loaded
            }
            Err(err) => {
                error!(error = %err, "failed to fetch game data");
                inner.message = StatusMessage::LoadFailed;
                LoadOutcome::Failed
            }
        }
    }

    pub fn select_position(&self, index: usize) {
        self.lock().guess.select_position(index);
    }

    pub async fn submit_guess(&self, letter: GuessLetter) -> GuessOutcome {
        let request = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            match inner.guess.begin(inner.session.game(), letter) {
                Ok(request) => request,
                Err(rejection) => {
                    warn!(?rejection, %letter, "guess rejected before sending");
                    inner.message = rejection.message();
                    return rejection.into();
                }
            }
        };

        let pending = PendingRequest::new(&self.inner, PendingKind::Guess);
        let result = self.service.submit_guess(&request).await;

        let mut guard = pending.complete();
        let inner = &mut *guard;
        inner.guess.finish();
        let merged = result.and_then(|response| {
            inner.session.merge_guess(response.state)?;
            Ok(response.correct)
        });
        match merged {
            Ok(correct) => {
                let message = guess::feedback(correct, inner.session.game());
                inner.message = message;
                info!(
                    guess_index = request.guess_index,
                    guess_letter = %letter,
                    correct,
                    "guess processed"
                );
                if message == StatusMessage::QuoteComplete {
                    info!("quote fully revealed");
                    GuessOutcome::Completed { correct }
                } else if correct {
                    GuessOutcome::Correct
                } else {
                    GuessOutcome::Incorrect
                }
            }
            Err(err) => {
                error!(error = %err, guess_index = request.guess_index, "error making a guess");
                inner.message = StatusMessage::GuessFailed;
                GuessOutcome::Failed
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let inner = self.lock();
        GameSnapshot {
            game: inner.session.game().clone(),
            selected_index: inner.guess.selected_index(),
            phase: inner.guess.phase(),
            message: inner.message,
        }
    }

    pub fn message(&self) -> StatusMessage {
        self.lock().message
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod http_tests;
