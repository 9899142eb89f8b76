//! Session lifecycle: secret entry, guessing, reset.
//!
//! The controller owns the secret registry and the result history. Any input
//! surface drives it through [`SessionController::submit_text`] and
//! [`SessionController::request_reset`] (or [`Command`]); rejected input never
//! changes state.

use crate::classify::{classify, Classification};
use crate::digits;
use crate::error::InputError;
use crate::secret::{Secret, SecretRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSecret,
    Guessing,
}

/// A discrete trigger from the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Reset,
}

/// One accepted guess and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: String,
    pub result: Classification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    NonNumeric,
    WrongLength { expected: usize, actual: usize },
    /// The session state disagreed with the phase, or the engine refused a
    /// validated guess. Nothing was changed.
    Internal,
}

/// What a submission did. The caller clears its input field in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    SecretAccepted,
    Classified(&'a HistoryEntry),
    Rejected(Rejection),
    /// Returned by [`SessionController::dispatch`] for [`Command::Reset`]
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct SessionController {
    registry: SecretRegistry,
    history: Vec<HistoryEntry>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.registry.is_set() {
            Phase::Guessing
        } else {
            Phase::AwaitingSecret
        }
    }

    /// Whether a secret is currently set, for choosing the prompt text.
    pub fn has_secret(&self) -> bool {
        self.registry.is_set()
    }

    pub fn secret(&self) -> Option<&Secret> {
        self.registry.get()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn dispatch(&mut self, command: Command) -> SubmitOutcome<'_> {
        match command {
            Command::Submit(text) => self.submit_text(&text),
            Command::Reset => {
                self.request_reset();
                SubmitOutcome::Reset
            }
        }
    }

    pub fn submit_text(&mut self, value: &str) -> SubmitOutcome<'_> {
        let value = value.trim();
        match self.phase() {
            Phase::AwaitingSecret => self.submit_secret(value),
            Phase::Guessing => self.submit_guess(value),
        }
    }

    fn submit_secret(&mut self, value: &str) -> SubmitOutcome<'_> {
        let secret = match Secret::parse(value) {
            Ok(secret) => secret,
            Err(err) => return reject(err.into()),
        };
        let length = secret.len();
        if !self.registry.set(secret) {
            log::error!("Secret registry refused a parsed secret");
            return reject(Rejection::Internal);
        }
        log::debug!("Secret accepted, guesses must have {} digits", length);
        SubmitOutcome::SecretAccepted
    }

    fn submit_guess(&mut self, value: &str) -> SubmitOutcome<'_> {
        let guess = match digits::parse(value) {
            Ok(guess) => guess,
            Err(err) => return reject(err.into()),
        };

        let Some(secret) = self.registry.get() else {
            log::error!("Guess submitted while no secret is set");
            return reject(Rejection::Internal);
        };
        if guess.len() != secret.len() {
            return reject(Rejection::WrongLength {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let result = match classify(secret, &guess) {
            Ok(result) => result,
            Err(err) => {
                log::error!("Validated guess {:?} failed classification: {}", value, err);
                return reject(Rejection::Internal);
            }
        };
        log::trace!("Guess {} classified as {}", value, result);

        let index = self.history.len();
        self.history.push(HistoryEntry {
            guess: value.to_string(),
            result,
        });
        SubmitOutcome::Classified(&self.history[index])
    }

    pub fn request_reset(&mut self) {
        log::debug!("Resetting session after {} guesses", self.history.len());
        self.registry.reset();
        self.history.clear();
    }
}

fn reject<'a>(reason: Rejection) -> SubmitOutcome<'a> {
    log::debug!("Input rejected: {:?}", reason);
    SubmitOutcome::Rejected(reason)
}

impl From<InputError> for Rejection {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Empty => Rejection::Empty,
            InputError::NonNumeric { .. } => Rejection::NonNumeric,
        }
    }
}
