//! # Secret Digits
//!
//! A turn-based guessing game. One player fixes a secret digit sequence; every
//! guess of the same length is answered with a string of per-digit symbols.
//!
//! The classification engine lives in [`classify`], the session lifecycle in
//! [`session`], and an offline survey of every possible guess in [`analysis`].

pub mod analysis;
pub mod classify;
pub mod digits;
pub mod error;
pub mod secret;
pub mod session;

pub use analysis::ResultDistribution;
pub use classify::{classify, classify_positions, Classification, Symbol};
pub use error::{AnalysisError, ClassifyError, InputError};
pub use secret::{Secret, SecretRegistry};
pub use session::{Command, HistoryEntry, Phase, Rejection, SessionController, SubmitOutcome};

/// Rendering of a guess equal to the secret
pub const FULL_MATCH_TEXT: &str = "Bien";

/// Rendering of a guess where no position matched any rule
pub const MISS_TEXT: &str = "Mal";

/// Longest secret the distribution analysis will enumerate (10^6 guesses)
pub const MAX_ANALYSIS_LENGTH: usize = 6;
