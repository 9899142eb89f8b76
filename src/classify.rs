//! Per-digit classification of a guess against the secret.
//!
//! Each guessed digit is compared with the secret digit in the same position
//! and with the secret as a whole. The first matching rule decides its symbol:
//! exact hits, then digits present elsewhere, then nine-complements, then
//! neighbor distances. Positions matching nothing are dropped from the result.

use crate::digits;
use crate::error::ClassifyError;
use crate::secret::Secret;
use crate::{FULL_MATCH_TEXT, MISS_TEXT};

/// The outcome for a single guessed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Right digit, right place, digit occurs once in the secret (B)
    ExactUnique,
    /// Right digit, right place, digit occurs more than once (D)
    ExactDuplicate,
    /// Digit is elsewhere in the secret, occurs once (R)
    PresentUnique,
    /// Digit is elsewhere in the secret, occurs more than once (F)
    PresentDuplicate,
    /// Guessed and secret digit sum to nine (P)
    Complement,
    /// Distance to the secret digit equals an adjacent guessed digit (V)
    Neighbor,
    /// No rule matched; contributes nothing to the result
    None,
}

impl Symbol {
    /// Letter shown to the player, if the symbol is rendered at all.
    pub fn to_char(self) -> Option<char> {
        match self {
            Symbol::ExactUnique => Some('B'),
            Symbol::ExactDuplicate => Some('D'),
            Symbol::PresentUnique => Some('R'),
            Symbol::PresentDuplicate => Some('F'),
            Symbol::Complement => Some('P'),
            Symbol::Neighbor => Some('V'),
            Symbol::None => None,
        }
    }
}

/// The result of classifying one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The guess equals the secret
    FullMatch,
    /// No position produced a symbol
    Miss,
    /// Symbols of the positions that matched a rule, in position order.
    /// Never empty and never contains `Symbol::None`.
    Symbols(Vec<Symbol>),
}

impl Classification {
    pub fn is_win(&self) -> bool {
        matches!(self, Classification::FullMatch)
    }

    fn from_positions(symbols: Vec<Symbol>) -> Self {
        let symbols: Vec<Symbol> = symbols.into_iter().filter(|s| *s != Symbol::None).collect();
        if symbols.is_empty() {
            Classification::Miss
        } else {
            Classification::Symbols(symbols)
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::FullMatch => f.write_str(FULL_MATCH_TEXT),
            Classification::Miss => f.write_str(MISS_TEXT),
            Classification::Symbols(symbols) => {
                let rendered: String = symbols.iter().filter_map(|s| s.to_char()).collect();
                f.write_str(&rendered)
            }
        }
    }
}

fn check_inputs(secret: &Secret, guess: &[u8]) -> Result<(), ClassifyError> {
    if guess.len() != secret.len() {
        return Err(ClassifyError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }
    for digits in [secret.digits(), guess] {
        if let Some((position, value)) = digits::first_invalid(digits) {
            return Err(ClassifyError::InvalidDigit { position, value });
        }
    }
    Ok(())
}

/// Classify every position of `guess`, including positions that match no rule.
///
/// Unlike [`classify`] there is no full-match short-circuit: a guess equal to
/// the secret yields one exact symbol per position.
pub fn classify_positions(secret: &Secret, guess: &[u8]) -> Result<Vec<Symbol>, ClassifyError> {
    check_inputs(secret, guess)?;

    let secret_digits = secret.digits();
    let secret_text = secret.as_str().as_bytes();
    let len = guess.len();

    let symbols = (0..len)
        .map(|i| {
            let above = secret_digits[i];
            let below = guess[i];

            let occurrences = secret_text.iter().filter(|&&c| c == b'0' + below).count();
            let repeats = occurrences > 1;
            let exact = above == below;
            let present = secret_digits.contains(&below);
            let complement = above + below == 9;

            let distance = above.abs_diff(below);
            let left = i.checked_sub(1).map(|j| guess[j]);
            let right = (i + 1 < len).then(|| guess[i + 1]);
            let neighbor = left == Some(distance) || right == Some(distance);

            if exact {
                if repeats {
                    Symbol::ExactDuplicate
                } else {
                    Symbol::ExactUnique
                }
            } else if present {
                if repeats {
                    Symbol::PresentDuplicate
                } else {
                    Symbol::PresentUnique
                }
            } else if complement {
                Symbol::Complement
            } else if neighbor {
                Symbol::Neighbor
            } else {
                Symbol::None
            }
        })
        .collect();

    Ok(symbols)
}

/// Classify `guess` against `secret`.
///
/// Fails if the lengths differ or either side holds a value outside 0-9.
/// Callers are expected to validate guesses first.
pub fn classify(secret: &Secret, guess: &[u8]) -> Result<Classification, ClassifyError> {
    check_inputs(secret, guess)?;

    if secret.digits() == guess {
        return Ok(Classification::FullMatch);
    }

    classify_positions(secret, guess).map(Classification::from_positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> Secret {
        Secret::parse(s).unwrap()
    }

    #[test]
    fn single_digit_has_no_neighbors() {
        // |7 - 0| = 7 would need an adjacent guessed 7, and there is none.
        let symbols = classify_positions(&secret("7"), &[0]).unwrap();
        assert_eq!(symbols, vec![Symbol::None]);
    }

    #[test]
    fn positions_keep_none_entries() {
        let symbols = classify_positions(&secret("112"), &[1, 1, 9]).unwrap();
        assert_eq!(
            symbols,
            vec![Symbol::ExactDuplicate, Symbol::ExactDuplicate, Symbol::None]
        );
    }

    #[test]
    fn present_rule_beats_complement() {
        // 4 + 5 = 9 at both positions, but both digits are also in the secret.
        let symbols = classify_positions(&secret("45"), &[5, 4]).unwrap();
        assert_eq!(symbols, vec![Symbol::PresentUnique, Symbol::PresentUnique]);
    }

    #[test]
    fn symbols_never_render_as_sentinel() {
        let bien = Classification::Symbols(vec![Symbol::ExactUnique]);
        assert_eq!(bien.to_string(), "B");
        assert_ne!(bien, Classification::FullMatch);
    }
}
