//! Conversion between user text and digit sequences.

use crate::error::InputError;

/// Parse already-trimmed text into decimal digits.
///
/// Only ASCII `0`-`9` are accepted; signs, decimal points and exponents
/// are treated as non-numeric.
pub fn parse(text: &str) -> Result<Vec<u8>, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.bytes()
        .map(|b| match b {
            b'0'..=b'9' => Ok(b - b'0'),
            _ => Err(InputError::NonNumeric {
                found: text.to_string(),
            }),
        })
        .collect()
}

/// Render digits back to their decimal text form. Values above 9 render as `?`.
pub fn render(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| char::from_digit(u32::from(d), 10).unwrap_or('?'))
        .collect()
}

/// Position and value of the first element that is not a decimal digit.
pub(crate) fn first_invalid(digits: &[u8]) -> Option<(usize, u8)> {
    digits
        .iter()
        .enumerate()
        .find(|(_, &d)| d > 9)
        .map(|(i, &d)| (i, d))
}
