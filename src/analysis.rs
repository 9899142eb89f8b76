//! Survey of every possible guess against a fixed secret.
//!
//! For a secret of length L there are 10^L guesses. Each one is classified in
//! parallel and the rendered results are tallied, which shows how much a given
//! result tells the guesser about the secret.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::classify::{classify, Classification};
use crate::error::AnalysisError;
use crate::secret::Secret;
use crate::MAX_ANALYSIS_LENGTH;

/// How many guesses produce each result for one secret.
#[derive(Debug, Clone)]
pub struct ResultDistribution {
    secret: Secret,
    /// Sorted by descending count, ties broken by rendered text
    counts: Vec<(Classification, usize)>,
    total: usize,
}

/// The guess whose digits spell `index` in base 10, left-padded with zeros.
fn guess_from_index(mut index: u64, len: usize) -> Vec<u8> {
    let mut guess = vec![0u8; len];
    for slot in guess.iter_mut().rev() {
        *slot = (index % 10) as u8;
        index /= 10;
    }
    guess
}

impl ResultDistribution {
    pub fn for_secret(secret: &Secret) -> Result<Self, AnalysisError> {
        let len = secret.len();
        if len > MAX_ANALYSIS_LENGTH {
            return Err(AnalysisError::TooLong {
                length: len,
                max: MAX_ANALYSIS_LENGTH,
            });
        }

        let space = 10u64.pow(len as u32);
        log::debug!("Classifying {} guesses against a {}-digit secret", space, len);

        let tally = (0..space)
            .into_par_iter()
            .map(|index| classify(secret, &guess_from_index(index, len)))
            .try_fold(HashMap::new, |mut tally, result| {
                *tally.entry(result?).or_insert(0usize) += 1;
                Ok::<_, AnalysisError>(tally)
            })
            .try_reduce(HashMap::new, |mut left, right| {
                for (result, count) in right {
                    *left.entry(result).or_insert(0) += count;
                }
                Ok(left)
            })?;

        let mut counts: Vec<(Classification, usize)> = tally.into_iter().collect();
        counts.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
        });

        Ok(Self {
            secret: secret.clone(),
            counts,
            total: space as usize,
        })
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn counts(&self) -> &[(Classification, usize)] {
        &self.counts
    }

    /// Number of guesses surveyed, always 10^L.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count_of(&self, result: &Classification) -> usize {
        self.counts
            .iter()
            .find(|(r, _)| r == result)
            .map_or(0, |(_, c)| *c)
    }

    pub fn distinct_results(&self) -> usize {
        self.counts.len()
    }

    pub fn top(&self, n: usize) -> &[(Classification, usize)] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// Expected number of guesses sharing a result with a random guess.
    pub fn expected_bucket_size(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts
            .iter()
            .map(|(_, c)| (*c as f64) * (*c as f64))
            .sum::<f64>()
            / self.total as f64
    }
}
