//! Scoring fuzzy hashes against each other.

use std::sync::OnceLock;

use super::fuzzy::FuzzyHash;
use crate::distance::DistanceConfig;

/// Scorer shared by every similarity computation, built on first use.
static FUZZY_DISTANCE: OnceLock<DistanceConfig> = OnceLock::new();

fn fuzzy_distance() -> &'static DistanceConfig {
    FUZZY_DISTANCE.get_or_init(DistanceConfig::fuzzy_hash)
}

/// Returns the similarity of two fuzzy hashes in `[0.0, 1.0]`.
///
/// Only digests computed at the same block size are comparable:
///
/// - equal block sizes compare `hash1` with `hash1`
/// - if one block size is exactly twice the other, the larger hash's `hash2` is compared with
///   the smaller hash's `hash1`
/// - any other combination scores `0.0`
///
/// The selected strings are scored with the edit distance costs `insert = 1`, `delete = 1`,
/// `transpose = 5`, `replace = 3` (case sensitive) and normalized as
/// `1 - distance / (len(p) + len(q))`. Two empty digests are identical and score `1.0`.
///
/// # Examples
///
/// ```rust
/// use bintriage::{fuzzy_hash, hash::similarity, FuzzyHash};
///
/// let a = fuzzy_hash(b"hello world");
/// assert_eq!(similarity(&a, &a), 1.0);
///
/// let unrelated: FuzzyHash = "768:abc:def".parse()?;
/// assert_eq!(similarity(&a, &unrelated), 0.0);
/// # Ok::<(), bintriage::Error>(())
/// ```
#[must_use]
pub fn similarity(x: &FuzzyHash, y: &FuzzyHash) -> f64 {
    similarity_with(fuzzy_distance(), x, y)
}

/// Like [`similarity`], but scores the selected digests with `scorer` instead of the
/// built-in [`DistanceConfig::fuzzy_hash`] costs.
///
/// # Examples
///
/// ```rust
/// use bintriage::{distance::DistanceConfig, hash::similarity_with, FuzzyHash};
///
/// let a: FuzzyHash = "3:ABC:x".parse()?;
/// let b: FuzzyHash = "3:ABD:y".parse()?;
///
/// let mut scorer = DistanceConfig::fuzzy_hash();
/// scorer.set_replacement_cost('C', 'D', 0.0)?;
/// assert_eq!(similarity_with(&scorer, &a, &b), 1.0);
/// # Ok::<(), bintriage::Error>(())
/// ```
#[must_use]
pub fn similarity_with(scorer: &DistanceConfig, x: &FuzzyHash, y: &FuzzyHash) -> f64 {
    let x_size = u64::from(x.block_size());
    let y_size = u64::from(y.block_size());

    let (p, q) = if x_size == y_size {
        (x.hash1(), y.hash1())
    } else if x_size == y_size * 2 {
        (x.hash2(), y.hash1())
    } else if y_size == x_size * 2 {
        (x.hash1(), y.hash2())
    } else {
        return 0.0;
    };

    let total = p.chars().count() + q.chars().count();
    if total == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let score = 1.0 - scorer.distance(p, q) / total as f64;
    score.clamp(0.0, 1.0)
}

/// Parses two fuzzy hashes and returns their similarity.
///
/// Any parse failure scores `0.0`.
#[must_use]
pub fn similarity_from_strings(a: &str, b: &str) -> f64 {
    match (a.parse::<FuzzyHash>(), b.parse::<FuzzyHash>()) {
        (Ok(x), Ok(y)) => similarity(&x, &y),
        (Err(error), _) | (_, Err(error)) => {
            log::debug!("fuzzy hash not comparable: {error}");
            0.0
        }
    }
}
