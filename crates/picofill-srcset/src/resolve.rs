//! Density tier selection

use crate::{NoCandidateError, SrcCandidate};

/// Pick the source for a target display density.
///
/// Snap-up policy: the first candidate (scanning ascending) at or above
/// the target wins, so a 1.75x display gets the 2x source out of
/// {1x, 2x}, not the nearer-but-blurry 1x. Only a target above every
/// available density falls back, to the largest one. Zero and negative
/// targets land on the smallest tier for free, since every density is
/// positive.
///
/// `candidates` must be sorted ascending by density (the order
/// [`parse`](crate::parse) produces).
pub fn resolve(candidates: &[SrcCandidate], target: f64) -> Result<&str, NoCandidateError> {
    let largest = candidates.last().ok_or(NoCandidateError)?;
    let winner = candidates
        .iter()
        .find(|c| c.density >= target)
        .unwrap_or(largest);
    Ok(&winner.url)
}
