//! Density-descriptor parsing

use crate::SrcCandidate;

/// Parse a `srcset`-style density descriptor into sorted candidates.
///
/// Entries are comma-separated; each entry is a URL optionally followed by
/// a `<number>x` density descriptor. An entry without a descriptor counts
/// as 1x, and so does an entry whose descriptor does not parse: a sloppy
/// author loses the density hint, not the image. When two entries claim
/// the same density the later declaration wins.
///
/// The result is sorted ascending by density with no duplicates. An empty
/// descriptor yields an empty list, which is a distinct state from a
/// single bare URL (one candidate at 1x).
pub fn parse(descriptor: &str) -> Vec<SrcCandidate> {
    let mut candidates: Vec<SrcCandidate> = Vec::new();

    for entry in descriptor.split(',') {
        let mut tokens = entry.split_whitespace();
        let Some(url) = tokens.next() else {
            continue;
        };
        let density = tokens.next_back().map_or(1.0, parse_density);

        match candidates.iter_mut().find(|c| c.density == density) {
            Some(existing) => existing.url = url.to_string(),
            None => candidates.push(SrcCandidate {
                density,
                url: url.to_string(),
            }),
        }
    }

    candidates.sort_by(|a, b| {
        a.density
            .partial_cmp(&b.density)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Parse a single `<number>x` descriptor token, best effort.
fn parse_density(token: &str) -> f64 {
    let number = token.strip_suffix('x').unwrap_or(token);
    match number.parse::<f64>() {
        Ok(density) if density > 0.0 && density.is_finite() => density,
        _ => 1.0,
    }
}
