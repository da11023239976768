//! Comprehensive tests for picofill-srcset
//!
//! Realistic descriptor strings end-to-end through parse + resolve.

use picofill_srcset::{NoCandidateError, parse, resolve};

#[test]
fn test_three_tier_icon_descriptor() {
    let candidates = parse("4x4.gif, 8x8.gif 2x, 12x12.gif 3x");

    assert_eq!(resolve(&candidates, 1.0), Ok("4x4.gif"));
    assert_eq!(resolve(&candidates, 2.0), Ok("8x8.gif"));
    // A 2.5x display snaps up to the 3x asset.
    assert_eq!(resolve(&candidates, 2.5), Ok("12x12.gif"));
}

#[test]
fn test_sort_invariant_holds_for_messy_input() {
    let candidates = parse("z.png 2.5x, a.png 0.5x, m.png, m2.png 1.5x, z2.png 2.5x");

    let densities: Vec<_> = candidates.iter().map(|c| c.density).collect();
    let mut sorted = densities.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(densities, sorted);

    for pair in densities.windows(2) {
        assert!(pair[0] < pair[1], "duplicate density survived: {pair:?}");
    }
}

#[test]
fn test_bare_url_is_not_no_srcset() {
    // One bare URL parses to a single 1x candidate...
    let one = parse("a.gif");
    assert_eq!(resolve(&one, 2.0), Ok("a.gif"));

    // ...while an absent descriptor is an empty list, which refuses to
    // resolve. Callers treat these states differently.
    let none = parse("");
    assert_eq!(resolve(&none, 2.0), Err(NoCandidateError));
}

#[test]
fn test_query_string_urls_survive() {
    let candidates = parse("img.php?id=7&size=s, img.php?id=7&size=l 2x");
    assert_eq!(resolve(&candidates, 2.0), Ok("img.php?id=7&size=l"));
}
