//! Viewport-width media evaluation

use crate::MediaEvaluator;

/// Evaluates `(min-width: Npx)` / `(max-width: Npx)` conditions against a
/// fixed viewport width.
///
/// Conditions it cannot understand are treated as matching, so an
/// unsupported-but-valid author query degrades to "source applies"
/// instead of hiding the image.
#[derive(Debug, Clone, Copy)]
pub struct ViewportMedia {
    width: u32,
}

impl ViewportMedia {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl MediaEvaluator for ViewportMedia {
    fn matches(&self, query: &str) -> bool {
        if let Some(max_width) = parse_px_bound(query, "max-width") {
            return self.width <= max_width;
        }
        if let Some(min_width) = parse_px_bound(query, "min-width") {
            return self.width >= min_width;
        }
        tracing::debug!("unrecognized media condition, treating as match: {}", query);
        true
    }
}

/// Extract the pixel bound of a single `(feature: Npx)` condition.
fn parse_px_bound(condition: &str, feature: &str) -> Option<u32> {
    if !condition.contains(feature) {
        return None;
    }
    let start = condition.find(':')?;
    let end = condition.rfind("px")?;
    condition.get(start + 1..end)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_width_bound() {
        let narrow = ViewportMedia::new(480);
        let wide = ViewportMedia::new(1280);
        assert!(narrow.matches("(max-width: 600px)"));
        assert!(!wide.matches("(max-width: 600px)"));
    }

    #[test]
    fn test_min_width_bound() {
        let narrow = ViewportMedia::new(480);
        let wide = ViewportMedia::new(1280);
        assert!(!narrow.matches("(min-width: 1024px)"));
        assert!(wide.matches("(min-width: 1024px)"));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let exact = ViewportMedia::new(600);
        assert!(exact.matches("(max-width: 600px)"));
        assert!(exact.matches("(min-width: 600px)"));
    }

    #[test]
    fn test_unknown_condition_matches() {
        let viewport = ViewportMedia::new(800);
        assert!(viewport.matches("(orientation: landscape)"));
        assert!(viewport.matches("print"));
    }
}
