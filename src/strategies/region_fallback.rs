// src/strategies/region_fallback.rs
// Last resort, low confidence: any decimal pair in any script that lands inside
// the configured region. Can pick up a neighbouring hotel, a town centre or a
// map default if one appears first; callers see `Confidence::Low` for it.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::page::PageSource;
use crate::geo::{CoordinatePair, RegionBounds};

/// Decimals only; bare integers are too often ids and zoom levels.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\b\d{1,3}\.\d+\b").expect("decimal regex should compile")
});

/// First neighbouring pair of decimals in `text`, separated by commas and/or
/// whitespace only, that falls inside `region`. Pairs overlap: in `1.5, 39.6, 19.9`
/// both `(1.5, 39.6)` and `(39.6, 19.9)` are candidates.
pub fn find_in_region(text: &str, region: &RegionBounds) -> Option<CoordinatePair> {
    let nums: Vec<_> = DECIMAL.find_iter(text).collect();
    for w in nums.windows(2) {
        let (a, b) = (w[0], w[1]);
        let gap = &text[a.end()..b.start()];
        if gap.is_empty() || !gap.chars().all(|c| c == ',' || c.is_whitespace()) {
            continue;
        }
        let Some(pair) = CoordinatePair::from_text(a.as_str(), b.as_str()) else { continue };
        if region.contains(&pair) {
            return Some(pair);
        }
    }
    None
}

pub fn from_region_scan(page: &dyn PageSource, region: &RegionBounds) -> Option<CoordinatePair> {
    for script in page.scripts() {
        if let Some(pair) = find_in_region(&script.body, region) {
            logd!("Region fallback hit: {pair}");
            return Some(pair);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORFU: RegionBounds = RegionBounds::CORFU;

    #[test]
    fn picks_first_pair_inside_box() {
        let text = "init(48.8566, 2.3522); markers = [[39.6243, 19.9217], [39.70, 19.70]]";
        let p = find_in_region(text, &CORFU).unwrap();
        assert_eq!((p.lat_text(), p.lon_text()), ("39.6243", "19.9217"));
    }

    #[test]
    fn overlapping_windows() {
        let p = find_in_region("zoom 1.5, 39.61 19.92", &CORFU).unwrap();
        assert_eq!(p.lat_text(), "39.61");
    }

    #[test]
    fn other_separators_break_a_pair() {
        assert!(find_in_region("39.61; 19.92", &CORFU).is_none());
        assert!(find_in_region("39.61 / 19.92", &CORFU).is_none());
    }

    #[test]
    fn outside_box_is_ignored() {
        assert!(find_in_region("var home = [48.8566, 2.3522];", &CORFU).is_none());
    }

    #[test]
    fn injected_region_is_respected() {
        let paris = RegionBounds { lat_min: 48.0, lat_max: 49.5, lon_min: 1.5, lon_max: 3.5 };
        let p = find_in_region("var home = [48.8566, 2.3522];", &paris).unwrap();
        assert_eq!(p.lon_text(), "2.3522");
    }
}
