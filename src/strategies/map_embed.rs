// src/strategies/map_embed.rs
// Coordinates encoded in embedded map URLs (Google Maps and look-alikes).

use std::sync::LazyLock;

use regex::Regex;

use super::{captured_pair, NUM};
use crate::core::page::PageSource;
use crate::core::sanitize::preview;
use crate::geo::{CoordinatePair, RegionBounds};

/// How a URL convention orders its two numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    LatLon,
    LonLat,
}

struct UrlPattern {
    name: &'static str,
    re: Regex,
    order: Order,
}

/// Comma between the two numbers, raw or percent-encoded, optionally followed by a space.
const SEP: &str = r"(?:,|%2[cC])(?:\s|%20|\+)*";

/// Conventions in priority order.
static PATTERNS: LazyLock<Vec<UrlPattern>> = LazyLock::new(|| {
    let pat = |name, src: String, order| UrlPattern {
        name,
        re: Regex::new(&src).expect("map URL regex should compile"),
        order,
    };
    vec![
        pat("q", format!(r"[?&]q=({NUM}){SEP}({NUM})"), Order::LatLon),
        // `pb=` path segments: !2d<lon>!3d<lat>
        pat("pb", format!(r"!2d({NUM})!3d({NUM})"), Order::LonLat),
        pat("center", format!(r"[?&]center=({NUM}){SEP}({NUM})"), Order::LatLon),
        pat("ll", format!(r"[?&]ll=({NUM}){SEP}({NUM})"), Order::LatLon),
        pat("at", format!(r"@({NUM}),({NUM})"), Order::LatLon),
    ]
});

/// First convention match in a single frame URL.
pub fn parse_map_url(src: &str) -> Option<CoordinatePair> {
    for p in PATTERNS.iter() {
        for caps in p.re.captures_iter(src) {
            let pair = match p.order {
                Order::LatLon => captured_pair(src, &caps, 1, 2),
                Order::LonLat => captured_pair(src, &caps, 2, 1),
            };
            if let Some(pair) = pair {
                logd!("Map embed '{}' match: {pair}", p.name);
                return Some(pair);
            }
        }
    }
    None
}

pub fn from_frames(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    for src in page.frame_sources() {
        if let Some(pair) = parse_map_url(&src) {
            logd!("Map embed hit in '{}'", preview(&src, 100));
            return Some(pair);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HtmlPage;

    fn texts(p: CoordinatePair) -> (String, String) {
        (s!(p.lat_text()), s!(p.lon_text()))
    }

    #[test]
    fn query_convention_keeps_text() {
        let p = parse_map_url("https://maps.google.com/maps?hl=en&q=39.68,19.70&z=14&output=embed").unwrap();
        assert_eq!(texts(p), (s!("39.68"), s!("19.70")));
        let p = parse_map_url("https://www.google.com/maps?q=39.68%2C%2019.70").unwrap();
        assert_eq!(texts(p), (s!("39.68"), s!("19.70")));
    }

    #[test]
    fn pb_segments_are_swapped() {
        let src = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3000!2d19.7165!3d39.6729!2m3!1f0";
        let p = parse_map_url(src).unwrap();
        assert_eq!(texts(p), (s!("39.6729"), s!("19.7165")));
    }

    #[test]
    fn center_ll_and_at_conventions() {
        let c = parse_map_url("https://maps.example/static?center=39.5,19.9&zoom=12").unwrap();
        assert_eq!(texts(c), (s!("39.5"), s!("19.9")));
        let l = parse_map_url("https://maps.example/?ll=39.51,19.91&spn=0.1").unwrap();
        assert_eq!(texts(l), (s!("39.51"), s!("19.91")));
        let a = parse_map_url("https://www.google.com/maps/place/X/@39.6243,19.9217,15z").unwrap();
        assert_eq!(texts(a), (s!("39.6243"), s!("19.9217")));
    }

    #[test]
    fn query_outranks_later_conventions_in_same_url() {
        let p = parse_map_url("https://maps.example/@10.0,10.0?q=39.68,19.70").unwrap();
        assert_eq!(p.lat_text(), "39.68");
    }

    #[test]
    fn invalid_values_fall_through() {
        assert!(parse_map_url("https://maps.example/?q=123.4,19.7").is_none());
        assert!(parse_map_url("https://maps.example/?q=39.68,19.7012345678&z=3").is_some());
        assert!(parse_map_url("https://maps.example/@39.68,1970.5,15z").is_none());
        assert!(parse_map_url("https://maps.example/?q=Corfu+Town").is_none());
    }

    #[test]
    fn frames_scanned_in_order() {
        let html = r#"
            <iframe src="https://www.youtube.com/embed/xyz"></iframe>
            <iframe data-src="https://maps.google.com/?q=39.68,19.70"></iframe>
            <iframe src="https://maps.google.com/?q=39.10,19.10"></iframe>"#;
        let page = HtmlPage::parse(html);
        let p = from_frames(&page, &RegionBounds::default()).unwrap();
        assert_eq!(p.lat_text(), "39.68");
    }
}
