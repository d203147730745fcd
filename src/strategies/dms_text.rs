// src/strategies/dms_text.rs
// DMS caption scanning, e.g. `39°40'22.7"N 19°42'59.5"E` under a map widget.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::page::PageSource;
use crate::core::sanitize::preview;
use crate::geo::dms::{dms_to_decimal, DMS_TOKEN};
use crate::geo::{CoordinatePair, RegionBounds};

/// Latitude token (N|S), whitespace, longitude token (E|W).
static DMS_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({DMS_TOKEN}[NS])\s+({DMS_TOKEN}[EW])"))
        .expect("DMS pair regex should compile")
});

/// First convertible DMS pair in `text`, in source order.
pub fn find_dms_pair(text: &str) -> Option<CoordinatePair> {
    for caps in DMS_PAIR.captures_iter(text) {
        let (lat_s, lon_s) = (&caps[1], &caps[2]);
        let (Some(lat), Some(lon)) = (dms_to_decimal(lat_s), dms_to_decimal(lon_s)) else {
            logd!("DMS: discarding malformed pair '{lat_s}' '{lon_s}'");
            continue;
        };
        match CoordinatePair::from_degrees(lat, lon) {
            Some(pair) => return Some(pair),
            None => logd!("DMS: out of range pair '{lat_s}' '{lon_s}'"),
        }
    }
    None
}

/// Scan the whole visible text.
pub fn from_visible_text(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    let pair = find_dms_pair(&page.visible_text())?;
    logd!("DMS text hit: {pair}");
    Some(pair)
}

/// Scan coordinate-looking elements one by one. Catches pairs whose tokens sit in
/// sibling inline elements and therefore run together in the flat text.
pub fn from_labels(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    for label in page.coordinate_labels() {
        if let Some(pair) = find_dms_pair(&label) {
            logd!("DMS label hit: {pair} in '{}'", preview(&label, 80));
            return Some(pair);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HtmlPage;

    #[test]
    fn finds_first_pair_in_text() {
        let text = "GPS 39°40'22.7\"N 19°42'59.5\"E, ferry port 39°37'N";
        let p = find_dms_pair(text).unwrap();
        assert!((p.latitude - 39.672972).abs() < 1e-4);
        assert!((p.longitude - 19.716528).abs() < 1e-4);
        assert_eq!(p.lat_text(), "39.672972");
    }

    #[test]
    fn skips_malformed_candidate_and_keeps_scanning() {
        let text = "39°75'22.7\"N 19°42'59.5\"E then 39°40′22.7″N 19°42′59.5″E";
        let p = find_dms_pair(text).unwrap();
        assert!((p.latitude - 39.672972).abs() < 1e-4);
    }

    #[test]
    fn hemisphere_order_matters() {
        assert!(find_dms_pair("19°42'59.5\"E 39°40'22.7\"N").is_none());
        let south = find_dms_pair("33°51'54.5\"S 151°12'35.6\"E").unwrap();
        assert!(south.latitude < 0.0 && south.longitude > 0.0);
    }

    #[test]
    fn labels_recover_split_tokens() {
        let html = r#"<div class="map-info"><span>39°40'22.7"N</span><span>19°42'59.5"E</span></div>"#;
        let page = HtmlPage::parse(html);
        let region = RegionBounds::default();
        assert!(from_visible_text(&page, &region).is_none());
        let p = from_labels(&page, &region).unwrap();
        assert!((p.longitude - 19.716528).abs() < 1e-4);
    }
}
