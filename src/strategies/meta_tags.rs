// src/strategies/meta_tags.rs
// Geo meta tags: geo.position, ICBM, place:location:latitude/longitude.

use std::sync::LazyLock;

use regex::Regex;

use super::{captured_pair, NUM};
use crate::core::page::{Attrs, PageSource};
use crate::geo::{CoordinatePair, RegionBounds};

static CONTENT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NUM})\s*[,;]\s*({NUM})")).expect("meta content regex should compile")
});

/// `property` wins over `name`, lowercased.
fn meta_key(meta: &Attrs) -> Option<String> {
    meta.get("property")
        .or_else(|| meta.get("name"))
        .map(|k| k.trim().to_ascii_lowercase())
}

fn is_geo_key(key: &str) -> bool {
    key.contains("geo") || key.contains("location") || key == "icbm"
}

pub fn from_meta_tags(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    let metas = page.metas();

    for meta in &metas {
        let (Some(key), Some(content)) = (meta_key(meta), meta.get("content")) else { continue };
        if !is_geo_key(&key) {
            continue;
        }
        let found = CONTENT_PAIR
            .captures_iter(content)
            .find_map(|caps| captured_pair(content, &caps, 1, 2));
        if let Some(pair) = found {
            logd!("Meta hit: {key} = {pair}");
            return Some(pair);
        }
    }

    // Split form: one tag per axis.
    let mut lat: Option<&str> = None;
    let mut lon: Option<&str> = None;
    for meta in &metas {
        let (Some(key), Some(content)) = (meta_key(meta), meta.get("content")) else { continue };
        if key.ends_with(":latitude") && lat.is_none() {
            lat = Some(content);
        } else if key.ends_with(":longitude") && lon.is_none() {
            lon = Some(content);
        }
    }
    let pair = CoordinatePair::from_text(lat?, lon?)?;
    logd!("Meta hit: split latitude/longitude = {pair}");
    Some(pair)
}
