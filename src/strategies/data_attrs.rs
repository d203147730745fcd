// src/strategies/data_attrs.rs
// Map containers that carry their coordinates as `data-*` attributes.

use serde_json::Value;

use crate::core::page::PageSource;
use crate::geo::{CoordinatePair, RegionBounds};

/// Two co-located attributes, latitude first.
const PAIRED: [(&str, &str); 3] = [
    ("data-lat", "data-lng"),
    ("data-latitude", "data-longitude"),
    ("data-lat", "data-lon"),
];

/// One attribute holding both axes, as `[lat, lon]` JSON or `lat,lon`.
const COMBINED: [&str; 6] = [
    "data-coords",
    "data-coordinates",
    "data-latlng",
    "data-center",
    "data-location",
    "data-position",
];

pub fn from_data_attrs(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    for (lat_attr, lon_attr) in PAIRED {
        for el in page.elements_with_attr(lat_attr) {
            let (Some(lat), Some(lon)) = (el.get(lat_attr), el.get(lon_attr)) else { continue };
            match CoordinatePair::from_text(lat, lon) {
                Some(pair) => {
                    logd!("Data attrs hit: {lat_attr}/{lon_attr} = {pair}");
                    return Some(pair);
                }
                None => logd!("Data attrs: skipping {lat_attr}='{lat}' {lon_attr}='{lon}'"),
            }
        }
    }

    for attr in COMBINED {
        for el in page.elements_with_attr(attr) {
            let Some(raw) = el.get(attr) else { continue };
            match parse_combined(raw) {
                Some(pair) => {
                    logd!("Data attrs hit: {attr} = {pair}");
                    return Some(pair);
                }
                None => logd!("Data attrs: skipping {attr}='{raw}'"),
            }
        }
    }
    None
}

/// `[39.6, 19.9]`, `["39.6","19.9"]` or `39.6, 19.9`.
pub fn parse_combined(raw: &str) -> Option<CoordinatePair> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) else { return None };
        let [lat, lon] = items.as_slice() else { return None };
        return CoordinatePair::from_text(&number_text(lat)?, &number_text(lon)?);
    }
    let (lat, lon) = raw.split_once(',')?;
    CoordinatePair::from_text(lat, lon)
}

fn number_text(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s!(s.trim())),
        _ => None,
    }
}
