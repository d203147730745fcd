// src/strategies/scripts.rs
// Inline scripts, in two passes of different trust: JSON-LD `GeoCoordinates`
// (`from_json_ld`), and map-widget literals / loose lat-lng keys (`from_script_literals`).

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::{captured_pair, standalone, NUM};
use crate::core::page::{PageSource, Script};
use crate::geo::{CoordinatePair, RegionBounds};

const GEO_MARKER: &str = "GeoCoordinates";

/// `center: [39.6, 19.9]` (also `"center" = [..]`).
static CENTER_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"center["']?\s*[:=]\s*\[\s*({NUM})\s*,\s*({NUM})\s*\]"#))
        .expect("center regex should compile")
});

/// `new google.maps.LatLng(39.6, 19.9)`, `L.latLng(39.6, 19.9)`.
static LATLNG_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\blatlng\(\s*({NUM})\s*,\s*({NUM})\s*\)"))
        .expect("LatLng regex should compile")
});

static LAT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"(?i)\b(?:lat|latitude)["']?\s*[:=]\s*["']?({NUM})"#))
        .expect("lat key regex should compile")
});

static LNG_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"(?i)\b(?:lng|lon|long|longitude)["']?\s*[:=]\s*["']?({NUM})"#))
        .expect("lng key regex should compile")
});

/// First `application/ld+json` block with a usable `GeoCoordinates` node.
pub fn from_json_ld(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    for (i, script) in page.scripts().iter().enumerate() {
        if !script.is_json_ld() || !script.body.contains(GEO_MARKER) {
            continue;
        }
        if let Some(pair) = json_ld_geo(&script.body) {
            logd!("Script #{i} hit via JSON-LD: {pair}");
            return Some(pair);
        }
    }
    None
}

/// Map-widget literals and lat/lng keys in any script, JSON-LD blocks included
/// (a block that fails to parse as JSON still gets this pass).
pub fn from_script_literals(page: &dyn PageSource, _region: &RegionBounds) -> Option<CoordinatePair> {
    for (i, script) in page.scripts().iter().enumerate() {
        if let Some((rule, pair)) = scan_literals(script) {
            logd!("Script #{i} hit via {rule}: {pair}");
            return Some(pair);
        }
    }
    None
}

/// Rules in priority order against a single block.
fn scan_literals(script: &Script) -> Option<(&'static str, CoordinatePair)> {
    let body = script.body.as_str();
    if let Some(pair) = first_pair(&CENTER_ARRAY, body) {
        return Some(("center array", pair));
    }
    if let Some(pair) = first_pair(&LATLNG_CALL, body) {
        return Some(("LatLng call", pair));
    }
    key_values(body).map(|pair| ("lat/lng keys", pair))
}

fn first_pair(re: &Regex, body: &str) -> Option<CoordinatePair> {
    re.captures_iter(body)
        .find_map(|caps| captured_pair(body, &caps, 1, 2))
}

/// Both keys must appear in the same block. Each axis takes its first usable value.
fn key_values(body: &str) -> Option<CoordinatePair> {
    let lat = first_axis(&LAT_KEY, body, 90.0)?;
    let lon = first_axis(&LNG_KEY, body, 180.0)?;
    CoordinatePair::from_text(lat, lon)
}

fn first_axis<'a>(re: &Regex, body: &'a str, limit: f64) -> Option<&'a str> {
    re.captures_iter(body).find_map(|caps| {
        let (whole, m) = (caps.get(0)?, caps.get(1)?);
        let v: f64 = m.as_str().parse().ok()?;
        (standalone(body, &whole, &m) && v.abs() <= limit).then_some(m.as_str())
    })
}

/// Parse a JSON-LD body and pull the shallowest `GeoCoordinates` node out of it.
pub fn json_ld_geo(body: &str) -> Option<CoordinatePair> {
    match serde_json::from_str::<Value>(body.trim()) {
        Ok(value) => find_geo(&value),
        Err(e) => {
            logd!("JSON-LD: unparseable block ({e})");
            None
        }
    }
}

fn is_geo_node(obj: &Map<String, Value>) -> bool {
    match obj.get("@type") {
        Some(Value::String(t)) => t == GEO_MARKER,
        Some(Value::Array(ts)) => ts.iter().any(|t| t.as_str() == Some(GEO_MARKER)),
        _ => false,
    }
}

/// Breadth-first through objects, arrays and `@graph`, keys in document order. The
/// entity's own `geo` is found before the `geo` of a `containedInPlace` region.
fn find_geo(root: &Value) -> Option<CoordinatePair> {
    let mut queue = VecDeque::from([root]);
    while let Some(value) = queue.pop_front() {
        match value {
            Value::Object(obj) => {
                if is_geo_node(obj) {
                    if let Some(pair) = geo_node_pair(obj) {
                        return Some(pair);
                    }
                }
                queue.extend(obj.values());
            }
            Value::Array(items) => queue.extend(items),
            _ => {}
        }
    }
    None
}

fn geo_node_pair(obj: &Map<String, Value>) -> Option<CoordinatePair> {
    let lat = axis_text(obj.get("latitude")?)?;
    let lon = axis_text(obj.get("longitude")?)?;
    CoordinatePair::from_text(&lat, &lon)
}

/// JSON-LD publishers use both `39.6` and `"39.6"`.
fn axis_text(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s!(s.trim())),
        _ => None,
    }
}
