// src/geo/mod.rs
//! Coordinate value types shared by every extraction strategy.

pub mod dms;

use std::fmt;
use std::str::FromStr;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Each axis also keeps its textual form: decimal sources keep the text they were
/// found as (`"39.68"`), converted sources are rendered with six decimals. Records
/// carry the text so that "no data" (empty) stays distinct from zero.
///
/// Only `from_degrees` and `from_text` build one, so every pair is range-checked.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatePair {
    pub latitude: f64,
    pub longitude: f64,
    lat_text: String,
    lon_text: String,
}

impl CoordinatePair {
    /// Build from already-converted degrees. `None` if either axis is out of range.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Option<Self> {
        if !in_range(latitude, longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            lat_text: format!("{latitude:.6}"),
            lon_text: format!("{longitude:.6}"),
        })
    }

    /// Build from two decimal strings as found in the page.
    pub fn from_text(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim();
        let lon = lon.trim();
        let latitude: f64 = lat.parse().ok()?;
        let longitude: f64 = lon.parse().ok()?;
        if !in_range(latitude, longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            lat_text: s!(lat),
            lon_text: s!(lon),
        })
    }

    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    pub fn lon_text(&self) -> &str {
        &self.lon_text
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat_text, self.lon_text)
    }
}

fn in_range(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Rectangular lat/lon envelope used to sanity-check loosely matched candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl RegionBounds {
    /// Corfu and its offshore islets.
    pub const CORFU: RegionBounds = RegionBounds {
        lat_min: 39.35,
        lat_max: 39.85,
        lon_min: 19.60,
        lon_max: 20.15,
    };

    pub fn contains(&self, pair: &CoordinatePair) -> bool {
        (self.lat_min..=self.lat_max).contains(&pair.latitude)
            && (self.lon_min..=self.lon_max).contains(&pair.longitude)
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self::CORFU
    }
}

/// Parses `lat_min,lat_max,lon_min,lon_max`.
impl FromStr for RegionBounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Invalid bounding box '{s}': {e}"))?;

        let [lat_min, lat_max, lon_min, lon_max] = parts[..] else {
            return Err(format!("Bounding box needs 4 values, got {}", parts.len()));
        };
        if !(lat_min < lat_max && lon_min < lon_max) {
            return Err(format!("Bounding box minimums must be below maximums: '{s}'"));
        }
        if !in_range(lat_min, lon_min) || !in_range(lat_max, lon_max) {
            return Err(format!("Bounding box out of range: '{s}'"));
        }
        Ok(Self { lat_min, lat_max, lon_min, lon_max })
    }
}

/// Which extraction strategy produced a pair. Declared in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DmsText,
    DmsElement,
    StructuredScript,
    MapEmbed,
    ScriptLiteral,
    DataAttribute,
    MetaTag,
    RegionFallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::DmsText => "dms_text",
            Strategy::DmsElement => "dms_element",
            Strategy::StructuredScript => "structured_script",
            Strategy::MapEmbed => "map_embed",
            Strategy::ScriptLiteral => "script_literal",
            Strategy::DataAttribute => "data_attribute",
            Strategy::MetaTag => "meta_tag",
            Strategy::RegionFallback => "region_fallback",
        }
    }

    /// Map embeds rely on URL conventions (one of them swaps the axes), script
    /// literals on variable naming, and the region fallback accepts any plausible
    /// pair in any script.
    pub fn confidence(&self) -> Confidence {
        match self {
            Strategy::DmsText | Strategy::DmsElement | Strategy::StructuredScript => Confidence::High,
            Strategy::MapEmbed
            | Strategy::ScriptLiteral
            | Strategy::DataAttribute
            | Strategy::MetaTag => Confidence::Medium,
            Strategy::RegionFallback => Confidence::Low,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
