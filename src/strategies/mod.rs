// src/strategies/mod.rs
//! # Coordinate extraction strategies
//!
//! Each strategy knows **one place where coordinates hide** in a hotel detail page and
//! how to read them out robustly. They all share the signature
//! `fn(&dyn PageSource, &RegionBounds) -> Option<CoordinatePair>` so the orchestrator
//! (`extract`) can walk them as a plain ordered table.
//!
//! ## What lives here
//! - **Pattern knowledge**: DMS captions, JSON-LD `GeoCoordinates`, map-embed URL
//!   conventions, script literals, data attributes, geo meta tags.
//! - **Local recovery**: a malformed candidate (bad JSON, minutes ≥ 60, latitude 123) is
//!   dropped and the scan moves on. Nothing in here returns an error.
//!
//! ## What does **not** live here
//! - **Ordering/trust ranking**: that's `extract::PIPELINE`.
//! - **Fetching, record assembly, export**: `runner`, `record`, `file`.
//!
//! ## Conventions & invariants
//! - First hit in **document order** wins inside a strategy; no context disambiguation.
//! - A pair is only returned when **both** axes parse and are in range
//!   (`CoordinatePair` enforces it).
//! - A captured number is never a slice of a longer one: `1039.61` does not yield
//!   `039.61` (`captured_pair` / `standalone`).
//! - Only `region_fallback` looks at the region; everyone else ignores it.
//! - Hits are logged at debug level with a short preview of where they came from.
pub mod data_attrs;
pub mod dms_text;
pub mod map_embed;
pub mod meta_tags;
pub mod region_fallback;
pub mod scripts;

use regex::{Captures, Match};

use crate::geo::CoordinatePair;

/// Signed decimal with up to three integer digits. Regexes built from it must run their
/// matches through `standalone`; `regex` has no look-around to anchor it.
pub(crate) const NUM: &str = r"-?\d{1,3}(?:\.\d+)?";

/// `m` is not cut out of a longer number: no digit right after it, and no digit or `.`
/// right before it when it opens the whole match. Inside a match the character before
/// belongs to the pattern (`%20`, `!3d`, `lat:`).
pub(crate) fn standalone(text: &str, whole: &Match<'_>, m: &Match<'_>) -> bool {
    let glued_before = m.start() == whole.start()
        && text[..m.start()].chars().next_back().is_some_and(|c| c.is_ascii_digit() || c == '.');
    let glued_after = text[m.end()..].chars().next().is_some_and(|c| c.is_ascii_digit());
    !glued_before && !glued_after
}

/// Groups `lat` and `lon` of `caps` as a pair, if both numbers stand alone and are in range.
pub(crate) fn captured_pair(text: &str, caps: &Captures<'_>, lat: usize, lon: usize) -> Option<CoordinatePair> {
    let (whole, lat, lon) = (caps.get(0)?, caps.get(lat)?, caps.get(lon)?);
    if !standalone(text, &whole, &lat) || !standalone(text, &whole, &lon) {
        return None;
    }
    CoordinatePair::from_text(lat.as_str(), lon.as_str())
}
