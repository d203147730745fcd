// src/extract.rs
// Ordered strategy table + the orchestrator walking it.

use crate::core::page::PageSource;
use crate::geo::{Confidence, CoordinatePair, RegionBounds, Strategy};
use crate::strategies::{data_attrs, dms_text, map_embed, meta_tags, region_fallback, scripts};

/// Uniform strategy signature. Only the region fallback reads the region.
pub type StrategyFn = fn(&dyn PageSource, &RegionBounds) -> Option<CoordinatePair>;

/// Trust order: structured data, then explicit map widgets, then heuristic scans.
/// JSON-LD sits above map-embed URLs, script literals below them; the blind region
/// scan is always last.
pub const PIPELINE: [(Strategy, StrategyFn); 8] = [
    (Strategy::DmsText, dms_text::from_visible_text),
    (Strategy::DmsElement, dms_text::from_labels),
    (Strategy::StructuredScript, scripts::from_json_ld),
    (Strategy::MapEmbed, map_embed::from_frames),
    (Strategy::ScriptLiteral, scripts::from_script_literals),
    (Strategy::DataAttribute, data_attrs::from_data_attrs),
    (Strategy::MetaTag, meta_tags::from_meta_tags),
    (Strategy::RegionFallback, region_fallback::from_region_scan),
];

/// A pair plus the strategy that found it.
#[derive(Clone, Debug, PartialEq)]
pub struct Located {
    pub pair: CoordinatePair,
    pub strategy: Strategy,
}

impl Located {
    pub fn confidence(&self) -> Confidence {
        self.strategy.confidence()
    }
}

/// Run the pipeline once: each strategy at most once, first hit wins.
pub fn extract(page: &dyn PageSource, region: &RegionBounds) -> Option<Located> {
    for (strategy, run) in PIPELINE {
        if let Some(pair) = run(page, region) {
            logd!("Coordinates via {strategy}: {pair}");
            return Some(Located { pair, strategy });
        }
    }
    logf!("No coordinates found");
    None
}

/// Holds the region so callers don't thread it through every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extractor {
    pub region: RegionBounds,
}

impl Extractor {
    pub fn new(region: RegionBounds) -> Self {
        Self { region }
    }

    pub fn extract(&self, page: &dyn PageSource) -> Option<Located> {
        extract(page, &self.region)
    }
}
