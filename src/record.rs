// src/record.rs
use serde::{Deserialize, Serialize};

use crate::core::HtmlPage;
use crate::extract::{Extractor, Located};

/// One hotel row as written to `hotels.csv` / `hotels.json`.
/// Coordinates are strings: empty means "not found", which is not the same as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub detail_url: String,
    pub latitude: String,
    pub longitude: String,
    pub coord_source: String,
    pub confidence: String,
}

impl HotelRecord {
    pub const HEADERS: [&'static str; 6] =
        ["name", "detail_url", "latitude", "longitude", "coord_source", "confidence"];

    pub fn new(name: &str, detail_url: &str, located: Option<&Located>) -> Self {
        let mut rec = Self { name: s!(name), detail_url: s!(detail_url), ..Default::default() };
        if let Some(loc) = located {
            rec.latitude = s!(loc.pair.lat_text());
            rec.longitude = s!(loc.pair.lon_text());
            rec.coord_source = s!(loc.strategy.as_str());
            rec.confidence = s!(loc.confidence().as_str());
        }
        rec
    }

    /// Run `extractor` over `page` and assemble the row. `fallback_url` is used when
    /// the page carries no base URL (e.g. a saved file).
    pub fn from_page(page: &HtmlPage, extractor: &Extractor, fallback_url: &str) -> Self {
        let located = extractor.extract(page);
        let url = page.base_url().unwrap_or(fallback_url);
        Self::new(&page.heading(), url, located.as_ref())
    }

    pub fn has_coordinates(&self) -> bool {
        !self.latitude.is_empty() && !self.longitude.is_empty()
    }

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.detail_url.clone(),
            self.latitude.clone(),
            self.longitude.clone(),
            self.coord_source.clone(),
            self.confidence.clone(),
        ]
    }
}

/// Counts printed after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub with_coordinates: usize,
}

impl Summary {
    pub fn of(records: &[HotelRecord]) -> Self {
        Self {
            total: records.len(),
            with_coordinates: records.iter().filter(|r| r.has_coordinates()).count(),
        }
    }
}
