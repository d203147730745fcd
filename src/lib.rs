// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod geo;
pub mod strategies;

pub mod csv;
pub mod extract;
pub mod file;
pub mod progress;
pub mod record;
pub mod runner;

pub use crate::core::{Attrs, HtmlPage, PageSource, Script};
pub use extract::{extract, Extractor, Located};
pub use geo::dms::dms_to_decimal;
pub use geo::{Confidence, CoordinatePair, RegionBounds, Strategy};
pub use record::HotelRecord;
