// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::geo::RegionBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; `None` for non-tabular formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// One saved page to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    pub path: PathBuf,
    /// URL the page was saved from; recorded as the hotel's detail URL.
    pub base_url: Option<String>,
}

impl Input {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), base_url: None }
    }

    /// What to call this page in logs and records.
    pub fn label(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractOptions {
    pub region: RegionBounds,
    pub inputs: Vec<Input>,
    /// `None` prints to stdout.
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub workers: usize,
    pub log_file: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            region: RegionBounds::default(),
            inputs: Vec::new(),
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
            workers: WORKERS,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl ExtractOptions {
    /// `hotels.<ext>` for the selected format.
    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }

    /// Default output location: `out/hotels.<ext>`.
    pub fn default_out_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(self.default_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_and_paths() {
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::Json.delimiter(), None);

        let opts = ExtractOptions { format: ExportFormat::Tsv, ..Default::default() };
        assert_eq!(opts.default_out_path(), PathBuf::from("out").join("hotels.tsv"));
    }

    #[test]
    fn input_label_prefers_url() {
        let mut input = Input::file("pages/a.html");
        assert_eq!(input.label(), "pages/a.html");
        input.base_url = Some(s!("https://h.test/a"));
        assert_eq!(input.label(), "https://h.test/a");
    }
}
