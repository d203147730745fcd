// src/file.rs

use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExtractOptions, Input};
use crate::csv::records_to_string;
use crate::record::HotelRecord;

/// Render `records` in `format`.
pub fn render(records: &[HotelRecord], format: ExportFormat, include_headers: bool) -> Result<String, Box<dyn Error>> {
    match format.delimiter() {
        Some(sep) => Ok(records_to_string(records, include_headers, sep)),
        None => {
            let mut s = serde_json::to_string_pretty(records)?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write records to `path`, creating parent directories.
pub fn write_records(
    path: &Path,
    records: &[HotelRecord],
    format: ExportFormat,
    include_headers: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = render(records, format, include_headers)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Write to `opts.out`, or stdout when no path was given. Returns the path written, if any.
pub fn export(opts: &ExtractOptions, records: &[HotelRecord]) -> Result<Option<PathBuf>, Box<dyn Error>> {
    match &opts.out {
        Some(path) => {
            let path = if path.is_dir() || looks_like_dir_hint(path) {
                path.join(opts.default_file_name())
            } else {
                path.clone()
            };
            write_records(&path, records, opts.format, opts.include_headers).map(Some)
        }
        None => {
            let contents = render(records, opts.format, opts.include_headers)?;
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())?;
            lock.flush()?;
            Ok(None)
        }
    }
}

/// Load records back from a JSON export (e.g. to merge runs).
pub fn read_records_json(path: &Path) -> Result<Vec<HotelRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Expand CLI paths into inputs: files as given, directories to their
/// `*.html` / `*.htm` files sorted by name.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<Input>, Box<dyn Error>> {
    let mut out = Vec::new();
    for p in paths {
        if p.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(p)?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|f| f.is_file() && is_html(f))
                .collect();
            files.sort();
            out.extend(files.into_iter().map(Input::file));
        } else if p.is_file() {
            out.push(Input::file(p.clone()));
        } else {
            return Err(format!("No such file or directory: {}", p.display()).into());
        }
    }
    Ok(out)
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref(),
        Some("html") | Some("htm")
    )
}

pub fn ensure_directory(p: &Path) -> Result<(), Box<dyn Error>> {
    if p.exists() {
        if !p.is_dir() {
            return Err(format!("Path exists but is not a directory: {}", p.display()).into());
        }
        return Ok(());
    }
    fs::create_dir_all(p)?;
    Ok(())
}

/// Trailing separator means "directory", even if it doesn't exist yet.
pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
