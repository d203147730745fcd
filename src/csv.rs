// src/csv.rs
use std::io::{self, Write};

use crate::record::HotelRecord;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Render records as one CSV/TSV string.
pub fn records_to_string(records: &[HotelRecord], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &HotelRecord::headers(), sep);
    }
    for r in records {
        let _ = write_row(&mut buf, &r.to_row(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("Hotel \"Blue\", Corfu"), s!("39.6"), s!("")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Hotel \"\"Blue\"\", Corfu\",39.6,\n");
    }

    #[test]
    fn header_line_is_optional() {
        let recs = vec![HotelRecord { name: s!("A"), ..Default::default() }];
        let with = records_to_string(&recs, true, ',');
        assert!(with.starts_with("name,detail_url,latitude,longitude,coord_source,confidence\n"));
        let without = records_to_string(&recs, false, '\t');
        assert_eq!(without, "A\t\t\t\t\t\n");
    }
}
