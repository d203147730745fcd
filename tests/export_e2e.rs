// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use hotel_geo::config::options::{ExportFormat, ExtractOptions};
use hotel_geo::file;
use hotel_geo::progress::NullProgress;
use hotel_geo::record::{HotelRecord, Summary};
use hotel_geo::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("hotel_geo_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<HotelRecord> {
    vec![
        HotelRecord {
            name: "Villa \"Rosa\", Kassiopi".into(),
            detail_url: "https://hotels.test/rosa".into(),
            latitude: "39.7876".into(),
            longitude: "19.9205".into(),
            coord_source: "map_embed".into(),
            confidence: "medium".into(),
        },
        HotelRecord { name: "Blank".into(), detail_url: "b.html".into(), ..Default::default() },
    ]
}

#[test]
fn directory_of_pages_to_csv() {
    let dir = tmp_dir("dir_csv");
    let pages = dir.join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(
        pages.join("b.html"),
        r#"<h1>Beach House</h1><iframe src="https://maps.example/?ll=39.51,19.91"></iframe>"#,
    ).unwrap();
    fs::write(pages.join("a.htm"), "<h1>Arches Inn</h1><p>No map here.</p>").unwrap();
    fs::write(pages.join("notes.txt"), "not a page").unwrap();

    let mut opts = ExtractOptions::default();
    opts.inputs = file::collect_inputs(&[pages.clone()]).unwrap();
    assert_eq!(opts.inputs.len(), 2);
    opts.out = Some(dir.join("out/"));
    opts.workers = 2;

    let records = runner::run(&opts, Some(&mut NullProgress));
    assert_eq!(Summary::of(&records), Summary { total: 2, with_coordinates: 1 });

    let written = file::export(&opts, &records).unwrap().unwrap();
    assert!(written.ends_with("hotels.csv"));
    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "name,detail_url,latitude,longitude,coord_source,confidence");
    assert!(lines[1].starts_with("Arches Inn,"));
    assert!(lines[1].ends_with(",,,,"));
    assert!(lines[2].starts_with("Beach House,"));
    assert!(lines[2].ends_with(",39.51,19.91,map_embed,medium"));
}

#[test]
fn json_export_reads_back() {
    let dir = tmp_dir("json");
    let path = dir.join("nested/hotels.json");
    let records = sample();
    file::write_records(&path, &records, ExportFormat::Json, true).unwrap();
    let back = file::read_records_json(&path).unwrap();
    assert_eq!(back, records);
}

#[test]
fn tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let path = dir.join("hotels.tsv");
    file::write_records(&path, &sample(), ExportFormat::Tsv, false).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let first = text.lines().next().unwrap();
    // Quotes still force quoting with a tab separator.
    assert!(first.starts_with("\"Villa \"\"Rosa\"\", Kassiopi\"\t"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tmp_dir("missing");
    assert!(file::collect_inputs(&[dir.join("nope.html")]).is_err());
}

#[test]
fn output_path_blocked_by_file() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("taken");
    fs::write(&blocker, "x").unwrap();
    let res = file::write_records(&blocker.join("hotels.csv"), &sample(), ExportFormat::Csv, true);
    assert!(res.is_err());
}
