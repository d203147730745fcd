// src/runner.rs
use std::{
    fs, thread,
    sync::{mpsc, Arc, atomic::{AtomicUsize, Ordering}},
};

use crate::{
    config::consts::MAX_WORKERS,
    config::options::{ExtractOptions, Input},
    core::HtmlPage,
    extract::Extractor,
    progress::Progress,
    record::HotelRecord,
};

/// Read, parse and extract one saved page.
pub fn process_input(input: &Input, extractor: &Extractor) -> Result<HotelRecord, String> {
    let html = fs::read_to_string(&input.path)
        .map_err(|e| format!("{}: {e}", input.path.display()))?;
    let page = match &input.base_url {
        Some(url) => HtmlPage::with_base_url(&html, url),
        None => HtmlPage::parse(&html),
    };
    Ok(HotelRecord::from_page(&page, extractor, &input.label()))
}

/// Per-input work run on the pool.
type Work = fn(&Input, &Extractor) -> Result<HotelRecord, String>;

/// Extract coordinates from every input. Records come back in input order;
/// unreadable inputs are reported through `progress` and left out.
pub fn run(
    opts: &ExtractOptions,
    progress: Option<&mut dyn Progress>,
) -> Vec<HotelRecord> {
    run_with(opts, progress, process_input)
}

/// Every input ends up as exactly one `item_done` or `item_failed`, including
/// inputs lost to a panicking worker.
fn run_with(
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
    work: Work,
) -> Vec<HotelRecord> {
    let total = opts.inputs.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }
    if total == 0 {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No input pages.");
            p.finish();
        }
        return Vec::new();
    }

    let extractor = Extractor::new(opts.region);
    logf!("Extracting from {total} pages with {} workers", opts.workers);

    // Concurrency
    type Done = (usize, Result<HotelRecord, String>);

    let inputs = Arc::new(opts.inputs.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Done>();

    let workers = opts.workers.clamp(1, MAX_WORKERS).min(total);

    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let inputs = Arc::clone(&inputs);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        handles.push(thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= inputs.len() {
                    break;
                }
                let result = work(&inputs[i], &extractor);
                if tx.send((i, result)).is_err() {
                    break;
                }
            }
        }));
    }
    drop(res_tx); // main thread is sole receiver now

    let mut reported = vec![false; total];
    let mut done: Vec<(usize, HotelRecord)> = Vec::with_capacity(total);
    for (i, result) in res_rx {
        reported[i] = true;
        let label = inputs[i].label();
        match result {
            Ok(rec) => {
                if !rec.has_coordinates() {
                    logf!("No coordinates for {label}");
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &label, rec.has_coordinates());
                }
                done.push((i, rec));
            }
            Err(msg) => {
                loge!("Page {i}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &label);
                    p.log(&msg);
                }
            }
        }
    }

    for handle in handles {
        if handle.join().is_err() {
            loge!("Worker thread panicked");
        }
    }
    for (i, _) in reported.iter().enumerate().filter(|(_, seen)| !**seen) {
        let label = inputs[i].label();
        loge!("Page {i}: lost to a panicked worker ({label})");
        if let Some(p) = progress.as_deref_mut() {
            p.item_failed(i, &label);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    done.sort_by_key(|(i, _)| *i);
    done.into_iter().map(|(_, rec)| rec).collect()
}
