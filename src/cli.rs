// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{ExportFormat, ExtractOptions};
use crate::config::consts::MAX_WORKERS;
use crate::geo::RegionBounds;
use crate::progress::Progress;
use crate::record::Summary;
use crate::{file, runner};

pub enum Command {
    Run(CliArgs),
    Help,
}

pub struct CliArgs {
    pub opts: ExtractOptions,
    /// Files or directories of saved pages, as given.
    pub paths: Vec<PathBuf>,
    /// Only valid with a single input file.
    pub base_url: Option<String>,
}

/// Progress on stderr so stdout stays clean for the export.
struct StderrProgress {
    total: usize,
    seen: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _index: usize, label: &str, found: bool) {
        self.seen += 1;
        let mark = if found { "ok" } else { "--" };
        eprintln!("[{}/{}] {mark} {label}", self.seen, self.total);
    }
    fn item_failed(&mut self, _index: usize, label: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] !! {label}", self.seen, self.total);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let CliArgs { mut opts, paths, base_url } = args;
    crate::log::init(&opts.log_file);

    opts.inputs = file::collect_inputs(&paths)?;
    if let Some(url) = base_url {
        match opts.inputs.as_mut_slice() {
            [only] => only.base_url = Some(url),
            _ => return Err("--base-url needs exactly one input file".into()),
        }
    }
    logf!("Run: {} inputs, region {:?}", opts.inputs.len(), opts.region);

    let mut progress = StderrProgress { total: 0, seen: 0 };
    let records = runner::run(&opts, Some(&mut progress));

    if let Some(path) = file::export(&opts, &records)? {
        eprintln!("Wrote {}", path.display());
    }

    let summary = Summary::of(&records);
    eprintln!("Hotels: {}  with coordinates: {}", summary.total, summary.with_coordinates);
    logf!("Done: {}/{} with coordinates", summary.with_coordinates, summary.total);
    Ok(())
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Command, Box<dyn Error>> {
    let mut opts = ExtractOptions::default();
    let mut paths = Vec::new();
    let mut base_url = None;
    let mut save = false;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--bbox" => {
                let v = args.next().ok_or("Missing value for --bbox")?;
                opts.region = v.parse::<RegionBounds>()?;}
            "--base-url" => base_url = Some(args.next().ok_or("Missing value for --base-url")?),
            "-o" | "--out" => opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--save" => save = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;}
            "--no-headers" => opts.include_headers = false,
            "-j" | "--jobs" => {
                let v: usize = args.next().ok_or("Missing value for --jobs")?.parse()?;
                if v == 0 || v > MAX_WORKERS {
                    return Err(format!("Jobs out of range (1..{})", MAX_WORKERS).into());
                }
                opts.workers = v;}
            "--log" => opts.log_file = PathBuf::from(args.next().ok_or("Missing log path")?),
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("Unknown arg: {}", a).into()),
            _ => paths.push(PathBuf::from(&a)),
        }
    }

    if paths.is_empty() {
        return Err("No input pages given (try --help)".into());
    }
    // Resolved last so `--format` may come after `--save`.
    if save && opts.out.is_none() {
        opts.out = Some(opts.default_out_path());
    }
    Ok(Command::Run(CliArgs { opts, paths, base_url }))
}
