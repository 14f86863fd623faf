// src/cli.rs

// Argument handling and the terminal frontend around the runner.

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::csv::Delim;
use crate::params::{Level, Params};
use crate::runner::{self, Progress};

const HELP: &str = include_str!("cli_help.txt");

pub enum Action {
    Run(Params),
    Help,
}

/// Parse command-line arguments into run parameters.
pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Action, Box<dyn Error>> {
    let mut params = Params::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--urls" => params.urls_file = PathBuf::from(want(&mut args, &arg)?),
            "--bowlers" => {
                params.bowlers = want(&mut args, &arg)?
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            "--start" => params.season_start = parse_date(&want(&mut args, &arg)?)?,
            "--end" => params.season_end = parse_date(&want(&mut args, &arg)?)?,
            "--level" => {
                params.level = match want(&mut args, &arg)?.as_str() {
                    "bowler" => Level::Bowler,
                    "season" => Level::Season,
                    "series" => Level::Series,
                    "game" => Level::Game,
                    other => return Err(format!("unknown level: {other}").into()),
                };
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(want(&mut args, &arg)?)),
            "--format" => {
                params.format = match want(&mut args, &arg)?.as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("unknown format: {other}").into()),
                };
            }
            "--per-bowler" => params.per_bowler = true,
            "--include-headers" => params.include_headers = true,
            "--print" => params.print = true,
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    Ok(Action::Run(params))
}

fn want<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>> {
    args.next().ok_or_else(|| format!("{flag} needs a value").into())
}

fn parse_date(s: &str) -> crate::error::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} scoresheets...");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }

    fn item_done(&mut self, url: &str) {
        self.done += 1;
        eprintln!("  [{}/{}] {url}", self.done, self.total);
    }

    fn finish(&mut self) {
        eprintln!("Done.");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(std::env::args().skip(1))? {
        Action::Help => {
            println!("{HELP}");
            Ok(())
        }
        Action::Run(params) => {
            let mut progress = CliProgress { done: 0, total: 0 };
            let summary = runner::run(&params, Some(&mut progress))?;
            for path in &summary.files_written {
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}
