// src/params.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::csv::Delim;

pub const DEFAULT_URLS_FILE: &str = "score_links.txt";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_MERGED_FILENAME: &str = "bowling_stats.csv";

pub const FRAMES_PER_GAME: usize = 10;
pub const THROWS_PER_FRAME: usize = 3;

/// Games with a total below this are incomplete sheets, not real games.
pub const MIN_VALID_SCORE: u32 = 20;

/// Granularity of the exported statistics rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Bowler,
    Season,
    Series,
    Game,
}

#[derive(Clone)]
pub struct Params {
    pub urls_file: PathBuf,          // scoresheet link list, one URL per line
    pub bowlers: Vec<String>,        // names exactly as they appear on the sheets
    pub season_start: NaiveDate,     // window start (exclusive)
    pub season_end: NaiveDate,       // window end (exclusive)
    pub level: Level,                // row granularity for export
    pub out: Option<PathBuf>,        // output path (dir for per-bowler, file for merged)
    pub per_bowler: bool,            // one file per bowler vs merged single
    pub include_headers: bool,       // include header row in CSV/TSV
    pub print: bool,                 // echo rows to stdout as well
    pub format: Delim,
}

impl Params {
    pub fn new() -> Self {
        Self {
            urls_file: PathBuf::from(DEFAULT_URLS_FILE),
            bowlers: Vec::new(),
            // Open window by default; CLI narrows it with --start/--end.
            season_start: NaiveDate::MIN,
            season_end: NaiveDate::MAX,
            level: Level::Bowler,
            out: None,
            per_bowler: false,
            include_headers: false,
            print: false,
            format: Delim::Csv,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
