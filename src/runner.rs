// src/runner.rs

// End-to-end pipeline: read the link list, fetch and parse every sheet,
// assemble the bowler hierarchy, export rows.

use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;

use crate::core::sanitize::sanitize_bowler_filename;
use crate::csv;
use crate::file;
use crate::model::{Bowler, Game, Season, Series};
use crate::params::{DEFAULT_MERGED_FILENAME, DEFAULT_OUT_DIR, Params};
use crate::report;
use crate::specs::scoresheet::{self, SheetBundle};

/// Run feedback hooks so a frontend can show activity. The library itself
/// stays quiet on stdout.
pub trait Progress {
    fn begin(&mut self, total: usize);
    fn log(&mut self, msg: &str);
    fn item_done(&mut self, url: &str);
    fn finish(&mut self);
}

pub struct NullProgress;

impl Progress for NullProgress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _url: &str) {}
    fn finish(&mut self) {}
}

pub struct RunSummary {
    pub bowlers: Vec<Bowler>,
    pub files_written: Vec<PathBuf>,
}

pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress = progress.unwrap_or(&mut null);

    if params.bowlers.is_empty() {
        return Err("no bowlers given; use --bowlers".into());
    }

    let urls = file::read_url_list(&params.urls_file)?;
    if urls.is_empty() {
        return Err(format!("no scoresheet urls in {}", params.urls_file.display()).into());
    }
    logf!("run start: {} urls, {} bowlers", urls.len(), params.bowlers.len());
    progress.begin(urls.len());

    // A dead link costs one sheet, not the run.
    let mut sheets = Vec::with_capacity(urls.len());
    for url in &urls {
        match scoresheet::fetch(url) {
            Ok(sheet) => sheets.push(sheet),
            Err(e) => {
                loge!("skipping {url}: {e}");
                progress.log(&format!("skipping {url}: {e}"));
            }
        }
        progress.item_done(url);
    }
    progress.finish();

    let bowlers = build_bowlers(&sheets, params)?;
    let files_written = export(&bowlers, params)?;

    if params.print {
        let headers = params.include_headers.then(report::headers);
        let mut rows = Vec::new();
        for bowler in &bowlers {
            rows.extend(report::rows_for(bowler, params.level));
        }
        print!("{}", csv::rows_to_string(&rows, &headers, params.format.as_char()));
    }

    logf!("run done: {} sheets, {} files", sheets.len(), files_written.len());
    Ok(RunSummary { bowlers, files_written })
}

/// Build one Bowler per requested name from the fetched sheets.
///
/// Sheets are filtered to the season window, then each sheet contributes
/// one series holding that bowler's valid games. A sheet where the bowler
/// never appears (or has no valid game) contributes nothing.
pub fn build_bowlers(
    sheets: &[SheetBundle],
    params: &Params,
) -> Result<Vec<Bowler>, Box<dyn Error>> {
    let mut bowlers = Vec::with_capacity(params.bowlers.len());

    for name in &params.bowlers {
        let mut season = Season::new(params.season_start, params.season_end);

        for sheet in sheets {
            if !season.contains(sheet.date) {
                continue;
            }
            let mut series = Series::new(sheet.date);
            for row in sheet.games.iter().filter(|r| &r.bowler == name) {
                if let Some(game) = Game::from_sheet_row(&row.frames, row.score)? {
                    series.add_game(game);
                }
            }
            if series.games().is_empty() {
                logd!("no games for {} on {}", name, sheet.date);
                continue;
            }
            season.add_series(series);
        }

        let mut bowler = Bowler::new(name);
        bowler.add_season(season);
        bowlers.push(bowler);
    }

    Ok(bowlers)
}

fn export(bowlers: &[Bowler], params: &Params) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let sep = params.format.as_char();
    let headers = params.include_headers.then(report::headers);
    let mut written = Vec::new();

    if params.per_bowler {
        let dir = params
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
        file::ensure_directory(&dir)?;

        let mut seen = HashMap::new();
        for bowler in bowlers {
            let stem = sanitize_bowler_filename(bowler.name());
            let path = file::resolve_bowler_filename(&dir, &stem, &mut seen, params.format.ext());
            let rows = report::rows_for(bowler, params.level);
            file::write_rows_start(&path, headers.as_deref(), sep)?;
            file::append_rows(&path, &rows, sep)?;
            written.push(path);
        }
    } else {
        let path = match &params.out {
            Some(p) if file::looks_like_dir_hint(p) => p.join(DEFAULT_MERGED_FILENAME),
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_MERGED_FILENAME),
        };
        let mut rows = Vec::new();
        for bowler in bowlers {
            rows.extend(report::rows_for(bowler, params.level));
        }
        file::write_rows_start(&path, headers.as_deref(), sep)?;
        file::append_rows(&path, &rows, sep)?;
        written.push(path);
    }

    Ok(written)
}
