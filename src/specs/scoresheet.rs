// src/specs/scoresheet.rs

// One scoresheet page: a dated league sheet with one table row per game.
// Row layout: bowler name, ten frame cells, total score.

use std::time::Instant;

use chrono::NaiveDate;

use crate::core::{html, net};
use crate::error::{Error, Result};
use crate::params::FRAMES_PER_GAME;

const DATE_CLASS: &str = "scoredate";
const TABLE_CLASS: &str = "scoretable";
const ROW_CLASS: &str = "bowlerrow";
const CELLS_PER_ROW: usize = FRAMES_PER_GAME + 2;

/// One game row, still in sheet text form.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRow {
    pub bowler: String,
    pub frames: [String; FRAMES_PER_GAME],
    pub score: u32,
}

/// Everything one scoresheet URL yields.
#[derive(Clone, Debug)]
pub struct SheetBundle {
    pub date: NaiveDate,
    pub games: Vec<GameRow>,
}

pub fn fetch(url: &str) -> Result<SheetBundle> {
    let t = Instant::now();
    let doc = net::http_get(url)?;
    logd!("GET {} ({} bytes, {:?})", url, doc.len(), t.elapsed());
    parse_doc(&doc)
}

/// Parse a fetched scoresheet document.
///
/// The sheet date comes from the first element with the scoredate class;
/// its text may carry a weekday prefix, so each whitespace token is tried
/// as `MM/DD/YYYY` until one parses. No date is fatal: without it the
/// sheet cannot be placed in a season.
pub fn parse_doc(doc: &str) -> Result<SheetBundle> {
    let date_text = html::first_text_with_class(doc, DATE_CLASS).ok_or(Error::MissingDate)?;
    let date = date_text
        .split_whitespace()
        .find_map(|tok| NaiveDate::parse_from_str(tok, "%m/%d/%Y").ok())
        .ok_or(Error::MissingDate)?;

    let mut games = Vec::new();
    let mut pos = 0usize;
    while let Some((ts, te)) = html::next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[ts..te];
        pos = te;
        if !html::has_class(table, TABLE_CLASS) {
            continue;
        }

        let mut row_pos = 0usize;
        while let Some((rs, re)) = html::next_tag_block_ci(table, "<tr", "</tr>", row_pos) {
            let tr = &table[rs..re];
            row_pos = re;
            if !html::has_class(tr, ROW_CLASS) {
                continue;
            }

            let cells = html::cell_texts(tr);
            if cells.len() < CELLS_PER_ROW {
                logd!("skipping short row ({} cells)", cells.len());
                continue;
            }

            let mut frames: [String; FRAMES_PER_GAME] = Default::default();
            for (i, cell) in cells[1..=FRAMES_PER_GAME].iter().enumerate() {
                frames[i] = cell.clone();
            }
            // An unreadable total becomes 0 and the row is dropped later
            // by the minimum-score check.
            let score = cells[FRAMES_PER_GAME + 1].parse().unwrap_or(0);

            games.push(GameRow {
                bowler: cells[0].clone(),
                frames,
                score,
            });
        }
    }

    if games.is_empty() {
        return Err(Error::MalformedSheet("no bowler rows found"));
    }
    Ok(SheetBundle { date, games })
}
