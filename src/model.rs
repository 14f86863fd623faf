// src/model.rs

// Containment hierarchy: Game → Series → Season → Bowler. A game is
// classified once at construction and immutable after; every aggregate
// above it is rebuilt in full (reset + re-sum) when a child is appended.

use chrono::NaiveDate;

use crate::error::Result;
use crate::frame::parse_frame;
use crate::params::{FRAMES_PER_GAME, MIN_VALID_SCORE, THROWS_PER_FRAME};
use crate::stats::Statistics;

/// 3 throw slots × 10 frames. Slot 3 is only ever filled for frame 10.
/// A frame that was never bowled has `None` in its first slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThrowMatrix {
    slots: [[Option<u8>; THROWS_PER_FRAME]; FRAMES_PER_GAME],
}

impl ThrowMatrix {
    pub fn frame(&self, idx: usize) -> [Option<u8>; THROWS_PER_FRAME] {
        self.slots[idx]
    }

    pub fn set(&mut self, frame: usize, throw: usize, pins: u8) {
        self.slots[frame][throw] = Some(pins);
    }

    pub fn bowled_frames(&self) -> usize {
        self.slots.iter().filter(|f| f[0].is_some()).count()
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    matrix: ThrowMatrix,
    score: u32,
    stats: Statistics,
}

impl Game {
    /// Build a game from its ten frame cells plus the sheet's total score.
    ///
    /// Returns `Ok(None)` when the row is not a usable game: total below
    /// [`MIN_VALID_SCORE`], or no frame-1 data at all. Such rows are simply
    /// not games and never enter a series. Unreadable frame tokens are
    /// errors and propagate.
    pub fn from_sheet_row(frames: &[String; FRAMES_PER_GAME], score: u32) -> Result<Option<Game>> {
        if score < MIN_VALID_SCORE {
            return Ok(None);
        }

        let mut matrix = ThrowMatrix::default();
        for (idx, cell) in frames.iter().enumerate() {
            let Some(values) = parse_frame(cell)? else {
                if idx == 0 {
                    return Ok(None); // no first frame: nothing was bowled
                }
                continue; // later frame not yet bowled
            };

            // The cell carries the throw values and then the frame's running
            // score, so the length tells how many entries are real throws.
            let throws = match values.len() {
                0 | 1 => {
                    // Score only: the frame itself is missing.
                    if idx == 0 {
                        return Ok(None);
                    }
                    continue;
                }
                2 => 1, // strike frame: one throw + score
                3 => 2, // ordinary two-throw frame
                _ => 3, // 10th frame with a mark
            };
            for t in 0..throws {
                matrix.set(idx, t, values[t].min(10) as u8);
            }
        }

        if matrix.bowled_frames() == 0 {
            return Ok(None);
        }
        let stats = Statistics::from_game(&matrix, score);
        Ok(Some(Game { matrix, score, stats }))
    }

    pub fn matrix(&self) -> &ThrowMatrix {
        &self.matrix
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

/// One league outing: the games a bowler rolled on a single sheet date.
#[derive(Clone, Debug)]
pub struct Series {
    date: NaiveDate,
    games: Vec<Game>,
    stats: Statistics,
}

impl Series {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            games: Vec::new(),
            stats: Statistics::default(),
        }
    }

    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
        self.stats = Statistics::sum(self.games.iter().map(Game::stats));
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[derive(Clone, Debug)]
pub struct Season {
    start: NaiveDate,
    end: NaiveDate,
    series: Vec<Series>,
    stats: Statistics,
}

impl Season {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            series: Vec::new(),
            stats: Statistics::default(),
        }
    }

    /// Sheet membership is strictly inside the window on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
        self.stats = Statistics::sum(self.series.iter().map(Series::stats));
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[derive(Clone, Debug)]
pub struct Bowler {
    name: String,
    seasons: Vec<Season>,
    stats: Statistics,
}

impl Bowler {
    pub fn new(name: &str) -> Self {
        Self {
            name: s!(name),
            seasons: Vec::new(),
            stats: Statistics::default(),
        }
    }

    pub fn add_season(&mut self, season: Season) {
        self.seasons.push(season);
        self.stats = Statistics::sum(self.seasons.iter().map(Season::stats));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}
