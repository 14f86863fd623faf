// src/report.rs

// Flatten the bowler hierarchy into output rows at a chosen level.

use crate::model::{Bowler, Season, Series};
use crate::params::Level;
use crate::stats::Statistics;

pub fn headers() -> Vec<String> {
    [
        "Bowler", "Level", "Date", "Games", "Pins", "Frames", "Strikes", "Spares", "Opens",
        "SP Leaves", "SP Makes", "Strike Frames", "Spare Frames", "Avg", "Strike%", "Spare%",
        "Single Pin%", "Open%",
    ]
    .iter()
    .map(|h| s!(*h))
    .collect()
}

fn stat_cells(bowler: &str, level: &str, date: String, s: &Statistics) -> Vec<String> {
    vec![
        s!(bowler),
        s!(level),
        date,
        s.games.to_string(),
        s.pins.to_string(),
        s.frames.to_string(),
        s.strikes.to_string(),
        s.spares.to_string(),
        s.opens.to_string(),
        s.single_pin_leaves.to_string(),
        s.single_pin_makes.to_string(),
        s.strike_frames.to_string(),
        s.spare_frames.to_string(),
        pct!(s.average_score),
        pct!(s.strike_pct),
        pct!(s.spare_pct),
        pct!(s.single_pin_pct),
        pct!(s.open_pct),
    ]
}

fn season_label(season: &Season) -> String {
    format!("{}..{}", season.start(), season.end())
}

fn game_rows(name: &str, series: &Series, out: &mut Vec<Vec<String>>) {
    for game in series.games() {
        out.push(stat_cells(name, "game", series.date().to_string(), game.stats()));
    }
}

/// One row per node at `level`, walking the hierarchy top-down.
pub fn rows_for(bowler: &Bowler, level: Level) -> Vec<Vec<String>> {
    let name = bowler.name();
    let mut rows = Vec::new();
    match level {
        Level::Bowler => {
            rows.push(stat_cells(name, "bowler", s!(""), bowler.stats()));
        }
        Level::Season => {
            for season in bowler.seasons() {
                rows.push(stat_cells(name, "season", season_label(season), season.stats()));
            }
        }
        Level::Series => {
            for season in bowler.seasons() {
                for series in season.series() {
                    rows.push(stat_cells(
                        name,
                        "series",
                        series.date().to_string(),
                        series.stats(),
                    ));
                }
            }
        }
        Level::Game => {
            for season in bowler.seasons() {
                for series in season.series() {
                    game_rows(name, series, &mut rows);
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Game;
    use crate::params::FRAMES_PER_GAME;
    use chrono::NaiveDate;

    fn sample_game() -> Game {
        let mut frames: [String; FRAMES_PER_GAME] = Default::default();
        frames[0] = s!("9 / 19");
        frames[1] = s!("5 4 28");
        Game::from_sheet_row(&frames, 28).unwrap().unwrap()
    }

    #[test]
    fn row_widths_match_headers() {
        let mut series = Series::new(NaiveDate::from_ymd_opt(2023, 10, 18).unwrap());
        series.add_game(sample_game());
        let mut season = Season::new(NaiveDate::MIN, NaiveDate::MAX);
        season.add_series(series);
        let mut bowler = Bowler::new("Test Bowler");
        bowler.add_season(season);

        let width = headers().len();
        for level in [Level::Bowler, Level::Season, Level::Series, Level::Game] {
            let rows = rows_for(&bowler, level);
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].len(), width);
        }
    }

    #[test]
    fn derived_columns_use_one_decimal() {
        let mut series = Series::new(NaiveDate::from_ymd_opt(2023, 10, 18).unwrap());
        series.add_game(sample_game());
        let rows = {
            let mut bowler = Bowler::new("Test Bowler");
            let mut season = Season::new(NaiveDate::MIN, NaiveDate::MAX);
            season.add_series(series);
            bowler.add_season(season);
            rows_for(&bowler, Level::Bowler)
        };
        // avg 28.0, spare% 50.0, open% 50.0
        assert_eq!(rows[0][13], "28.0");
        assert_eq!(rows[0][15], "50.0");
        assert_eq!(rows[0][17], "50.0");
    }
}
