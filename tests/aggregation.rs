// tests/aggregation.rs

// Counter roll-up through Series, Season and Bowler. Percentages must come
// from the summed counters, never from averaging child percentages.

use chrono::NaiveDate;
use pin_scrape::model::{Bowler, Game, Season, Series};
use pin_scrape::params::FRAMES_PER_GAME;
use pin_scrape::s;
use pin_scrape::stats::Statistics;

fn cells(texts: [&str; FRAMES_PER_GAME]) -> [String; FRAMES_PER_GAME] {
    texts.map(|t| s!(t))
}

fn perfect_game() -> Game {
    let frames = cells([
        "X 30", "X 60", "X 90", "X 120", "X 150",
        "X 180", "X 210", "X 240", "X 270", "X X X 300",
    ]);
    Game::from_sheet_row(&frames, 300).unwrap().unwrap()
}

fn open_game() -> Game {
    let frames = cells([
        "5 4 9", "5 4 18", "5 4 27", "5 4 36", "5 4 45",
        "5 4 54", "5 4 63", "5 4 72", "5 4 81", "5 4 90",
    ]);
    Game::from_sheet_row(&frames, 90).unwrap().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn series_sums_counters_and_recomputes_percentages() {
    let mut series = Series::new(date(2023, 10, 18));
    series.add_game(perfect_game());
    series.add_game(open_game());

    let s = series.stats();
    assert_eq!(s.games, 2);
    assert_eq!(s.pins, 390);
    assert_eq!(s.frames, 20);
    assert_eq!(s.strikes, 12);
    assert_eq!(s.opens, 10);
    assert_eq!(s.average_score, 195.0);
    // 12 strikes out of 12 + 10 chances, not the mean of 100% and 0%.
    assert_eq!(s.strike_pct, 100.0 * (12.0 / 22.0));
    assert_eq!(s.open_pct, 50.0);
}

#[test]
fn aggregation_is_rebuilt_on_every_append() {
    let mut series = Series::new(date(2023, 10, 18));
    series.add_game(open_game());
    assert_eq!(series.stats().games, 1);
    assert_eq!(series.stats().average_score, 90.0);

    series.add_game(perfect_game());
    assert_eq!(series.stats().games, 2);
    assert_eq!(series.stats().average_score, 195.0);
}

#[test]
fn season_and_bowler_levels_match_the_flat_sum() {
    let mut s1 = Series::new(date(2023, 10, 18));
    s1.add_game(perfect_game());
    let mut s2 = Series::new(date(2023, 10, 25));
    s2.add_game(open_game());
    s2.add_game(open_game());

    let flat = Statistics::sum([s1.stats(), s2.stats()]);

    let mut season = Season::new(date(2023, 9, 1), date(2024, 4, 30));
    season.add_series(s1);
    season.add_series(s2);
    assert_eq!(*season.stats(), flat);

    let mut bowler = Bowler::new("Bruce Brewer");
    bowler.add_season(season);
    assert_eq!(*bowler.stats(), flat);
}

#[test]
fn sum_is_associative() {
    let a = *perfect_game().stats();
    let b = *open_game().stats();
    let c = *open_game().stats();

    let ab = Statistics::sum([&a, &b]);
    let left = Statistics::sum([&ab, &c]);
    let all = Statistics::sum([&a, &b, &c]);
    assert_eq!(left, all);
}

#[test]
fn recompute_is_idempotent() {
    let mut s = Statistics::sum([perfect_game().stats(), open_game().stats()]);
    let snapshot = s;
    s.calculate_percentages();
    s.calculate_percentages();
    assert_eq!(s, snapshot);
}

#[test]
fn empty_aggregates_are_all_zero() {
    let season = Season::new(date(2023, 9, 1), date(2024, 4, 30));
    let s = season.stats();
    assert_eq!(s.games, 0);
    assert_eq!(s.average_score, 0.0);
    assert_eq!(s.strike_pct, 0.0);
    assert_eq!(s.open_pct, 0.0);
}
