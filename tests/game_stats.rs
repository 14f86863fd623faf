// tests/game_stats.rs

// Whole-game classification through Game::from_sheet_row.

use pin_scrape::model::Game;
use pin_scrape::params::FRAMES_PER_GAME;
use pin_scrape::s;

fn cells(texts: [&str; FRAMES_PER_GAME]) -> [String; FRAMES_PER_GAME] {
    texts.map(|t| s!(t))
}

#[test]
fn perfect_game_counts_twelve_strikes() {
    let frames = cells([
        "X 30", "X 60", "X 90", "X 120", "X 150",
        "X 180", "X 210", "X 240", "X 270", "X X X 300",
    ]);
    let game = Game::from_sheet_row(&frames, 300).unwrap().unwrap();
    let s = game.stats();
    assert_eq!(s.frames, 10);
    assert_eq!(s.strikes, 12);
    assert_eq!(s.strike_frames, 12);
    assert_eq!(s.spares, 0);
    assert_eq!(s.spare_frames, 0);
    assert_eq!(s.opens, 0);
    assert_eq!(s.strike_pct, 100.0);
    assert_eq!(s.open_pct, 0.0);
    assert_eq!(s.average_score, 300.0);
}

#[test]
fn all_open_game() {
    let frames = cells([
        "5 4 9", "5 4 18", "5 4 27", "5 4 36", "5 4 45",
        "5 4 54", "5 4 63", "5 4 72", "5 4 81", "5 4 90",
    ]);
    let s = *Game::from_sheet_row(&frames, 90).unwrap().unwrap().stats();
    assert_eq!(s.opens, 10);
    assert_eq!(s.frames, 10);
    assert_eq!(s.strikes, 0);
    assert_eq!(s.spares, 0);
    assert_eq!(s.open_pct, 100.0);
    assert_eq!(s.strike_pct, 0.0);
    assert_eq!(s.spare_pct, 0.0);
}

#[test]
fn single_pin_frames_feed_their_own_counters() {
    let frames = cells([
        "9 / 20", "9 - 29", "X 49", "9 / 69", "8 1 78",
        "7 / 98", "9 - 107", "X 127", "9 / 147", "9 / 9 166",
    ]);
    let s = *Game::from_sheet_row(&frames, 166).unwrap().unwrap().stats();
    // First-ball 9s: frames 1, 2, 4, 7, 9, 10.
    assert_eq!(s.single_pin_leaves, 6);
    assert_eq!(s.single_pin_makes, 4);
    // Converted single pins plus the 7 / in frame 6.
    assert_eq!(s.spares, 5);
    // A 9-count leave is never an open, even when missed; only 8 1 is.
    assert_eq!(s.opens, 1);
    assert_eq!(s.strikes, 2);
    assert_eq!(s.spare_frames, 8);
    // Ten from the loop, one more for the 10th-frame bonus ball.
    assert_eq!(s.strike_frames, 11);
}

#[test]
fn partial_game_counts_only_bowled_frames() {
    let frames = cells([
        "X 20", "9 / 40", "5 4 49", "", "", "", "", "", "", "",
    ]);
    let s = *Game::from_sheet_row(&frames, 49).unwrap().unwrap().stats();
    assert_eq!(s.frames, 3);
    assert_eq!(s.strikes, 1);
    assert_eq!(s.spares, 1);
    assert_eq!(s.opens, 1);
    assert_eq!(s.strike_frames, 3);
    assert_eq!(s.spare_frames, 2);
}

#[test]
fn gap_frames_are_skipped_not_zeroed() {
    let frames = cells([
        "X 20", "30", "", "5 / 50", "", "", "", "", "", "",
    ]);
    let s = *Game::from_sheet_row(&frames, 50).unwrap().unwrap().stats();
    assert_eq!(s.frames, 2);
    assert_eq!(s.strikes, 1);
    assert_eq!(s.spares, 1);
    assert_eq!(s.opens, 0);
}

#[test]
fn discarded_rows() {
    // Below the score floor.
    let low = cells(["5 4 9", "5 4 18", "", "", "", "", "", "", "", ""]);
    assert!(Game::from_sheet_row(&low, 18).unwrap().is_none());

    // Frame 1 never bowled.
    let mut texts = [""; FRAMES_PER_GAME];
    texts[1] = "X 40";
    assert!(Game::from_sheet_row(&cells(texts), 150).unwrap().is_none());

    // Frame 1 reduced to a bare running score.
    let mut texts = [""; FRAMES_PER_GAME];
    texts[0] = "20";
    assert!(Game::from_sheet_row(&cells(texts), 120).unwrap().is_none());
}

#[test]
fn bad_token_propagates() {
    let mut texts = ["5 4 9"; FRAMES_PER_GAME];
    texts[4] = "5 F 40";
    assert!(Game::from_sheet_row(&cells(texts), 90).is_err());
}
