// src/stats.rs

// Frame classification and counter accumulation. One Statistics value is
// derived per game, then summed upward through Series, Season and Bowler;
// the percentages are recomputed from the summed counters at every level,
// never added together.

use crate::model::ThrowMatrix;
use crate::params::FRAMES_PER_GAME;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Statistics {
    // Counters. Additive across containment levels.
    pub games: u32,
    pub pins: u32,
    pub frames: u32,
    pub strikes: u32,
    pub spares: u32,
    pub opens: u32,
    pub single_pin_leaves: u32,
    pub single_pin_makes: u32,
    pub strike_frames: u32,
    pub spare_frames: u32,

    // Derived. Valid only after calculate_percentages().
    pub average_score: f64,
    pub strike_pct: f64,
    pub spare_pct: f64,
    pub single_pin_pct: f64,
    pub open_pct: f64,
}

impl Statistics {
    /// Classify every frame of a finished (or partially bowled) game.
    /// The total score comes from the sheet and is trusted as-is.
    pub fn from_game(matrix: &ThrowMatrix, score: u32) -> Self {
        let mut s = Statistics::default();
        s.games = 1;
        s.pins = score;

        // All ten frames get the uniform treatment first.
        for idx in 0..FRAMES_PER_GAME {
            let [t0, t1, _] = matrix.frame(idx);
            let Some(first) = t0 else {
                continue; // frame not bowled
            };
            s.frames += 1;
            s.strike_frames += 1;

            if first == 10 {
                s.strikes += 1;
            } else {
                s.spare_frames += 1;
            }

            let second = t1.unwrap_or(0);
            if first == 9 {
                // Single-pin leave; converted only by a 1 on the second ball.
                s.single_pin_leaves += 1;
                if second == 1 {
                    s.single_pin_makes += 1;
                    s.spares += 1;
                }
            } else if first < 9 && first + second == 10 {
                s.spares += 1;
            } else if first < 9 {
                s.opens += 1;
            }
        }

        // The 10th frame earns extra mark chances from its bonus throws.
        // The three branches are mutually exclusive: the first two require a
        // first-ball strike, the third excludes it.
        let [t0, t1, t2] = matrix.frame(FRAMES_PER_GAME - 1);
        if let Some(first) = t0 {
            let second = t1.unwrap_or(0);
            let third = t2.unwrap_or(0);

            // Strike, then a spare attempt across balls two and three.
            if first == 10 && second < 10 {
                s.spare_frames += 1;
                s.strike_frames += 1;
                if second + third == 10 {
                    s.spares += 1;
                }
            }
            // Back-to-back strikes; a third strike counts again.
            if first == 10 && second == 10 {
                s.strikes += 1;
                s.strike_frames += 1;
                if third == 10 {
                    s.strikes += 1;
                    s.strike_frames += 1;
                }
            }
            // Spare, then a bonus ball that may be a strike.
            if first < 10 && first + second == 10 {
                s.strike_frames += 1;
                if third == 10 {
                    s.strikes += 1;
                }
            }
        }

        s.calculate_percentages();
        s
    }

    fn ratio(num: u32, den: u32) -> f64 {
        if den > 0 { num as f64 / den as f64 } else { 0.0 }
    }

    /// Rebuild the five derived values from the counters.
    /// Must run after any counter mutation; a stale percentage is a defect.
    pub fn calculate_percentages(&mut self) {
        self.average_score = Self::ratio(self.pins, self.games);
        self.strike_pct = 100.0 * Self::ratio(self.strikes, self.strike_frames);
        self.spare_pct = 100.0 * Self::ratio(self.spares, self.spare_frames);
        self.single_pin_pct = 100.0 * Self::ratio(self.single_pin_makes, self.single_pin_leaves);
        self.open_pct = 100.0 * Self::ratio(self.opens, self.frames);
    }

    /// Elementwise counter sum. Percentages are untouched; the caller
    /// recomputes them once all children are folded in.
    pub fn add_counts(&mut self, other: &Statistics) {
        self.games += other.games;
        self.pins += other.pins;
        self.frames += other.frames;
        self.strikes += other.strikes;
        self.spares += other.spares;
        self.opens += other.opens;
        self.single_pin_leaves += other.single_pin_leaves;
        self.single_pin_makes += other.single_pin_makes;
        self.strike_frames += other.strike_frames;
        self.spare_frames += other.spare_frames;
    }

    /// Full recompute: reset, fold every child, derive percentages.
    /// Aggregates are rebuilt this way each time a child is appended, so
    /// re-running over the same children is idempotent.
    pub fn sum<'a, I>(children: I) -> Statistics
    where
        I: IntoIterator<Item = &'a Statistics>,
    {
        let mut total = Statistics::default();
        for child in children {
            total.add_counts(child);
        }
        total.calculate_percentages();
        total
    }
}
