//! Progression - score, level and gravity speed
//!
//! Ten points per cleared row, a level step every 30 points, and each level
//! shaves 100 ms off the gravity interval until the 100 ms floor. All pure
//! math over the shared constants; the session owns when it applies.

use blockfall_types::{BASE_FALL_MS, FALL_STEP_MS, LEVEL_STEP_POINTS, MIN_FALL_MS, POINTS_PER_ROW};

/// Score for one sweep that cleared `rows` rows.
pub fn score_for_rows(rows: usize) -> u32 {
    rows as u32 * POINTS_PER_ROW
}

/// Level reached at a given score: starts at 1, steps every 30 points.
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_STEP_POINTS + 1
}

/// Gravity interval for a level: 1000 ms at level 1, 100 ms less per level,
/// floored at 100 ms from level 10 on.
pub fn fall_interval_for_level(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(FALL_STEP_MS))
        .max(MIN_FALL_MS)
}

/// Score, level and the derived gravity interval for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
    fall_interval_ms: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            fall_interval_ms: BASE_FALL_MS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Fold one sweep's clears in: score grows, level and interval are
    /// recomputed from the new score. Nothing here ever moves backward.
    pub fn record_clears(&mut self, rows: usize) {
        self.score += score_for_rows(rows);
        self.level = level_for_score(self.score);
        self.fall_interval_ms = fall_interval_for_level(self.level);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
