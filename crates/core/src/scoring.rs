//! Scoring module - line-clear points, levels and step times
//!
//! A clear of `n` rows scores `40 * (level + 1) * 2^n`. Every 10 cleared rows
//! raise the level by one (at most one level per clear, capped at
//! [`MAX_LEVEL`]), and each level shortens the step time by 100ms.
//!
//! The level check runs before the points are added, so the clear that
//! triggers a level-up is already scored at the new level.

use crate::types::{
    BASE_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE, MAX_LEVEL, STEP_MS_PER_LEVEL, STEP_OFFSET_MS,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u64 {
    if lines == 0 {
        return 0;
    }
    let multiplier = 1u64.checked_shl(lines).unwrap_or(u64::MAX);
    LINE_CLEAR_BASE
        .saturating_mul(u64::from(level) + 1)
        .saturating_mul(multiplier)
}

/// Standard step time for a level (in milliseconds)
pub fn standard_step_ms(level: u32) -> u32 {
    let level = level.min(MAX_LEVEL);
    BASE_STEP_MS - STEP_MS_PER_LEVEL * level + STEP_OFFSET_MS
}

/// Score, level and line counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    score: u64,
    level: u32,
    lines_in_level: u32,
    total_lines: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Lines cleared since the last level-up
    pub fn lines_in_level(&self) -> u32 {
        self.lines_in_level
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    /// Account for one row-clear pass; returns true if the level went up
    ///
    /// The level never rises past [`MAX_LEVEL`].
    pub fn record_clear(&mut self, removed: u32) -> bool {
        if removed == 0 {
            return false;
        }

        self.lines_in_level += removed;
        self.total_lines += removed;

        let level_up = self.lines_in_level >= LINES_PER_LEVEL && self.level < MAX_LEVEL;
        if level_up {
            self.level += 1;
            // Carry the surplus into the new level.
            self.lines_in_level %= LINES_PER_LEVEL;
        }

        self.score = self
            .score
            .saturating_add(line_clear_score(removed, self.level));
        level_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0, 0), 0);
        assert_eq!(line_clear_score(1, 0), 80);
        assert_eq!(line_clear_score(2, 0), 160);
        assert_eq!(line_clear_score(4, 0), 640);

        assert_eq!(line_clear_score(1, 5), 40 * 6 * 2);
        assert_eq!(line_clear_score(3, 10), 40 * 11 * 8);
    }

    #[test]
    fn test_standard_step_times() {
        assert_eq!(standard_step_ms(0), 1100);
        assert_eq!(standard_step_ms(1), 1000);
        assert_eq!(standard_step_ms(5), 600);
        assert_eq!(standard_step_ms(10), 100);
        assert_eq!(standard_step_ms(42), 100);
    }

    #[test]
    fn test_record_clear_without_lines() {
        let mut progress = Progress::new();
        assert!(!progress.record_clear(0));
        assert_eq!(progress, Progress::new());
    }

    #[test]
    fn test_ten_lines_level_up() {
        let mut progress = Progress::new();
        for _ in 0..9 {
            assert!(!progress.record_clear(1));
        }
        assert_eq!(progress.score(), 9 * 80);

        // The tenth line is scored at level 1.
        assert!(progress.record_clear(1));
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.lines_in_level(), 0);
        assert_eq!(progress.total_lines(), 10);
        assert_eq!(progress.score(), 9 * 80 + 40 * 2 * 2);
    }

    #[test]
    fn test_surplus_lines_carry_over() {
        let mut progress = Progress::new();
        progress.record_clear(4);
        progress.record_clear(4);
        assert!(progress.record_clear(4));
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.lines_in_level(), 2);
        assert_eq!(progress.total_lines(), 12);
    }

    #[test]
    fn test_one_level_per_clear() {
        let mut progress = Progress::new();
        assert!(progress.record_clear(25));
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.lines_in_level(), 5);
    }

    #[test]
    fn test_level_capped() {
        let mut progress = Progress::new();
        for _ in 0..200 {
            progress.record_clear(1);
        }
        assert_eq!(progress.level(), MAX_LEVEL);
        assert_eq!(progress.total_lines(), 200);
    }
}
