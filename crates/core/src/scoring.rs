//! Scoring module - quadratic line-clear rewards
//!
//! A lock that clears `n` rows at once is worth `100 * n²`, so clearing four
//! rows together (1600) pays four times as much as four single clears (400).

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows with a single lock.
pub fn line_clear_score(lines: usize) -> u32 {
    let lines = u32::try_from(lines).unwrap_or(u32::MAX);
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_line_clear_score_saturates() {
        assert_eq!(line_clear_score(usize::MAX), u32::MAX);
    }
}
