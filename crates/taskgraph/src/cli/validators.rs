//! CLI input validation functions.
//!
//! Used by clap's `value_parser` attribute so bad input is rejected at parse time.

use crate::domain::TaskId;

/// Validate a task ID: non-empty after trimming, no internal whitespace.
pub fn validate_task_id(s: &str) -> Result<TaskId, String> {
    s.parse::<TaskId>().map_err(|e| e.to_string())
}

/// Convert a signed hop budget to `usize`, treating negatives as zero.
pub fn clamp_depth(depth: i64) -> usize {
    if depth < 0 {
        tracing::warn!(depth, "Negative depth treated as 0");
        return 0;
    }
    usize::try_from(depth).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("proj-1", "proj-1")]
    #[case::trimmed("  abc  ", "abc")]
    #[case::uuid("0b6f4c1e-8d7a-4e0a-9f55-2c3b1d4e5f60", "0b6f4c1e-8d7a-4e0a-9f55-2c3b1d4e5f60")]
    fn test_validate_task_id_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_task_id(input).unwrap(), TaskId::new(expected));
    }

    #[rstest]
    #[case::empty("", "cannot be empty")]
    #[case::blank("   ", "cannot be empty")]
    #[case::inner_space("a b", "whitespace")]
    fn test_validate_task_id_invalid(#[case] input: &str, #[case] expected_error: &str) {
        let err = validate_task_id(input).unwrap_err();
        assert!(err.contains(expected_error), "got: {err}");
    }

    #[rstest]
    #[case::negative(-3, 0)]
    #[case::zero(0, 0)]
    #[case::positive(4, 4)]
    fn test_clamp_depth(#[case] input: i64, #[case] expected: usize) {
        assert_eq!(clamp_depth(input), expected);
    }
}
