// Resume / job-description matching engine.
// Four independent sub-scorers plus keyword density feed a weighted aggregate;
// recommendations are rule-based with optional external augmentation.

pub mod aggregate;
pub mod analyzer;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod handlers;
pub mod keyword_density;
pub mod lexicon;
pub mod prompts;
pub mod recommendations;
pub mod skills;

/// `round(100 * part / whole)` with half-up rounding, clamped to 0..=100.
/// Returns `None` when `whole` is zero so each caller picks its own default.
pub(crate) fn percent(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    Some(rounded.min(100) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(2, 3), Some(67));
        assert_eq!(percent(1, 3), Some(33));
        assert_eq!(percent(1, 8), Some(13)); // 12.5
        assert_eq!(percent(1, 2), Some(50));
    }

    #[test]
    fn test_percent_zero_denominator_is_none() {
        assert_eq!(percent(0, 0), None);
    }

    #[test]
    fn test_percent_clamped() {
        assert_eq!(percent(5, 4), Some(100));
        assert_eq!(percent(0, 7), Some(0));
    }
}
