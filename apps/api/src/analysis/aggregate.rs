//! Score Aggregator — fixed-weight combination of the four sub-scores.

use serde::{Deserialize, Serialize};

/// Weights in percent: skills 40, experience 30, education 20, formatting 10.
const SKILLS_WEIGHT: u32 = 40;
const EXPERIENCE_WEIGHT: u32 = 30;
const EDUCATION_WEIGHT: u32 = 20;
const FORMATTING_WEIGHT: u32 = 10;

/// `round(0.4·skills + 0.3·experience + 0.2·education + 0.1·formatting)`.
///
/// Computed in integer hundredths so half-way values round up exactly.
pub fn overall_score(skills: u32, experience: u32, education: u32, formatting: u32) -> u32 {
    let weighted = SKILLS_WEIGHT * skills.min(100)
        + EXPERIENCE_WEIGHT * experience.min(100)
        + EDUCATION_WEIGHT * education.min(100)
        + FORMATTING_WEIGHT * formatting.min(100);
    (weighted + 50) / 100
}

/// Qualitative band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl MatchRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => MatchRating::Excellent,
            60..=79 => MatchRating::Good,
            40..=59 => MatchRating::Fair,
            _ => MatchRating::NeedsImprovement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_scores() {
        assert_eq!(overall_score(50, 50, 50, 50), 50);
        assert_eq!(overall_score(0, 0, 0, 0), 0);
        assert_eq!(overall_score(100, 100, 100, 100), 100);
    }

    #[test]
    fn test_formatting_weight_is_ten_percent() {
        assert_eq!(overall_score(100, 100, 100, 0), 90);
    }

    #[test]
    fn test_each_weight() {
        assert_eq!(overall_score(100, 0, 0, 0), 40);
        assert_eq!(overall_score(0, 100, 0, 0), 30);
        assert_eq!(overall_score(0, 0, 100, 0), 20);
    }

    #[test]
    fn test_half_rounds_up() {
        // 0.4*67 + 0.3*75 + 0.2*75 + 0.1*50 = 26.8 + 22.5 + 15 + 5 = 69.3
        assert_eq!(overall_score(67, 75, 75, 50), 69);
        // 0.1*5 = 0.5
        assert_eq!(overall_score(0, 0, 0, 5), 1);
        // 0.3*15 = 4.5
        assert_eq!(overall_score(0, 15, 0, 0), 5);
    }

    #[test]
    fn test_result_never_exceeds_100() {
        assert_eq!(overall_score(250, 100, 100, 100), 100);
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(MatchRating::from_score(100), MatchRating::Excellent);
        assert_eq!(MatchRating::from_score(80), MatchRating::Excellent);
        assert_eq!(MatchRating::from_score(79), MatchRating::Good);
        assert_eq!(MatchRating::from_score(60), MatchRating::Good);
        assert_eq!(MatchRating::from_score(59), MatchRating::Fair);
        assert_eq!(MatchRating::from_score(40), MatchRating::Fair);
        assert_eq!(MatchRating::from_score(39), MatchRating::NeedsImprovement);
        assert_eq!(MatchRating::from_score(0), MatchRating::NeedsImprovement);
    }
}
