//! Recommendation Generator — rule-based suggestions, optionally merged with
//! suggestions parsed from external model output.

use std::collections::HashSet;

/// Sub-scores below this trigger a targeted recommendation.
const SCORE_THRESHOLD: u32 = 70;
/// Keyword density below this triggers the keyword recommendation.
const DENSITY_THRESHOLD: u32 = 15;

pub const MAX_BASE_RECOMMENDATIONS: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Deterministic recommendations, in rule order, capped at five.
pub fn base_recommendations(
    skills_score: u32,
    experience_score: u32,
    keyword_density: u32,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skills_score < SCORE_THRESHOLD {
        recommendations
            .push("Focus on highlighting technical skills that match the job requirements".to_string());
    }
    if experience_score < SCORE_THRESHOLD {
        recommendations.push("Better align your experience descriptions with the job posting".to_string());
    }
    if keyword_density < DENSITY_THRESHOLD {
        recommendations.push("Include more relevant keywords from the job description".to_string());
    }
    recommendations.push("Tailor your resume summary to match the specific role".to_string());
    recommendations.push("Use quantifiable achievements to demonstrate impact".to_string());

    recommendations.truncate(MAX_BASE_RECOMMENDATIONS);
    recommendations
}

/// Splits free-form model output into suggestion lines.
///
/// Leading list markers (`-`, `*`, `•`, digits, `.`, `)`) and whitespace are
/// stripped; lines left empty are dropped.
pub fn parse_suggestion_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_start_matches(is_list_marker).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn is_list_marker(c: char) -> bool {
    matches!(c, '-' | '*' | '•' | '.' | ')') || c.is_ascii_digit() || c.is_whitespace()
}

/// Appends `extra` to `base`, keeping the first occurrence of each exact string,
/// and caps the result at six entries.
pub fn merge_recommendations(base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    base.into_iter()
        .chain(extra)
        .filter(|rec| seen.insert(rec.clone()))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
