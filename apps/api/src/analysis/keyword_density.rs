//! Keyword Density — share of significant job-description words found in the resume.

use std::collections::HashSet;

use crate::analysis::percent;

/// Job words must be longer than this many characters to count.
const MIN_SIGNIFICANT_LEN: usize = 3;

/// Density when the job description has no significant words.
const NO_KEYWORDS_DENSITY: u32 = 0;

/// Percentage of significant job words (with repetition) that appear as a whole
/// whitespace-delimited token anywhere in the resume. Comparison is lowercase.
pub fn calculate_keyword_density(resume_text: &str, job_description: &str) -> u32 {
    let job_lower = job_description.to_lowercase();
    let job_words: Vec<&str> = job_lower
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_SIGNIFICANT_LEN)
        .collect();

    let resume_lower = resume_text.to_lowercase();
    let resume_words: HashSet<&str> = resume_lower.split_whitespace().collect();

    let matching = job_words
        .iter()
        .filter(|word| resume_words.contains(*word))
        .count();

    percent(matching, job_words.len()).unwrap_or(NO_KEYWORDS_DENSITY)
}
