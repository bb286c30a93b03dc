//! Formatting Analyzer — length and section-structure heuristics on the resume alone.

use crate::analysis::percent;
use crate::models::report::FormattingReport;

/// Exclusive bounds on resume length, in characters.
const MIN_LENGTH: usize = 500;
const MAX_LENGTH: usize = 3000;

/// Section markers. Matched case-sensitively on the raw text.
const SECTION_MARKERS: &[&str] = &["experience", "education"];

/// Score when no heuristic produced a verdict. Unreachable with the fixed checks below.
const NO_CHECKS_SCORE: u32 = 100;

pub fn analyze_formatting(resume_text: &str) -> FormattingReport {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    let length = resume_text.chars().count();
    if length > MIN_LENGTH && length < MAX_LENGTH {
        strengths.push("Appropriate resume length".to_string());
    } else {
        improvements.push("Optimize resume length (1-2 pages recommended)".to_string());
    }

    if SECTION_MARKERS
        .iter()
        .any(|marker| resume_text.contains(marker))
    {
        strengths.push("Clear section organization".to_string());
    } else {
        improvements.push("Add clear section headers (Experience, Education, Skills)".to_string());
    }

    let score = percent(strengths.len(), strengths.len() + improvements.len())
        .unwrap_or(NO_CHECKS_SCORE);

    FormattingReport {
        score,
        strengths,
        improvements,
    }
}
