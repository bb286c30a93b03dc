//! Experience Matcher — role and seniority keyword overlap.

use crate::analysis::lexicon::EXPERIENCE;
use crate::analysis::percent;
use crate::models::report::ExperienceMatch;

/// Score used when the job description carries no role/seniority signal.
pub const NO_SIGNAL_SCORE: u32 = 75;

const EXPERIENCE_SUGGESTIONS: &[&str] = &[
    "Quantify your achievements with specific metrics and numbers",
    "Use action verbs to describe your responsibilities",
    "Highlight projects that align with the job requirements",
];

/// Scores role/seniority keyword coverage.
///
/// `relevant_experience` holds resume keywords that occur verbatim in the
/// job text; `gaps` holds job keywords the resume never mentions.
pub fn analyze_experience(resume_text: &str, job_description: &str) -> ExperienceMatch {
    let job_lower = job_description.to_lowercase();

    let resume_keywords = EXPERIENCE.find_in(resume_text);
    let job_keywords = EXPERIENCE.find_in(job_description);

    let relevant_experience: Vec<String> = resume_keywords
        .iter()
        .filter(|keyword| job_lower.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let gaps: Vec<String> = job_keywords
        .iter()
        .filter(|keyword| !resume_keywords.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let score = percent(relevant_experience.len(), job_keywords.len()).unwrap_or(NO_SIGNAL_SCORE);

    ExperienceMatch {
        score,
        relevant_experience,
        gaps,
        suggestions: EXPERIENCE_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
