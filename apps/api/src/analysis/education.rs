//! Education Matcher — binary relevance against the education lexicon.

use crate::analysis::lexicon::EDUCATION;
use crate::models::report::EducationMatch;

pub const NOT_REQUIRED_SCORE: u32 = 75;
pub const REQUIRED_AND_PRESENT_SCORE: u32 = 85;
pub const REQUIRED_AND_MISSING_SCORE: u32 = 40;

const RELEVANT_EDUCATION_MARKER: &str = "Relevant degree or certification found";

const EDUCATION_SUGGESTIONS: &[&str] = &[
    "Include relevant coursework or projects",
    "Highlight any certifications or continuous learning",
    "Mention academic achievements if recent graduate",
];

pub fn analyze_education(resume_text: &str, job_description: &str) -> EducationMatch {
    let has_relevant_education = EDUCATION.any_in(resume_text);
    let job_requires_education = EDUCATION.any_in(job_description);

    let score = match (job_requires_education, has_relevant_education) {
        (false, _) => NOT_REQUIRED_SCORE,
        (true, true) => REQUIRED_AND_PRESENT_SCORE,
        (true, false) => REQUIRED_AND_MISSING_SCORE,
    };

    let relevant_education = if has_relevant_education {
        vec![RELEVANT_EDUCATION_MARKER.to_string()]
    } else {
        vec![]
    };

    EducationMatch {
        score,
        relevant_education,
        suggestions: EDUCATION_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
