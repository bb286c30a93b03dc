//! Skill Matcher — overlap between skills named in the resume and in the job description.

use crate::analysis::lexicon::SKILLS;
use crate::analysis::percent;
use crate::models::report::SkillsMatch;

const MAX_SKILL_SUGGESTIONS: usize = 3;

/// Scores the share of job-description skills that the resume also mentions.
///
/// A job description naming no known skill scores 0, not 100.
pub fn analyze_skills(resume_text: &str, job_description: &str) -> SkillsMatch {
    let resume_skills = SKILLS.find_in(resume_text);
    let job_skills = SKILLS.find_in(job_description);

    let job_skill_count = job_skills.len();

    let (matched_skills, missing_skills): (Vec<&str>, Vec<&str>) = job_skills
        .into_iter()
        .partition(|skill| resume_skills.contains(skill));

    let score = percent(matched_skills.len(), job_skill_count).unwrap_or(0);

    let suggestions = missing_skills
        .iter()
        .take(MAX_SKILL_SUGGESTIONS)
        .map(|skill| format!("Consider adding or highlighting experience with {skill}"))
        .collect();

    SkillsMatch {
        score,
        matched_skills: matched_skills.into_iter().map(String::from).collect(),
        missing_skills: missing_skills.into_iter().map(String::from).collect(),
        suggestions,
    }
}
