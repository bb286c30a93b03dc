use serde::{Deserialize, Serialize};

/// The two plain-text inputs of one analysis request.
/// Text extraction from uploaded documents happens before this point.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsMatch {
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceMatch {
    pub score: u32,
    pub relevant_experience: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationMatch {
    pub score: u32,
    pub relevant_education: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingReport {
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Full report returned for one analysis. Every score is an integer in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub skills_match: SkillsMatch,
    pub experience_match: ExperienceMatch,
    pub education_match: EducationMatch,
    pub formatting: FormattingReport,
    pub keyword_density: u32,
    /// At most 6 entries, no duplicates.
    pub recommendations: Vec<String>,
}
