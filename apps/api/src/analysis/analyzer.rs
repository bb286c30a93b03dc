//! Analysis Orchestrator — runs the deterministic scorers, aggregates, then
//! builds recommendations with an optional, time-bounded augmentation call.
//!
//! Phase 1 (deterministic) failures abort the request. Phase 2 augmentation
//! failures are logged and swallowed; the base recommendations still ship.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::aggregate::overall_score;
use crate::analysis::education::analyze_education;
use crate::analysis::experience::analyze_experience;
use crate::analysis::formatting::analyze_formatting;
use crate::analysis::keyword_density::calculate_keyword_density;
use crate::analysis::prompts::build_recommendation_prompt;
use crate::analysis::recommendations::{
    base_recommendations, merge_recommendations, parse_suggestion_lines,
};
use crate::analysis::skills::analyze_skills;
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::report::{
    AnalysisInput, AnalysisReport, EducationMatch, ExperienceMatch, FormattingReport, SkillsMatch,
};

/// Output of the deterministic phase.
#[derive(Debug, Clone, PartialEq)]
pub struct DeterministicScores {
    pub skills: SkillsMatch,
    pub experience: ExperienceMatch,
    pub education: EducationMatch,
    pub formatting: FormattingReport,
    pub keyword_density: u32,
}

/// Runs the four matchers and the density calculator. Pure; no I/O.
pub fn score_deterministic(resume_text: &str, job_description: &str) -> DeterministicScores {
    DeterministicScores {
        skills: analyze_skills(resume_text, job_description),
        experience: analyze_experience(resume_text, job_description),
        education: analyze_education(resume_text, job_description),
        formatting: analyze_formatting(resume_text),
        keyword_density: calculate_keyword_density(resume_text, job_description),
    }
}

/// Rejects blank inputs before any analysis runs.
pub fn validate_input(input: &AnalysisInput) -> Result<(), AppError> {
    if input.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if input.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

pub struct Analyzer {
    generator: Arc<dyn TextGenerator>,
    augmentation_timeout: Duration,
}

impl Analyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, augmentation_timeout: Duration) -> Self {
        Self {
            generator,
            augmentation_timeout,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.generator.backend()
    }

    /// Produces a complete report or a single error. Never returns partial data.
    pub async fn analyze(&self, input: AnalysisInput) -> Result<AnalysisReport, AppError> {
        validate_input(&input)?;

        let analysis_id = Uuid::new_v4();
        self.run(Arc::new(input))
            .instrument(info_span!("analysis", %analysis_id))
            .await
    }

    async fn run(&self, input: Arc<AnalysisInput>) -> Result<AnalysisReport, AppError> {
        // Phase 1: CPU-bound scoring off the async workers.
        let phase_input = Arc::clone(&input);
        let scores = tokio::task::spawn_blocking(move || {
            score_deterministic(&phase_input.resume_text, &phase_input.job_description)
        })
        .await
        .map_err(|e| AppError::Analysis(format!("deterministic phase aborted: {e}")))?;

        debug!(
            skills = scores.skills.score,
            experience = scores.experience.score,
            education = scores.education.score,
            formatting = scores.formatting.score,
            keyword_density = scores.keyword_density,
            "Sub-scores computed"
        );

        let overall = overall_score(
            scores.skills.score,
            scores.experience.score,
            scores.education.score,
            scores.formatting.score,
        );
        info!("Overall match score: {overall}/100");

        // Phase 2: recommendations.
        let base = base_recommendations(
            scores.skills.score,
            scores.experience.score,
            scores.keyword_density,
        );
        let recommendations = match self.augment(&input).await {
            Ok(extra) => {
                debug!("Augmentation returned {} suggestion lines", extra.len());
                merge_recommendations(base, extra)
            }
            Err(LlmError::Disabled) => base,
            Err(e) => {
                warn!(
                    "Augmentation via {} failed, using base recommendations: {e}",
                    self.generator.backend()
                );
                base
            }
        };

        Ok(AnalysisReport {
            overall_score: overall,
            skills_match: scores.skills,
            experience_match: scores.experience,
            education_match: scores.education,
            formatting: scores.formatting,
            keyword_density: scores.keyword_density,
            recommendations,
        })
    }

    async fn augment(&self, input: &AnalysisInput) -> Result<Vec<String>, LlmError> {
        let prompt = build_recommendation_prompt(&input.resume_text, &input.job_description);

        let text = tokio::time::timeout(self.augmentation_timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.augmentation_timeout))??;

        Ok(parse_suggestion_lines(&text))
    }
}
