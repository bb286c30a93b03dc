// Prompt templates for recommendation augmentation.

/// Upper bound on characters of each input embedded in the prompt.
pub const PROMPT_TEXT_LIMIT: usize = 2000;

/// Recommendation prompt template. Replace `{resume_text}` and `{jd_text}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = "You are a resume coach. Given the resume text:
{resume_text}

and the job description:
{jd_text}

Provide up to 5 concise, prioritized recommendations to improve the resume for this job. Output as short bullet lines.";

/// Builds the augmentation prompt, truncating both inputs to `PROMPT_TEXT_LIMIT` characters.
pub fn build_recommendation_prompt(resume_text: &str, job_description: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(resume_text, PROMPT_TEXT_LIMIT))
        .replace("{jd_text}", truncate_chars(job_description, PROMPT_TEXT_LIMIT))
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
