//! Lexicon tables — fixed reference lists matched case-insensitively against free text.
//!
//! Each table is compiled once into an Aho-Corasick automaton on first use and is
//! read-only afterwards, so it can be shared across concurrent requests.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

const SKILL_TERMS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "HTML",
    "CSS",
    "TypeScript",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Agile",
    "Scrum",
    "REST API",
    "GraphQL",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Leadership",
];

const EXPERIENCE_TERMS: &[&str] = &[
    "software engineer",
    "developer",
    "programmer",
    "architect",
    "lead",
    "senior",
    "junior",
    "intern",
    "manager",
    "director",
    "analyst",
    "consultant",
    "specialist",
    "coordinator",
    "administrator",
];

const EDUCATION_TERMS: &[&str] = &[
    "computer science",
    "engineering",
    "mathematics",
    "physics",
    "business",
    "mba",
    "bachelor",
    "master",
    "phd",
    "degree",
    "certification",
    "bootcamp",
    "course",
];

pub static SKILLS: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new(SKILL_TERMS));
pub static EXPERIENCE: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new(EXPERIENCE_TERMS));
pub static EDUCATION: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new(EDUCATION_TERMS));

/// An immutable term list plus its compiled matcher.
pub struct Lexicon {
    terms: &'static [&'static str],
    matcher: AhoCorasick,
}

impl Lexicon {
    fn new(terms: &'static [&'static str]) -> Self {
        // Leftmost-longest so "JavaScript" is not also reported as "Java".
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(terms)
            .expect("Failed to compile lexicon matcher");
        Self { terms, matcher }
    }

    /// Returns every term found in `text`, in lexicon order (not text order).
    pub fn find_in(&self, text: &str) -> Vec<&'static str> {
        let mut seen = vec![false; self.terms.len()];
        for mat in self.matcher.find_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        self.terms
            .iter()
            .zip(seen)
            .filter_map(|(term, hit)| hit.then_some(*term))
            .collect()
    }

    /// True if any term occurs in `text`.
    pub fn any_in(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(SKILLS.find_in("expert in PYTHON and docker"), vec!["Python", "Docker"]);
    }

    #[test]
    fn test_find_preserves_lexicon_order() {
        // Text order is Docker, React, JavaScript; lexicon order wins.
        assert_eq!(
            SKILLS.find_in("Docker, React, JavaScript"),
            vec!["JavaScript", "React", "Docker"]
        );
    }

    #[test]
    fn test_longer_term_shadows_contained_term() {
        assert_eq!(SKILLS.find_in("javascript"), vec!["JavaScript"]);
        assert_eq!(SKILLS.find_in("PostgreSQL"), vec!["PostgreSQL"]);
        assert_eq!(SKILLS.find_in("Java and JavaScript"), vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(EXPERIENCE.find_in("Team leadership"), vec!["lead"]);
        assert_eq!(SKILLS.find_in("GitHub Actions"), vec!["Git"]);
    }

    #[test]
    fn test_multi_word_terms() {
        assert_eq!(
            SKILLS.find_in("Built a rest api for machine learning models"),
            vec!["REST API", "Machine Learning"]
        );
    }

    #[test]
    fn test_duplicates_reported_once() {
        assert_eq!(SKILLS.find_in("AWS aws Aws"), vec!["AWS"]);
    }

    #[test]
    fn test_any_in() {
        assert!(EDUCATION.any_in("B.Sc. Computer Science"));
        assert!(!EDUCATION.any_in("self taught"));
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(SKILL_TERMS.len(), 25);
        assert_eq!(EXPERIENCE_TERMS.len(), 15);
        assert_eq!(EDUCATION_TERMS.len(), 13);
    }
}
