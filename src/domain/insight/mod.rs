//! Narrative insight around the statistical results
//!
//! Prompt rendering and decoding of the generated text. Generation itself is
//! delegated to a [`ProviderChain`](crate::domain::llm::ProviderChain).

mod parser;
mod prompts;

pub use parser::{
    parse_hypothesis_assessment, parse_questions, parse_recommendations, Confidence,
    HypothesisAssessment, NextStep, DEFAULT_QUESTIONS,
};
pub use prompts::{
    followup_questions_prompt, hypothesis_assessment_prompt, interpretation_prompt,
    recommendations_prompt,
};

use serde::{Deserialize, Serialize};

pub const FALLBACK_NARRATIVE: &str =
    "Statistical analysis completed. LLM interpretation unavailable.";

/// Generated commentary on an experiment's results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerativeAnalysis {
    pub interpretation_narrative: String,
    pub recommended_next_steps: Vec<NextStep>,
    pub generated_questions: Vec<String>,
}

impl GenerativeAnalysis {
    /// Narrative placeholder used when generation fails
    pub fn fallback_narrative() -> String {
        FALLBACK_NARRATIVE.to_string()
    }

    /// Next steps used when generation fails
    pub fn fallback_next_steps() -> Vec<NextStep> {
        vec![NextStep::new(
            "REVIEW RESULTS",
            Confidence::Medium,
            "Analyze the statistical significance and business impact.",
        )]
    }

    /// Questions used when generation fails
    pub fn fallback_questions() -> Vec<String> {
        [
            "What business factors might explain these results?",
            "How should these results influence the product roadmap?",
            "What additional validation is needed?",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks() {
        assert_eq!(GenerativeAnalysis::fallback_next_steps().len(), 1);
        assert_eq!(GenerativeAnalysis::fallback_questions().len(), 3);
        assert!(GenerativeAnalysis::fallback_narrative().contains("unavailable"));
    }
}
