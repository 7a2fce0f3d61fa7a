//! Best-effort decoding of free-text model output
//!
//! Every parser returns a usable value: fields that cannot be found are
//! replaced with fixed defaults rather than reported as errors.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCORE: u8 = 5;
pub const DEFAULT_ASSESSMENT: &str = "Unable to assess hypothesis clarity.";
pub const DEFAULT_SUGGESTIONS: &str = "No specific suggestions available.";

pub const DEFAULT_ACTION: &str = "REVIEW RESULTS";
pub const DEFAULT_RATIONALE: &str = "Further analysis needed based on the current results.";

pub const DEFAULT_QUESTIONS: [&str; 5] = [
    "What factors might have influenced these results?",
    "How do these results vary across different user segments?",
    "What would be the business impact of implementing this change?",
    "What additional metrics should be analyzed?",
    "How confident are we in the long-term sustainability of these results?",
];

/// Questions shorter than this are treated as noise
const MIN_QUESTION_CHARS: usize = 10;

static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Score:\s*(\d+)").unwrap());

static ASSESSMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Assessment:\s*(.*)").unwrap());

static SUGGESTIONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Suggestions:\s*(.*)").unwrap());

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s*").unwrap());

static RECOMMENDATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)^ACTION:\s*(.*?)\s*-\s*CONFIDENCE:\s*(high|medium|low)\b[^\n]*\n\s*Rationale:\s*(.*)$",
    )
    .unwrap()
});

// ============================================================================
// HypothesisAssessment
// ============================================================================

/// Clarity review of an experiment hypothesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisAssessment {
    /// Clarity score between 1 and 10
    pub score: u8,
    pub assessment: String,
    pub suggestions: String,
}

impl HypothesisAssessment {
    /// Placeholder used when no model output could be obtained
    pub fn unavailable(reason: impl fmt::Display) -> Self {
        Self {
            score: DEFAULT_SCORE,
            assessment: format!("LLM assessment failed: {reason}. Using fallback assessment."),
            suggestions: "Consider ensuring your hypothesis is specific and measurable."
                .to_string(),
        }
    }
}

/// Parse `Score:`, `Assessment:` and `Suggestions:` lines
pub fn parse_hypothesis_assessment(text: &str) -> HypothesisAssessment {
    let score = SCORE_PATTERN
        .captures(text)
        // Digits only, so parsing fails solely on overflow
        .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX))
        .map(|score| score.clamp(1, 10) as u8)
        .unwrap_or(DEFAULT_SCORE);

    HypothesisAssessment {
        score,
        assessment: first_line_after(&ASSESSMENT_PATTERN, text)
            .unwrap_or_else(|| DEFAULT_ASSESSMENT.to_string()),
        suggestions: first_line_after(&SUGGESTIONS_PATTERN, text)
            .unwrap_or_else(|| DEFAULT_SUGGESTIONS.to_string()),
    }
}

fn first_line_after(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

// ============================================================================
// NextStep
// ============================================================================

/// How strongly a recommendation is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("Unknown confidence level: {}", other)),
        }
    }
}

/// A recommended action after an experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub action: String,
    pub confidence: Confidence,
    pub rationale: String,
}

impl NextStep {
    pub fn new(
        action: impl Into<String>,
        confidence: Confidence,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            confidence,
            rationale: rationale.into(),
        }
    }
}

/// Parse numbered `ACTION: … - CONFIDENCE: …` blocks with a `Rationale:` line
///
/// Falls back to a single "review results" step when nothing matches.
pub fn parse_recommendations(text: &str) -> Vec<NextStep> {
    let steps: Vec<NextStep> = numbered_items(text)
        .into_iter()
        .filter_map(|item| {
            let caps = RECOMMENDATION_PATTERN.captures(item)?;
            let confidence = caps[2].parse().ok()?;

            Some(NextStep::new(
                caps[1].trim(),
                confidence,
                caps[3].trim(),
            ))
        })
        .collect();

    if steps.is_empty() {
        return vec![NextStep::new(
            DEFAULT_ACTION,
            Confidence::Medium,
            DEFAULT_RATIONALE,
        )];
    }

    steps
}

/// Parse a numbered list of questions
///
/// Falls back to a fixed list when no item is long enough to be a question.
pub fn parse_questions(text: &str) -> Vec<String> {
    let questions: Vec<String> = numbered_items(text)
        .into_iter()
        .map(str::trim)
        .filter(|question| question.chars().count() > MIN_QUESTION_CHARS)
        .map(str::to_string)
        .collect();

    if questions.is_empty() {
        return DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }

    questions
}

/// Split text into the bodies of `N.`-prefixed items, markers removed
fn numbered_items(text: &str) -> Vec<&str> {
    let markers: Vec<_> = NUMBERED_ITEM.find_iter(text).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            &text[marker.end()..end]
        })
        .collect()
}
