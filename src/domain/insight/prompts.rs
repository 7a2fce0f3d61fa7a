//! Prompt builders for hypothesis review and results interpretation

use crate::domain::statistics::ConversionMetrics;

/// Prompt asking for a clarity score of an experiment hypothesis
pub fn hypothesis_assessment_prompt(hypothesis: &str) -> String {
    format!(
        r#"Please assess the clarity and structure of this A/B testing hypothesis:

"{hypothesis}"

Evaluate the hypothesis on the following criteria:
1. Clarity: Is the hypothesis clearly stated and understandable?
2. Specificity: Does it specify what will be tested and what outcome is expected?
3. Measurability: Is the expected outcome measurable?
4. Structure: Does it follow a good hypothesis format (e.g., "We believe that...")

Provide a brief assessment (2-3 sentences) with a clarity score from 1-10 and specific suggestions for improvement if needed.

Format your response as:
Score: X/10
Assessment: [Your assessment here]
Suggestions: [Improvement suggestions if score < 8, or "None needed" if score >= 8]
"#
    )
}

/// Prompt asking for a plain-language reading of the results
pub fn interpretation_prompt(
    hypothesis: &str,
    metric_name: &str,
    metrics: &ConversionMetrics,
    pm_notes: Option<&str>,
) -> String {
    let context = context_line(pm_notes);

    format!(
        r#"You are a statistical consultant helping a Product Manager interpret A/B test results.

Original Hypothesis: "{hypothesis}"
Primary Metric: {metric_name}

Statistical Results:
Control conversion rate: {control}
Treatment conversion rate: {treatment}
Relative lift: {lift}
P-value: {p_value}
Statistical significance: {significant}

{context}

Please provide a plain-English interpretation of these results. Consider:
1. What do these results mean in practical terms?
2. Are the results statistically significant and practically significant?
3. What factors might explain these results?
4. What are the key takeaways for the Product Manager?

Keep your explanation accessible to someone who is data-literate but not a statistician.
"#,
        control = metrics.control_conversion_rate,
        treatment = metrics.treatment_conversion_rate,
        lift = metrics.relative_lift,
        p_value = metrics.p_value,
        significant = metrics.is_significant,
    )
}

/// Prompt asking for numbered next steps with a confidence level each
pub fn recommendations_prompt(
    hypothesis: &str,
    metrics: &ConversionMetrics,
    pm_notes: Option<&str>,
) -> String {
    format!(
        r#"Based on these A/B test results, provide 3-5 specific, actionable next steps for the Product Manager:

Hypothesis: "{hypothesis}"
Statistical significance: {significant}
P-value: {p_value}
Relative lift: {lift}
{context}

For each recommendation, provide:
1. The specific action (e.g., "SHIP TO ALL USERS", "ITERATE AND RE-TEST", "ABANDON HYPOTHESIS")
2. A brief rationale (1-2 sentences)
3. A confidence level (High/Medium/Low)

Format as:
1. ACTION: [Action] - CONFIDENCE: [Level]
   Rationale: [Explanation]

2. ACTION: [Action] - CONFIDENCE: [Level]
   Rationale: [Explanation]

[Continue for 3-5 recommendations]
"#,
        significant = metrics.is_significant,
        p_value = metrics.p_value,
        lift = metrics.relative_lift,
        context = context_line(pm_notes),
    )
}

/// Prompt asking for follow-up questions worth investigating
pub fn followup_questions_prompt(
    hypothesis: &str,
    metrics: &ConversionMetrics,
    pm_notes: Option<&str>,
) -> String {
    format!(
        r#"Based on these A/B test results, generate 5 critical follow-up questions the Product Manager should investigate:

Hypothesis: "{hypothesis}"
Results: {significant} significance, {lift} relative lift
{context}

Focus on questions that would:
1. Deepen understanding of user behavior
2. Identify potential confounding factors
3. Explore segmentation opportunities
4. Guide future experiment design
5. Inform broader product strategy

Format as a numbered list of 5 questions, each being specific and actionable.
"#,
        significant = metrics.is_significant,
        lift = metrics.relative_lift,
        context = context_line(pm_notes),
    )
}

fn context_line(pm_notes: Option<&str>) -> String {
    pm_notes
        .map(|notes| format!("PM Context: {notes}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::statistics::calculate_conversion_metrics;

    #[test]
    fn test_hypothesis_prompt_embeds_hypothesis() {
        let prompt = hypothesis_assessment_prompt("We believe a bigger button lifts signups");

        assert!(prompt.contains("\"We believe a bigger button lifts signups\""));
        assert!(prompt.contains("Score: X/10"));
    }

    #[test]
    fn test_interpretation_prompt_includes_metrics() {
        let metrics = calculate_conversion_metrics(10000, 500, 10000, 600);
        let prompt = interpretation_prompt("hypothesis", "signup_rate", &metrics, None);

        assert!(prompt.contains("Primary Metric: signup_rate"));
        assert!(prompt.contains("Control conversion rate: 0.05"));
        assert!(prompt.contains("Treatment conversion rate: 0.06"));
        assert!(prompt.contains("Statistical significance: true"));
        assert!(!prompt.contains("PM Context"));
    }

    #[test]
    fn test_pm_notes_are_included() {
        let metrics = calculate_conversion_metrics(1000, 50, 1000, 60);

        let recommendations =
            recommendations_prompt("hypothesis", &metrics, Some("Holiday traffic spike"));
        let questions = followup_questions_prompt("hypothesis", &metrics, Some("Holiday"));

        assert!(recommendations.contains("PM Context: Holiday traffic spike"));
        assert!(recommendations.contains("ACTION: [Action] - CONFIDENCE: [Level]"));
        assert!(questions.contains("PM Context: Holiday"));
        assert!(questions.contains("Results: false significance, 0.2 relative lift"));
    }
}
