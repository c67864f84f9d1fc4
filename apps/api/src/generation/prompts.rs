// Prompt text for the per-dimension CARR report.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{Map, Value};

use crate::llm_client::prompts::{EVALUATOR_TONE_INSTRUCTION, FORMAL_REPORT_INSTRUCTION};

/// The six sections the paginator expects, in order.
pub const CARR_SECTIONS: &str = "\
1. CSA Score: State the candidate's level (e.g., “L4 – Self-Designer (UBS: Strategist)”) and briefly justify this level using observed behavior.
2. CSA Summary: Describe the candidate’s current level of maturity and behavioral patterns in this dimension using full sentences.
3. RCA (Root Cause Analysis): Identify the emotional, cognitive, or structural blockers that are limiting their evolution to the next level.
4. Growth Nudge: Offer one clear and practical recommendation to help them grow further in this dimension.
5. Role Readiness Mapping: Suggest which UBS-aligned role fits them now, and explain why.
6. Suggested Milestone or Drill: Propose a stretch experience they should attempt, ideally involving real-world application.";

/// Numbers the candidate's answers: `{i}. {question}\n"{answer}"`, blank-line separated.
pub fn format_answers(answers: &Map<String, Value>) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, (question, answer))| {
            let answer = match answer {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}. {question}\n\"{answer}\"", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the evaluator prompt for one dimension.
pub fn build_carr_prompt(
    dimension: &str,
    answers: &Map<String, Value>,
    rubric_text: &str,
    template_text: &str,
) -> String {
    let answer_section = format_answers(answers);
    let question_count = answers.len();

    format!(
        "You are an evaluator preparing a Career Acceleration Readiness Report (CARR) for a candidate.

Dimension: {dimension}

Below are the candidate’s answers to {question_count} deep-reflection questions in this dimension:

{answer_section}

Rubric (Level-wise Scoring Criteria for {dimension}):
{rubric_text}

Career Acceleration Readiness Report Template:
{template_text}

Now write a Career Acceleration Readiness Report for this dimension in a polished, narrative format, suitable to include directly in a PDF feedback document.

Your report should include the following six sections, in numbered order, each written as a paragraph:

{CARR_SECTIONS}

{FORMAL_REPORT_INSTRUCTION}

{EVALUATOR_TONE_INSTRUCTION}

Make sure each of the 6 sections is clearly numbered and follows the style of an executive feedback document."
    )
    .trim()
    .to_string()
}
