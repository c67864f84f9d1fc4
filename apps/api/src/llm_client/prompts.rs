// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Output-format rules for any prompt whose result is laid out into the PDF.
/// The paginator splits on numbered lines, so numbering must survive untouched.
pub const FORMAL_REPORT_INSTRUCTION: &str = "\
Important Formatting Instructions:
- Write this like a formal report — not a chat, summary, or bullet list.
- Do NOT add “Here’s your report” or any extra context.
- Use paragraph structure with numeric section labels as shown above.
- Avoid markdown, bold, bullets, or conversational tone.";

/// Tone fragment for evaluator-style reports.
pub const EVALUATOR_TONE_INSTRUCTION: &str =
    "Maintain the tone of a reflective, senior evaluator giving clear, constructive insight.";
