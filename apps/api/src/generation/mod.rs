// CARR generation: prompt building, per-dimension report loop, request pipeline.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod pipeline;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_support;
