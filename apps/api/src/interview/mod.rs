// Mock-interview pipeline: job intake, question generation, persistence.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod store;
