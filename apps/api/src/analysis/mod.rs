// Argument analysis: prompt construction, the generation call, and lenient
// parsing of the model's JSON into a complete `AnalysisResult`.
// All generation calls go through llm_client; no direct OpenAI calls here.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
