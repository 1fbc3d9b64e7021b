mod client;
mod prompt;

pub use client::{DEFAULT_MODEL, OPENAI_ENDPOINT, TranslationClient, TranslationRequest};
pub use prompt::build_prompt;
