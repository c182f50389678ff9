//! Gemini `generateContent` adapter

mod client;
mod dto;
mod prompts;

pub use client::GeminiClient;
pub use prompts::{description_prompt, illustration_prompt};
