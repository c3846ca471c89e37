//! Gemini generative-AI integration
//!
//! Turns a meal description or food photo into a draft nutrition estimate
//! through a single `generateContent` call, with strict enforcement of the
//! JSON output contract and recovery for the usual model formatting slips.

mod client;
mod extract;
mod types;

pub use client::GeminiClient;
pub use types::GeminiError;
