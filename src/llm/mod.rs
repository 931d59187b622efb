//! Boundary to the language-model provider: chat completions for text
//! generation and an embeddings endpoint for semantic search.

mod chat;
mod embeddings;

pub use chat::*;
pub use embeddings::*;

use crate::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Free,
    /// Constrains the model to emit a syntactically valid JSON object.
    Json,
}

/// Per-call sampling configuration handed to [`ChatModel::invoke`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
    pub response_format: ResponseFormat,
    pub max_tokens: Option<u32>,
}

impl SamplingParams {
    /// Used for every trivia generation call.
    pub const TRIVIA: Self = Self {
        temperature: 0.5,
        top_p: Some(0.9),
        presence_penalty: Some(0.2),
        frequency_penalty: Some(0.3),
        response_format: ResponseFormat::Json,
        max_tokens: None,
    };

    pub const FREE_TEXT: Self = Self {
        temperature: 0.7,
        top_p: None,
        presence_penalty: None,
        frequency_penalty: None,
        response_format: ResponseFormat::Free,
        max_tokens: None,
    };
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends one system instruction and one user message, returns the
    /// generated text with surrounding whitespace removed.
    async fn invoke(&self, system: &str, user: &str, params: &SamplingParams) -> Result<String>;
}

#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Returns one vector per input text, in input order.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
