//! LLM module - Language Model integrations
//!
//! Provides the provider abstraction and the GigaChat implementation.

pub mod gigachat;
pub mod traits;

pub use gigachat::GigaChatClient;
pub use traits::{GenerateOptions, LLMProvider, LLMResponse, TokenUsage};
