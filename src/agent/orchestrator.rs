//! Agent orchestrator
//!
//! Main agent that coordinates the model, the tools, and per-session history.
//! Implements a ReAct-style loop: the model either answers or asks for a tool,
//! the tool result is appended to the session, and the model is asked again.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::agent::loop_state::AgentLoopState;
use crate::agent::session::SessionStore;
use crate::core::config::AgentConfig;
use crate::core::{Message, Result, StorefrontError};
use crate::llm::gigachat::DEFAULT_MODEL;
use crate::llm::{GenerateOptions, LLMProvider};
use crate::tools::ToolRegistry;

/// Something that answers a user message within a session
#[async_trait]
pub trait Assistant: Send {
    /// Forward one user message and return the assistant's reply
    async fn invoke(&mut self, message: &str, session_id: &str) -> Result<String>;
}

/// Main agent that orchestrates LLM and tools
pub struct Agent {
    /// LLM client
    llm: Arc<dyn LLMProvider>,
    /// Model identifier sent with every request
    model: String,
    /// Tool registry
    tools: ToolRegistry,
    /// Conversation history per session
    sessions: SessionStore,
    /// Model calls allowed per user message
    max_turns: usize,
    /// Sampling options
    options: GenerateOptions,
}

/// Encode a tool result as a function message body
///
/// GigaChat expects a JSON object, so scalar results (the name list, or
/// `null` from the order tool) are wrapped under `result`.
pub fn function_content(value: &Value) -> String {
    if value.is_object() {
        value.to_string()
    } else {
        json!({ "result": value }).to_string()
    }
}

impl Agent {
    /// Create an agent with default settings
    pub fn new(llm: Arc<dyn LLMProvider>, tools: ToolRegistry) -> Self {
        Self::with_config(llm, tools, None, &AgentConfig::default())
    }

    /// Create an agent with custom configuration
    pub fn with_config(
        llm: Arc<dyn LLMProvider>,
        tools: ToolRegistry,
        model: Option<String>,
        config: &AgentConfig,
    ) -> Self {
        Self {
            llm,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            tools,
            sessions: SessionStore::new(config.system_prompt.clone()),
            max_turns: config.max_turns,
            options: GenerateOptions {
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
        }
    }

    /// Process a user message in a session using the ReAct loop
    ///
    /// The loop continues until the model produces a response without tool
    /// calls. Exceeding the turn budget is an error. A failed turn leaves the
    /// session history as it was before the message.
    pub async fn invoke(&mut self, message: &str, session_id: &str) -> Result<String> {
        let checkpoint = self.sessions.get_or_create(session_id).len();

        let result = self.run_turns(message, session_id).await;

        if result.is_err() {
            if let Some(conversation) = self.sessions.get_mut(session_id) {
                debug!(
                    session = session_id,
                    dropped = conversation.len() - checkpoint,
                    "rolling back failed turn"
                );
                conversation.truncate(checkpoint);
            }
        }

        result
    }

    async fn run_turns(&mut self, message: &str, session_id: &str) -> Result<String> {
        let definitions = self.tools.definitions();
        let conversation = self.sessions.get_or_create(session_id);
        conversation.push(Message::user(message));

        let mut state = AgentLoopState::new(self.max_turns);

        while state.should_continue() {
            state.next_turn();
            debug!(session = session_id, turn = state.turn, "calling model");

            let response = self
                .llm
                .chat_with_tools(
                    &self.model,
                    &conversation.get_messages(),
                    &definitions,
                    Some(self.options.clone()),
                )
                .await?;

            if response.tool_calls.is_empty() {
                conversation.push(Message::assistant(response.content.clone()));
                debug!(
                    session = session_id,
                    turns = state.turn,
                    tools = ?state.tools_called,
                    "reply ready"
                );
                return Ok(response.content);
            }

            conversation.push(Message::assistant_tool_calls(
                response.content.clone(),
                response.tool_calls.clone(),
            ));

            for call in &response.tool_calls {
                let content = match self.tools.execute(call) {
                    Ok(value) => function_content(&value),
                    Err(e) => {
                        warn!(tool = %call.name, error = %e, "tool call failed");
                        json!({ "error": e.to_string() }).to_string()
                    }
                };
                conversation.push(Message::function(call.name.clone(), content));
                state.record_tool(call.name.clone());
            }
        }

        Err(StorefrontError::TurnLimit(self.max_turns))
    }

    /// History of a session, without the system prompt
    pub fn history(&self, session_id: &str) -> Option<&[Message]> {
        self.sessions.get(session_id).map(|c| c.history())
    }

    /// Number of sessions started
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Model identifier in use
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Provider name
    pub fn provider_name(&self) -> &str {
        self.llm.name()
    }
}

#[async_trait]
impl Assistant for Agent {
    async fn invoke(&mut self, message: &str, session_id: &str) -> Result<String> {
        Agent::invoke(self, message, session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_content_wraps_scalars() {
        assert_eq!(function_content(&Value::Null), r#"{"result":null}"#);
        assert_eq!(function_content(&json!("A, B")), r#"{"result":"A, B"}"#);
        assert_eq!(
            function_content(&json!({"error": "not found"})),
            r#"{"error":"not found"}"#
        );
    }
}
