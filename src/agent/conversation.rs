//! Conversation history management
//!
//! Append-only message history for one session.

use crate::core::Message;

/// Manages conversation history
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Message history, oldest first
    messages: Vec<Message>,
    /// System prompt (always first)
    system_prompt: Option<String>,
}

impl Conversation {
    /// Create a new conversation
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
        }
    }

    /// Create a conversation that opens with a system prompt
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: Some(prompt.into()),
        }
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Get all messages including system prompt
    pub fn get_messages(&self) -> Vec<Message> {
        let mut result = Vec::with_capacity(self.messages.len() + 1);

        if let Some(ref prompt) = self.system_prompt {
            result.push(Message::system(prompt.clone()));
        }

        result.extend(self.messages.iter().cloned());
        result
    }

    /// Get messages without system prompt
    pub fn history(&self) -> &[Message] {
        &self.messages
    }

    /// Drop every message after the first `len`
    pub fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }

    /// Get message count
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolCall;
    use serde_json::json;

    #[test]
    fn test_conversation_basic() {
        let mut conv = Conversation::new();
        conv.push(Message::user("Hello"));
        conv.push(Message::assistant("Hi there!"));

        assert_eq!(conv.len(), 2);
        assert_eq!(conv.history()[1].content, "Hi there!");
    }

    #[test]
    fn test_system_prompt() {
        let mut conv = Conversation::with_system_prompt("You sell phones");
        conv.push(Message::user("Hello"));

        let messages = conv.get_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(conv.history().len(), 1);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut conv = Conversation::with_system_prompt("You sell phones");
        conv.push(Message::user("Hello"));
        let mark = conv.len();
        conv.push(Message::user("Which phones?"));
        conv.push(Message::assistant_tool_calls(
            "",
            vec![ToolCall::new("get_all_phone_names", json!({}))],
        ));

        conv.truncate(mark);

        assert_eq!(conv.len(), 1);
        assert_eq!(conv.history()[0].content, "Hello");
        assert_eq!(conv.get_messages()[0].role, "system");
    }
}
