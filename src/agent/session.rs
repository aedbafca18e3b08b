//! In-memory session store
//!
//! Maps a thread id to its conversation. Nothing is persisted; sessions live
//! as long as the process and are never evicted.

use std::collections::HashMap;

use crate::agent::conversation::Conversation;

/// Conversations keyed by thread id
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: HashMap<String, Conversation>,
    system_prompt: String,
}

impl SessionStore {
    /// Create a store whose new sessions open with `system_prompt`
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            sessions: HashMap::new(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Get a session, starting it if this id is new
    pub fn get_or_create(&mut self, session_id: &str) -> &mut Conversation {
        let prompt = &self.system_prompt;
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Conversation::with_system_prompt(prompt.clone()))
    }

    /// Get an existing session
    pub fn get(&self, session_id: &str) -> Option<&Conversation> {
        self.sessions.get(session_id)
    }

    /// Get an existing session for appending
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut Conversation> {
        self.sessions.get_mut(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
