//! Agent loop state management
//!
//! Tracks one user turn through the reasoning loop: how many model calls it
//! has used and which tools the model asked for.

/// State of the agent reasoning loop
#[derive(Debug, Clone)]
pub struct AgentLoopState {
    /// Model calls made so far
    pub turn: usize,
    /// Maximum allowed model calls
    pub max_turns: usize,
    /// Tools invoked, in order
    pub tools_called: Vec<String>,
}

impl AgentLoopState {
    /// Create a new loop state with the given max turns
    pub fn new(max_turns: usize) -> Self {
        Self {
            turn: 0,
            max_turns,
            tools_called: Vec::new(),
        }
    }

    /// Check if another model call is allowed
    pub fn should_continue(&self) -> bool {
        self.turn < self.max_turns
    }

    /// Record a tool the model invoked
    pub fn record_tool(&mut self, name: impl Into<String>) {
        self.tools_called.push(name.into());
    }

    /// Increment the turn counter
    pub fn next_turn(&mut self) {
        self.turn += 1;
    }
}
