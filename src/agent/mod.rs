//! Agent module - orchestration and conversation management
//!
//! Contains the agent runtime that coordinates LLM calls, tool execution and
//! per-session memory.

pub mod conversation;
pub mod loop_state;
pub mod orchestrator;
pub mod session;

pub use conversation::Conversation;
pub use loop_state::AgentLoopState;
pub use orchestrator::{Agent, Assistant};
pub use session::SessionStore;
