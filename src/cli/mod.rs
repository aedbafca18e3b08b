//! CLI module - command-line interface
//!
//! Contains the conversation REPL.

pub mod repl;

pub use repl::Repl;
