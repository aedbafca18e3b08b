//! Storefront - Conversational Phone Sales Assistant
//!
//! Wraps a GigaChat function-calling agent around three tools backed by an
//! in-memory phone catalog: list the phones, look one up by name, and take
//! an order.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Catalog**: The read-only product list
//! - **Tools**: Sales tools, call tracing, and the tool registry
//! - **LLM**: Provider abstraction with the GigaChat implementation
//! - **Agent**: Reasoning loop and per-session memory
//! - **CLI**: The conversation REPL
//! - **App**: Builds all of the above from configuration
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront::{AppContext, Config};
//!
//! #[tokio::main]
//! async fn main() -> storefront::Result<()> {
//!     let app = AppContext::from_config(Config::load()?)?;
//!     let mut agent = app.gigachat_agent()?;
//!
//!     let reply = agent.invoke("Which phones do you have?", "demo").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod llm;
pub mod tools;

// Re-export commonly used items
pub use agent::{Agent, Assistant};
pub use app::AppContext;
pub use catalog::{Catalog, Product};
pub use cli::Repl;
pub use core::{Config, Result, StorefrontError};
