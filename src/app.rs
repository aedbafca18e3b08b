//! Application context
//!
//! Everything the program needs is built once here from the configuration and
//! handed to the agent and REPL explicitly.

use std::sync::Arc;

use tracing::info;

use crate::agent::{Agent, Assistant};
use crate::catalog::Catalog;
use crate::cli::Repl;
use crate::core::{Config, Result};
use crate::llm::{GigaChatClient, LLMProvider};
use crate::tools::{
    console_trace, sales_tools, ConsoleOrderSink, OrderSink, ToolRegistry, TraceSink,
};

/// Configuration plus the shared read-only catalog
pub struct AppContext {
    config: Config,
    catalog: Arc<Catalog>,
}

impl AppContext {
    /// Load the catalog named by `config` (or the builtin one)
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = Catalog::load(config.catalog.path.as_deref())?;
        info!(products = catalog.len(), "catalog loaded");
        Ok(Self::with_catalog(config, catalog))
    }

    /// Use an already built catalog
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Sales tools reporting to the given sinks
    pub fn tools(&self, orders: Arc<dyn OrderSink>, trace: TraceSink) -> ToolRegistry {
        sales_tools(self.catalog.clone(), orders, trace)
    }

    /// Sales tools reporting to the console
    pub fn console_tools(&self) -> ToolRegistry {
        self.tools(Arc::new(ConsoleOrderSink), console_trace())
    }

    /// Agent on an arbitrary provider
    pub fn agent(&self, llm: Arc<dyn LLMProvider>, tools: ToolRegistry) -> Agent {
        Agent::with_config(
            llm,
            tools,
            self.config.gigachat.model.clone(),
            &self.config.agent,
        )
    }

    /// Agent on GigaChat with console tools
    pub fn gigachat_agent(&self) -> Result<Agent> {
        let llm = Arc::new(GigaChatClient::from_config(&self.config.gigachat)?);
        Ok(self.agent(llm, self.console_tools()))
    }

    /// REPL bound to the configured session
    pub fn repl<A: Assistant>(&self, assistant: A) -> Repl<A> {
        Repl::with_config(assistant, &self.config.agent)
    }
}
