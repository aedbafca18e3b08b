//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront::core::{Message, Result, StorefrontError, ToolDefinition};
use storefront::llm::{GenerateOptions, LLMProvider, LLMResponse};
use storefront::tools::{Order, OrderSink, TraceSink};

/// Provider that replays canned responses and records what it was sent
#[derive(Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<LLMResponse>>,
    requests: Mutex<Vec<Vec<Message>>>,
    tools_seen: Mutex<Vec<Vec<String>>>,
    options_seen: Mutex<Vec<GenerateOptions>>,
}

impl ScriptedProvider {
    pub fn new(responses: impl IntoIterator<Item = LLMResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Default::default()
        })
    }

    /// Messages sent on each call
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    /// Tool names offered on each call
    pub fn tools_seen(&self) -> Vec<Vec<String>> {
        self.tools_seen.lock().unwrap().clone()
    }

    /// Sampling options passed on each call
    pub fn options_seen(&self) -> Vec<GenerateOptions> {
        self.options_seen.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn chat_with_tools(
        &self,
        _model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: Option<GenerateOptions>,
    ) -> Result<LLMResponse> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.options_seen
            .lock()
            .unwrap()
            .push(options.unwrap_or_default());
        self.tools_seen
            .lock()
            .unwrap()
            .push(tools.iter().map(|t| t.name.clone()).collect());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| StorefrontError::upstream("script exhausted"))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Order sink that keeps every order
#[derive(Default)]
pub struct RecordingOrders {
    pub orders: Mutex<Vec<Order>>,
}

impl OrderSink for RecordingOrders {
    fn record(&self, order: Order) {
        self.orders.lock().unwrap().push(order);
    }
}

/// Trace sink that keeps every tool name it hears
pub fn recording_trace() -> (TraceSink, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let sink: TraceSink = Arc::new(move |name: &str| log.lock().unwrap().push(name.to_string()));
    (sink, seen)
}
