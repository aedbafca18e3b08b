//! Interactive REPL for Storefront
//!
//! Reads one line at a time, forwards it to the assistant under a fixed
//! session id, and prints the reply. An empty line (or end of input) ends the
//! conversation. Errors from the assistant end it too.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::debug;

use crate::agent::Assistant;
use crate::core::config::AgentConfig;
use crate::core::Result;

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl<A> {
    assistant: A,
    thread_id: String,
    turn_delay: Duration,
}

/// Strip the line terminator, keeping any other whitespace
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

impl<A: Assistant> Repl<A> {
    /// Create a REPL bound to one session
    pub fn new(assistant: A, thread_id: impl Into<String>, turn_delay: Duration) -> Self {
        Self {
            assistant,
            thread_id: thread_id.into(),
            turn_delay,
        }
    }

    /// Create a REPL from agent configuration
    pub fn with_config(assistant: A, config: &AgentConfig) -> Self {
        Self::new(
            assistant,
            config.thread_id.clone(),
            Duration::from_millis(config.turn_delay_ms),
        )
    }

    /// Run the REPL on stdin/stdout
    pub async fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout()).await
    }

    /// Run the REPL on the given input and output
    pub async fn run_with<R, W>(&mut self, mut input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Enter an empty line to exit.")?;

        loop {
            write!(output, "\nHuman: ")?;
            output.flush()?;

            let mut raw = String::new();
            if input.read_line(&mut raw)? == 0 {
                // EOF (Ctrl+D)
                writeln!(output)?;
                break;
            }

            let line = strip_line_ending(&raw);
            writeln!(output, "User: {}", line)?;

            if line.is_empty() {
                break;
            }

            let reply = self.assistant.invoke(line, &self.thread_id).await?;
            writeln!(output, "Assistant: {}", reply)?;
            output.flush()?;

            if !self.turn_delay.is_zero() {
                tokio::time::sleep(self.turn_delay).await;
            }
        }

        debug!(session = %self.thread_id, "conversation ended");
        Ok(())
    }

    /// The wrapped assistant
    pub fn assistant(&self) -> &A {
        &self.assistant
    }
}
