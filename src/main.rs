//! Storefront - Conversational Phone Sales Assistant
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use storefront::{AppContext, Config};
use tracing_subscriber::EnvFilter;

/// Storefront - chat with a phone sales assistant
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session id the conversation is stored under
    #[arg(long, short = 't')]
    thread: Option<String>,

    /// GigaChat model identifier
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Catalog file (.json or .toml) instead of the builtin list
    #[arg(long, short = 'c')]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("storefront=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load()?;

    // Apply CLI overrides
    if let Some(thread) = args.thread {
        config.agent.thread_id = thread;
    }

    if let Some(model) = args.model {
        config.gigachat.model = Some(model);
    }

    if let Some(catalog) = args.catalog {
        config.catalog.path = Some(catalog);
    }

    if args.debug {
        config.agent.debug = true;
    }

    if args.print_config {
        println!("{}", config.to_display_toml());
        return Ok(());
    }

    init_tracing(config.agent.debug);

    let app = AppContext::from_config(config)?;
    let agent = app.gigachat_agent()?;

    let mut repl = app.repl(agent);
    repl.run().await?;

    Ok(())
}
