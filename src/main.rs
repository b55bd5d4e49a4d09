mod cli;

use anyhow::{Context, Result};
use causa_core::config::api_keys;
use causa_core::config::constants::defaults;
use causa_core::gemini::Client;
use causa_core::ui::streaming::RevealConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "causa",
    version,
    about = "Terminal causal analyzer powered by Gemini: root causes, assumptions & counterfactuals"
)]
struct Cli {
    /// Gemini model ID, e.g. gemini-2.5-flash
    #[arg(long, global = true, default_value = defaults::DEFAULT_MODEL)]
    model: String,

    /// API key env var to read (checks this, then GOOGLE_API_KEY)
    #[arg(long, global = true, default_value = defaults::DEFAULT_API_KEY_ENV)]
    api_key_env: String,

    /// Pause between revealed report lines, in milliseconds (0 disables pacing)
    #[arg(long, global = true, default_value_t = defaults::DEFAULT_REVEAL_DELAY_MS)]
    reveal_delay_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive analysis session with one-keystroke demo scenarios
    Analyze,

    /// Analyze a single scenario given on the command line
    Ask { scenario: Vec<String> },

    /// List the built-in demo scenarios, or run one by key
    Demo { key: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    api_keys::load_dotenv();

    let api_key = api_keys::resolve_api_key(&args.api_key_env)
        .context("cannot construct the Gemini client")?;
    let client = Client::new(api_key, args.model.clone());
    let reveal = RevealConfig::from_millis(args.reveal_delay_ms);

    match args.command.unwrap_or(Commands::Analyze) {
        Commands::Analyze => cli::analyze::run_session(&client, reveal).await,
        Commands::Ask { scenario } => cli::ask::run(&client, reveal, &scenario.join(" ")).await,
        Commands::Demo { key } => cli::demo::run(&client, reveal, key.as_deref()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
