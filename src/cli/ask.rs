//! One-shot scenario analysis.

use anyhow::Result;
use causa_core::gemini::Client;
use causa_core::session::SessionState;
use causa_core::ui::streaming::RevealConfig;
use console::style;

use super::run_cycle;

/// Handle the ask command - a single scenario taken from the command line.
pub async fn run(client: &Client, reveal: RevealConfig, scenario: &str) -> Result<()> {
    println!("{}", style("Single Scenario Mode").blue().bold());
    println!("Model: {}", client.model());

    let mut state = SessionState::new();
    if !run_cycle(client, reveal, &mut state, Some(scenario)).await? {
        anyhow::bail!("No scenario provided. Use: causa ask \"Describe events, decisions, KPIs, or timeline\"");
    }

    Ok(())
}
