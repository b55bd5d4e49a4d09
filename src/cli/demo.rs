//! Built-in demo scenarios: list them or run one.

use anyhow::Result;
use causa_core::demos::{DEMO_SCENARIOS, find_demo};
use causa_core::gemini::Client;
use causa_core::session::SessionState;
use causa_core::ui::streaming::RevealConfig;
use console::style;

use super::run_cycle;

/// Handle the demo command: with no key, list the presets; with a key,
/// queue that scenario and run one render cycle.
pub async fn run(client: &Client, reveal: RevealConfig, key: Option<&str>) -> Result<()> {
    let Some(key) = key else {
        print_demo_list();
        return Ok(());
    };
    let Some(demo) = find_demo(key) else {
        anyhow::bail!("unknown demo '{key}'; run `causa demo` to list the presets");
    };

    println!("{} {}", style("Scenario:").blue().bold(), demo.title);
    for line in demo.text.lines() {
        println!("  {}", style(line).dim());
    }

    let mut state = SessionState::new();
    state.queue_demo(demo.text);
    run_cycle(client, reveal, &mut state, None).await?;

    Ok(())
}

pub(crate) fn print_demo_list() {
    println!("{}", style("Built-in demo scenarios:").yellow().bold());
    for demo in DEMO_SCENARIOS {
        // pad before styling; format width counts ANSI bytes
        let key = format!("{:<10}", demo.key);
        println!("  {} {}", style(key).cyan().bold(), demo.title);
    }
}
