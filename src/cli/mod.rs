//! Command-line interface module
//!
//! Per-command handlers plus the render cycle they all share.

pub mod analyze;
pub mod ask;
pub mod demo;

use anyhow::Result;
use causa_core::gemini::Client;
use causa_core::prompts::build_prompt;
use causa_core::session::{SessionState, select_scenario};
use causa_core::ui::spinner::Spinner;
use causa_core::ui::streaming::{LineRevealer, RevealConfig, TerminalReportView};
use console::style;

/// Run one render cycle: pick a scenario, call Gemini, reveal the report.
///
/// Returns `Ok(false)` when nothing was selected, so no call was made.
/// The queued state is only cleared after a completed call; a failure
/// leaves it for the caller to inspect.
pub(crate) async fn run_cycle(
    client: &Client,
    reveal: RevealConfig,
    state: &mut SessionState,
    submitted: Option<&str>,
) -> Result<bool> {
    let Some(scenario) = select_scenario(state, submitted) else {
        return Ok(false);
    };

    let prompt = build_prompt(&scenario);
    let spinner = Spinner::new("Gemini is reasoning step-by-step...");
    let outcome = client.generate_analysis(&prompt).await;
    spinner.finish_and_clear();
    let report = outcome?;

    println!();
    println!("{}", style("📊 Analysis Report").cyan().bold());
    println!();

    let revealer = LineRevealer::new(reveal);
    let mut view = TerminalReportView::new();
    revealer.reveal(&report, &mut view).await?;

    state.finish_cycle();
    Ok(true)
}
