//! Interactive analysis session.

use anyhow::Result;
use causa_core::demos::{DEMO_SCENARIOS, find_demo};
use causa_core::gemini::Client;
use causa_core::session::SessionState;
use causa_core::ui::streaming::RevealConfig;
use console::style;
use std::io::{self, Write};

use super::{demo::print_demo_list, run_cycle};

/// Handle the analyze command: a looped session of scenario entries and
/// demo triggers, one render cycle per interaction.
pub async fn run_session(client: &Client, reveal: RevealConfig) -> Result<()> {
    print_banner(client.model());

    let stdin = io::stdin();
    let mut state = SessionState::new();

    loop {
        print!("{} ", style("Scenario:").blue().bold());
        io::stdout().flush().ok();

        let mut first = String::new();
        match stdin.read_line(&mut first) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = first.trim_end_matches(['\r', '\n']);

        let submitted: Option<String>;
        if let Some(command) = line.trim().strip_prefix('/') {
            if handle_command(command, &mut state) {
                break;
            }
            if !state.auto_run {
                continue;
            }
            // a queued demo runs immediately, no submission needed
            submitted = None;
        } else if line.trim().is_empty() {
            continue;
        } else {
            submitted = Some(read_entry(&stdin, line.to_string()));
        }

        if let Err(err) = run_cycle(client, reveal, &mut state, submitted.as_deref()).await {
            println!("{} {err:#}", style("[ERROR]").red().bold());
        }
        println!();
    }

    Ok(())
}

fn print_banner(model: &str) {
    println!("{}", style("🔥 Causal Analyzer").cyan().bold());
    println!(
        "{}",
        style("Analyze root causes, assumptions & counterfactuals").dim()
    );
    println!("Model: {model}");
    println!();
    println!("{}", style("⚡ Quick demos:").yellow().bold());
    for demo in DEMO_SCENARIOS {
        println!("  /demo {:<10} {}", demo.key, style(demo.title).dim());
    }
    println!();
    println!(
        "{}",
        style("Describe a scenario and finish with an empty line, or /quit to exit.").dim()
    );
    println!();
}

/// Collect a multi-line entry; an empty line submits it.
fn read_entry(stdin: &io::Stdin, first: String) -> String {
    let mut entry = first;
    loop {
        let mut next = String::new();
        match stdin.read_line(&mut next) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let next = next.trim_end_matches(['\r', '\n']);
        if next.trim().is_empty() {
            break;
        }
        entry.push('\n');
        entry.push_str(next);
    }
    entry
}

/// Dispatch a slash command. Returns true when the session should end.
fn handle_command(command: &str, state: &mut SessionState) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("demo") => match parts.next() {
            Some(key) => match find_demo(key) {
                Some(demo) => {
                    state.queue_demo(demo.text);
                    println!("{} {}", style("Queued:").green().bold(), demo.title);
                }
                None => println!(
                    "{} unknown demo '{key}'; try /demos",
                    style("!").yellow().bold()
                ),
            },
            None => print_demo_list(),
        },
        Some("demos") => print_demo_list(),
        Some("quit") | Some("exit") => return true,
        Some(other) => println!("{} unknown command: /{other}", style("!").yellow().bold()),
        None => {}
    }
    false
}
