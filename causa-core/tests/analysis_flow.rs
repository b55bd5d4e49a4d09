//! End-to-end render-cycle behavior without the network: selector, prompt,
//! canned report, revealer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use causa_core::demos::find_demo;
use causa_core::prompts::build_prompt;
use causa_core::session::{SessionState, select_scenario};
use causa_core::ui::streaming::{LineRevealer, Pacer, ReportView, RevealConfig};

struct CaptureView {
    frames: Vec<String>,
}

impl ReportView for CaptureView {
    fn replace(&mut self, content: &str) -> anyhow::Result<()> {
        self.frames.push(content.to_owned());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct CountingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

#[async_trait]
impl Pacer for CountingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}

#[tokio::test]
async fn demo_cycle_reveals_the_report_line_by_line() {
    let mut state = SessionState::new();
    let demo = find_demo("startup").unwrap();
    state.queue_demo(demo.text);

    // the queued demo outranks whatever sits in the entry field
    let scenario = select_scenario(&mut state, Some("typed but not submitted first")).unwrap();
    assert_eq!(scenario, demo.text);
    assert!(!state.auto_run);

    let prompt = build_prompt(&scenario);
    assert!(prompt.contains(demo.text));
    assert!(prompt.contains("## 🎯 Root Causes"));

    // a canned response stands in for the remote call
    let report = "## 📅 Timeline\n- signups spiked\n- conversion stalled\n";
    let pacer = CountingPacer::default();
    let revealer = LineRevealer::with_pacer(RevealConfig::from_millis(20), pacer.clone());
    let mut view = CaptureView { frames: Vec::new() };
    revealer.reveal(report, &mut view).await.unwrap();

    assert_eq!(view.frames.len(), 4);
    assert_eq!(view.frames[0], "## 📅 Timeline\n");
    assert_eq!(view.frames[1], "## 📅 Timeline\n- signups spiked\n");
    assert_eq!(view.frames[2], report);
    assert_eq!(view.frames[3], format!("{report}\n"));
    for pair in view.frames.windows(2) {
        assert!(pair[1].starts_with(pair[0].as_str()));
    }
    assert_eq!(pacer.pauses.lock().unwrap().len(), view.frames.len());

    state.finish_cycle();
    assert!(state.pending_text.is_empty());
    assert!(!state.auto_run);
}

#[tokio::test]
async fn submitted_entry_drives_a_cycle_when_no_demo_is_queued() {
    let mut state = SessionState::new();

    let scenario = select_scenario(
        &mut state,
        Some("After increasing delivery fees, user retention dropped."),
    )
    .unwrap();

    let prompt = build_prompt(&scenario);
    assert!(prompt.ends_with("Scenario:\nAfter increasing delivery fees, user retention dropped.\n"));

    let pacer = CountingPacer::default();
    let revealer = LineRevealer::with_pacer(RevealConfig::from_millis(0), pacer.clone());
    let mut view = CaptureView { frames: Vec::new() };
    revealer.reveal("- fees up\n- retention down", &mut view).await.unwrap();

    assert_eq!(view.frames.len(), 2);
    assert_eq!(view.frames[1], "- fees up\n- retention down\n");
}

#[test]
fn a_failed_call_leaves_the_session_ready_for_manual_entry() {
    let mut state = SessionState::new();
    let demo = find_demo("pricing").unwrap();
    state.queue_demo(demo.text);

    let selected = select_scenario(&mut state, None);
    assert_eq!(selected.as_deref(), Some(demo.text));
    // the remote call fails here, so finish_cycle never runs

    assert!(!state.auto_run, "the trigger is consumed before the call");
    assert_eq!(state.pending_text, demo.text, "queued text is not rolled back");

    // the stale queue does not re-trigger, but a fresh submission works
    assert_eq!(select_scenario(&mut state, None), None);
    let retry = select_scenario(&mut state, Some("try the scenario again"));
    assert_eq!(retry.as_deref(), Some("try the scenario again"));
}

#[test]
fn whitespace_entry_never_reaches_the_prompt_stage() {
    let mut state = SessionState::new();

    assert_eq!(select_scenario(&mut state, Some("   ")), None);
    assert_eq!(select_scenario(&mut state, Some("\n\t")), None);
    assert_eq!(state, SessionState::new());
}
