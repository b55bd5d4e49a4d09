//! Incremental line-by-line reveal of a completed analysis report.
//!
//! The report arrives from the API as one finished string; the revealer
//! re-displays a growing prefix of its lines with a fixed pause between
//! increments, so the terminal output reads like progressive generation.

use std::io::{self, Write};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::config::constants::defaults;
use crate::ui::markdown;

/// Pacing for the reveal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Pause inserted after each revealed line.
    pub line_delay: Duration,
}

impl RevealConfig {
    pub fn from_millis(delay_ms: u64) -> Self {
        Self {
            line_delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::from_millis(defaults::DEFAULT_REVEAL_DELAY_MS)
    }
}

/// Clock seam for the reveal loop. Tests swap in a recording pacer so no
/// real time passes.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Production pacer backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

/// Receiver for each successive display state of the report.
///
/// `replace` is handed the full accumulated text after every revealed line;
/// each call's content extends the previous call's content by exactly one
/// newline-terminated line.
pub trait ReportView {
    fn replace(&mut self, content: &str) -> anyhow::Result<()>;
}

/// Terminal view that prints each newly completed line, styled, to stdout.
///
/// A terminal cannot literally replace what it already printed, but the
/// revealer only ever grows the content by whole lines, so printing the
/// unseen tail reproduces the replace semantics exactly.
#[derive(Debug, Default)]
pub struct TerminalReportView {
    lines_written: usize,
}

impl TerminalReportView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportView for TerminalReportView {
    fn replace(&mut self, content: &str) -> anyhow::Result<()> {
        let segments: Vec<&str> = content.split('\n').collect();
        // the segment after the final newline is an unterminated tail
        let complete = segments.len().saturating_sub(1);
        for line in &segments[self.lines_written..complete] {
            markdown::print_line(line);
        }
        self.lines_written = complete;
        io::stdout().flush().ok();
        Ok(())
    }
}

/// Replays a finished report one line at a time.
pub struct LineRevealer<P = TokioPacer> {
    config: RevealConfig,
    pacer: P,
}

impl LineRevealer {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            pacer: TokioPacer,
        }
    }
}

impl<P: Pacer> LineRevealer<P> {
    pub fn with_pacer(config: RevealConfig, pacer: P) -> Self {
        Self { config, pacer }
    }

    /// Reveal `text` through `view`, one line per tick.
    ///
    /// `text` is split literally on `'\n'`: a trailing separator yields a
    /// closing empty line, and the empty string yields a single empty line.
    /// Every intermediate display ends exactly at a line boundary, and the
    /// final display equals `text` plus one trailing newline.
    pub async fn reveal(&self, text: &str, view: &mut dyn ReportView) -> anyhow::Result<()> {
        let mut rendered = String::with_capacity(text.len() + 1);
        for line in text.split('\n') {
            rendered.push_str(line);
            rendered.push('\n');
            view.replace(&rendered)?;
            self.pacer.pause(self.config.line_delay).await;
        }
        Ok(())
    }
}
