//! # causa-core
//!
//! Core library for **causa**, a terminal causal-analysis assistant backed
//! by the Gemini API. The binary crate wires these pieces together:
//!
//! - [`gemini`]: the `generateContent` client, wire types, and the
//!   [`gemini::ApiError`] failure taxonomy
//! - [`prompts`]: the fixed six-section analysis prompt
//! - [`demos`]: preset scenarios runnable without typing
//! - [`session`]: per-session input state and the scenario selector
//! - [`ui`]: spinner, markdown line styling, and the line-by-line reveal
//!   of a finished report
//! - [`config`]: constants and API key resolution
//!
//! A render cycle is: select a scenario (queued demo text first, then the
//! submitted entry), build the prompt, make one `generateContent` call,
//! then reveal the returned markdown one line at a time.

pub mod config;
pub mod demos;
pub mod gemini;
pub mod prompts;
pub mod session;
pub mod ui;

// Re-export the types the binary touches on every cycle.
pub use demos::{DEMO_SCENARIOS, DemoScenario, find_demo};
pub use gemini::{ApiError, Client};
pub use prompts::build_prompt;
pub use session::{SessionState, select_scenario};
pub use ui::streaming::{LineRevealer, RevealConfig, TerminalReportView};
