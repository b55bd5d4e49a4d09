//! Terminal presentation: spinner, markdown styling, and the line revealer.

pub mod markdown;
pub mod spinner;
pub mod streaming;
