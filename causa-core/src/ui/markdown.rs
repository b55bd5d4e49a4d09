//! Minimal markdown styling for report lines in the terminal.
//!
//! The report is plain markdown with `##` section headings and `-` bullets;
//! anything fancier is passed through unstyled.

use console::style;

/// Style a single markdown line for terminal display.
pub fn render_line(line: &str) -> String {
    if let Some(heading) = line.strip_prefix("## ") {
        format!("{}", style(heading).yellow().bold())
    } else if let Some(heading) = line.strip_prefix("# ") {
        format!("{}", style(heading).yellow().bold().underlined())
    } else if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        format!("  {} {}", style("•").cyan(), item)
    } else {
        line.to_string()
    }
}

/// Print one styled report line.
pub fn print_line(line: &str) {
    println!("{}", render_line(line));
}
