//! Terminal display formatting
//!
//! Plain-text renderers used by the CLI. The theme is passed in explicitly;
//! nothing here reads global state.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_register};
pub use summary::format_summary;

use crate::config::Theme;

/// Horizontal rule drawn in the theme's line style
pub fn rule(theme: Theme, width: usize) -> String {
    match theme {
        Theme::Light => "-".repeat(width),
        Theme::Dark => "─".repeat(width),
    }
}

/// Truncate a string to `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
