//! Settings CLI commands
//!
//! Theme switching and configuration display. These only touch
//! presentation settings, never the ledger.

use clap::ValueEnum;

use crate::config::{LedgerPaths, Settings, Theme};
use crate::error::LedgerResult;

/// Theme selection for `theme`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Switch to the other theme
    Toggle,
}

pub fn handle_theme(
    paths: &LedgerPaths,
    settings: &mut Settings,
    choice: Option<ThemeChoice>,
) -> LedgerResult<()> {
    let Some(choice) = choice else {
        println!("Theme: {}", settings.theme);
        return Ok(());
    };

    settings.theme = match choice {
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Toggle => settings.theme.toggled(),
    };
    settings.save(paths)?;

    println!("Theme set to {}", settings.theme);
    Ok(())
}

pub fn handle_config(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data store:     {}", paths.store_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Theme:           {}", settings.theme);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Recent count:    {}", settings.recent_count);
    println!("  Categories:      {}", settings.categories.join(", "));
    Ok(())
}
