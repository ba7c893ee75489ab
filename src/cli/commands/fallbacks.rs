//! Fallback table listing.

use console::style;

use crate::config::Settings;
use crate::server::load_fallbacks;

/// Print every keyword that is retried with a replacement on an empty search.
pub fn cmd_fallbacks(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let table = load_fallbacks(settings)?;
    let entries = table.entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (keyword, replacement) in &entries {
        println!(
            "{:width$}  {} {}",
            keyword,
            style("→").cyan(),
            replacement,
            width = width
        );
    }
    println!();
    println!("{} fallback keywords", style(table.len()).bold());

    Ok(())
}
