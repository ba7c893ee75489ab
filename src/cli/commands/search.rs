//! One-off search command.

use console::style;

use crate::backend::build_backend;
use crate::config::Settings;
use crate::models::SearchQuery;
use crate::server::load_fallbacks;
use crate::services::{run_search, ServiceTermsCache};

/// Run a search and print the results.
pub async fn cmd_search(settings: &Settings, query: &SearchQuery, json: bool) -> anyhow::Result<()> {
    query.validate().map_err(anyhow::Error::msg)?;

    let backend = build_backend(settings)?;
    let fallbacks = load_fallbacks(settings)?;
    let terms = ServiceTermsCache::new();

    let page = run_search(backend.as_ref(), &fallbacks, &terms, query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", style(page.summary.headline()).bold());
    if let Some(ref replacement) = page.substituted_keyword {
        println!(
            "  {} showing results for '{}'",
            style("→").cyan(),
            replacement
        );
    }

    if let Some(ref term) = page.terminology {
        println!();
        println!("{} {}", style("ℹ").blue(), style(&term.title).bold());
        println!("  {}", term.body);
    }

    println!();
    for org in &page.organizations {
        print!("{} {}", style("•").green(), style(&org.name).bold());
        if !org.category.is_empty() {
            print!(" {}", style(format!("[{}]", org.category.join(", "))).dim());
        }
        println!();
        if let Some(ref address) = org.address {
            println!("    {}", address.one_line());
        }
        println!("    {}", style(page.link_params.detail_href(&org.id)).dim());
    }

    let pagination = &page.pagination;
    if pagination.total_pages() > 1 {
        println!();
        println!(
            "Page {} of {}",
            pagination.current,
            pagination.total_pages()
        );
    }

    Ok(())
}
