//! Index and detail-page scrape commands.

use std::path::Path;
use std::time::Duration;

use console::style;

use crate::config::LIST_PAGE_URL;
use crate::export;
use crate::scrape::{card_list, crawl_cards, HttpClient, PageFetcher};

/// Scrape the index page and export its table rows.
pub async fn cmd_scrape_list(json: &Path, csv: &Path) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    let html = client.fetch_text(LIST_PAGE_URL).await?;
    let rows = card_list::extract_table_rows(&html);
    println!(
        "{} Extracted {} rows from the index tables.",
        style("→").cyan(),
        rows.len()
    );

    export::write_json(json, &rows)?;
    let flat: Vec<_> = rows.iter().map(|row| row.to_flat()).collect();
    export::write_csv(csv, &flat)?;
    Ok(())
}

/// Crawl every detail page linked from the index and export the records.
pub async fn cmd_scrape_cards(json: &Path, csv: &Path, delay: u64) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    let html = client.fetch_text(LIST_PAGE_URL).await?;
    let links = card_list::collect_card_links(&html);
    println!("{} Found {} card links.", style("→").cyan(), links.len());

    let cards = crawl_cards(&client, &links, Duration::from_secs(delay)).await;
    if cards.len() < links.len() {
        println!(
            "{} {} of {} pages failed and were skipped.",
            style("!").yellow(),
            links.len() - cards.len(),
            links.len()
        );
    }

    export::write_json(json, &cards)?;
    let flat: Vec<_> = cards.iter().map(|card| card.flatten()).collect();
    export::write_csv(csv, &flat)?;
    Ok(())
}
