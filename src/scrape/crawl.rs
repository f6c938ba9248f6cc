//! Sequential detail-page crawl.
//!
//! One URL at a time, with a mandatory delay between fetches to respect the
//! remote server. A failed page is logged and skipped; the crawl continues,
//! so the result holds every page that succeeded, in crawl order.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::{card_detail, PageFetcher};
use crate::models::CardDetail;

/// Fetch and parse every linked detail page, skipping failures.
///
/// The delay separates successive fetches: it still applies after a failed
/// page, but not after the last one, so an N-page crawl sleeps N-1 times.
pub async fn crawl_cards<F>(fetcher: &F, links: &[String], delay: Duration) -> Vec<CardDetail>
where
    F: PageFetcher + Sync,
{
    let progress = ProgressBar::new(links.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut cards = Vec::new();
    for (i, link) in links.iter().enumerate() {
        progress.set_message(link.clone());
        match fetcher.fetch_text(link).await {
            Ok(html) => {
                cards.push(card_detail::parse_card_page(&html));
                info!("processed {}/{}: {link}", i + 1, links.len());
            }
            Err(e) => warn!("error processing {link}: {e}"),
        }
        progress.inc(1);

        // Be polite to the server between fetches.
        if i + 1 < links.len() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    progress.finish_and_clear();
    cards
}
