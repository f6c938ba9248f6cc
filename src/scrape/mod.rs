//! Fetching and HTML record extraction for the card catalog.

pub mod card_detail;
pub mod card_list;
mod crawl;
mod fetch;

pub use crawl::crawl_cards;
pub use fetch::{HttpClient, PageFetcher};
