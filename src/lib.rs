//! cardscrape - wiki card catalog scraper and fixture pipeline.
//!
//! Scrapes a wiki-style card catalog (an index page of tables plus one
//! detail page per card), exports the extracted records as JSON and CSV,
//! and reshapes fusion-recipe JSON into the relational seed fixtures
//! consumed by the downstream record manager.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod scrape;
pub mod transform;
