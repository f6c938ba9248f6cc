//! Index-table extraction and detail-link collection.
//!
//! The index page carries several `table.wikitable` elements, not all of
//! them card tables. Both passes read the first row of each table as its
//! header row and require a "card" header (case-insensitive) so unrelated
//! tables on the same page are never misread.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::config::BASE_URL;
use crate::models::IndexRow;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Text content of an element with every text node trimmed, matching the
/// whitespace handling of the wiki's own rendering.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

/// Resolve an index-page href against the catalog origin.
pub(crate) fn resolve_href(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(BASE_URL).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{BASE_URL}{href}"),
    }
}

/// Extract every data row from the index page's marked tables.
///
/// Rows map cells to headers positionally, so every row key comes from the
/// table's header row; surplus cells beyond the headers are ignored. A
/// table whose headers lack a "card" column is skipped entirely; a row with
/// fewer cells than headers is malformed and skipped. Table order then row
/// order is preserved because it becomes crawl order.
pub fn extract_table_rows(document: &str) -> Vec<IndexRow> {
    let html = Html::parse_document(document);
    let table_selector = selector("table.wikitable");
    let tr_selector = selector("tr");
    let th_selector = selector("th");
    let td_selector = selector("td");
    let a_selector = selector("a");

    let mut rows = Vec::new();
    for table in html.select(&table_selector) {
        let mut table_rows = table.select(&tr_selector);
        let Some(header_row) = table_rows.next() else {
            continue;
        };
        let headers: Vec<String> = header_row
            .select(&th_selector)
            .map(|th| element_text(&th))
            .collect();
        if !headers.iter().any(|h| h.eq_ignore_ascii_case("card")) {
            debug!("skipping table without a card column");
            continue;
        }

        for table_row in table_rows {
            let cells: Vec<ElementRef> = table_row.select(&td_selector).collect();
            if cells.is_empty() || cells.len() < headers.len() {
                continue;
            }

            let mut row = IndexRow::default();
            for (cell, header) in cells.iter().zip(&headers) {
                row.insert(header.clone(), element_text(cell));

                if header.eq_ignore_ascii_case("card") {
                    let href = cell
                        .select(&a_selector)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                        .map(resolve_href)
                        .unwrap_or_default();
                    row.card_href = Some(href);
                }
            }
            rows.push(row);
        }
    }
    rows
}

/// Collect the ordered detail-page URLs from the index page.
///
/// Only tables whose headers contain "card" (case-insensitive) contribute;
/// cells without a link contribute nothing.
pub fn collect_card_links(document: &str) -> Vec<String> {
    let html = Html::parse_document(document);
    let table_selector = selector("table.wikitable");
    let tr_selector = selector("tr");
    let th_selector = selector("th");
    let td_selector = selector("td");
    let a_selector = selector("a");

    let mut links = Vec::new();
    for table in html.select(&table_selector) {
        let mut table_rows = table.select(&tr_selector);
        let Some(header_row) = table_rows.next() else {
            continue;
        };
        let headers: Vec<String> = header_row
            .select(&th_selector)
            .map(|th| element_text(&th).to_lowercase())
            .collect();
        let Some(card_index) = headers.iter().position(|h| h == "card") else {
            continue;
        };

        for table_row in table_rows {
            let cells: Vec<ElementRef> = table_row.select(&td_selector).collect();
            if cells.len() <= card_index {
                continue;
            }
            if let Some(href) = cells[card_index]
                .select(&a_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
            {
                links.push(resolve_href(href));
            }
        }
    }
    links
}
