//! Detail-page extraction.
//!
//! Every section of a detail page is independently optional. Missing
//! containers degrade to empty defaults instead of failing, so one
//! malformed page can never abort a multi-hundred-page crawl.

use scraper::{Html, Selector};

use super::card_list::element_text;
use crate::models::{CardDetail, CardImage};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Parse a single detail page into a [`CardDetail`]. Total function: markup
/// problems resolve to the empty default for the affected section.
pub fn parse_card_page(document: &str) -> CardDetail {
    let html = Html::parse_document(document);
    let mut card = CardDetail::default();

    // Card name: first nested div inside the heading region, falling back
    // to the region's own text.
    let heading_selector = selector("div.heading");
    let div_selector = selector("div");
    if let Some(heading) = html.select(&heading_selector).next() {
        card.card_name = match heading.select(&div_selector).next() {
            Some(inner) => element_text(&inner),
            None => element_text(&heading),
        };
    }

    // Localized names: paired dt/dd elements zipped positionally. A term
    // without a matching definition is markup noise and dropped.
    let dl_selector = selector("div.above div.hlist dl");
    if let Some(dl) = html.select(&dl_selector).next() {
        let dt_selector = selector("dt");
        let dd_selector = selector("dd");
        let terms = dl.select(&dt_selector).map(|dt| element_text(&dt));
        let definitions = dl.select(&dd_selector).map(|dd| element_text(&dd));
        for (term, definition) in terms.zip(definitions) {
            card.languages.insert(term, definition);
        }
    }

    // Image: six attributes of the first image in the image column, each
    // defaulting to empty when absent.
    let img_selector = selector("div.imagecolumn img");
    if let Some(img) = html.select(&img_selector).next() {
        let attr = |name: &str| img.value().attr(name).unwrap_or_default().to_string();
        card.image = CardImage {
            src: attr("src"),
            alt: attr("alt"),
            width: attr("width"),
            height: attr("height"),
            data_file_width: attr("data-file-width"),
            data_file_height: attr("data-file-height"),
        };
    }

    // Attribute table: rows with a header cell become key/value pairs,
    // multiple value cells joined with " / ". Header-less rows hold lore
    // prose collected into one combined string.
    let innertable_selector = selector("div.infocolumn table.innertable");
    if let Some(table) = html.select(&innertable_selector).next() {
        let tr_selector = selector("tr");
        let th_selector = selector("th");
        let td_selector = selector("td");
        let p_selector = selector("p");
        let mut lore_texts = Vec::new();
        for row in table.select(&tr_selector) {
            if let Some(th) = row.select(&th_selector).next() {
                let key = element_text(&th);
                let value = row
                    .select(&td_selector)
                    .map(|td| element_text(&td))
                    .collect::<Vec<_>>()
                    .join(" / ");
                card.info.insert(key, value);
            } else {
                for p in row.select(&p_selector) {
                    lore_texts.push(element_text(&p));
                }
            }
        }
        if !lore_texts.is_empty() {
            card.info.insert("lore".to_string(), lore_texts.join(" "));
        }
    }

    card
}
