//! Records extracted from the catalog's index and detail pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One data row from an index table, keyed by the table's column headers.
///
/// Column sets vary per table; rows within one table share headers. When the
/// table has a case-insensitive "card" column, `card_href` carries the
/// resolved detail-page URL (empty when the cell holds no link).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexRow {
    /// Cell text keyed by column header, in table column order.
    #[serde(flatten)]
    pub columns: Map<String, Value>,
    #[serde(rename = "Card_href", skip_serializing_if = "Option::is_none")]
    pub card_href: Option<String>,
}

impl IndexRow {
    /// Insert one cell under its column header.
    pub fn insert(&mut self, header: String, text: String) {
        self.columns.insert(header, Value::String(text));
    }

    /// One-level string map for tabular export, `Card_href` included.
    pub fn to_flat(&self) -> BTreeMap<String, String> {
        let mut flat: BTreeMap<String, String> = self
            .columns
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    value.as_str().map(str::to_string).unwrap_or_default(),
                )
            })
            .collect();
        if let Some(href) = &self.card_href {
            flat.insert("Card_href".to_string(), href.clone());
        }
        flat
    }
}

/// Fully extracted detail-page record.
///
/// Wiki markup is inconsistent across entries; a section that is missing on
/// a page leaves its field at the empty default. No field is ever absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub image: CardImage,
    /// Attribute-table key/value pairs, plus the synthetic `lore` key when
    /// the page carried free-text rows.
    #[serde(default)]
    pub info: BTreeMap<String, String>,
}

impl CardDetail {
    /// Flatten to a single-level map for tabular export.
    ///
    /// Language keys are prefixed with `language_`, image attributes with
    /// `image_`, and info keys with `info_` after lower-casing and replacing
    /// spaces and slashes with underscores. An empty image contributes no
    /// keys.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut flat = BTreeMap::new();
        flat.insert("card_name".to_string(), self.card_name.clone());
        for (key, value) in &self.languages {
            flat.insert(format!("language_{key}"), value.clone());
        }
        if !self.image.is_empty() {
            flat.insert("image_src".to_string(), self.image.src.clone());
            flat.insert("image_alt".to_string(), self.image.alt.clone());
            flat.insert("image_width".to_string(), self.image.width.clone());
            flat.insert("image_height".to_string(), self.image.height.clone());
            flat.insert(
                "image_data_file_width".to_string(),
                self.image.data_file_width.clone(),
            );
            flat.insert(
                "image_data_file_height".to_string(),
                self.image.data_file_height.clone(),
            );
        }
        for (key, value) in &self.info {
            let clean = key.replace([' ', '/'], "_").to_lowercase();
            flat.insert(format!("info_{clean}"), value.clone());
        }
        flat
    }
}

/// Image attributes taken verbatim from the detail page's `<img>` element.
///
/// Dimensions stay as strings here; the fixture path strict-parses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub data_file_width: String,
    #[serde(default)]
    pub data_file_height: String,
}

impl CardImage {
    /// True when no attribute was extracted (the page had no image column).
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
            && self.alt.is_empty()
            && self.width.is_empty()
            && self.height.is_empty()
            && self.data_file_width.is_empty()
            && self.data_file_height.is_empty()
    }
}
