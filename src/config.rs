//! Built-in constants for the scrape and fixture pipelines.
//!
//! The CLI exposes every file path as an optional argument; these are the
//! defaults matching the layout the downstream record manager expects.

/// Origin that relative index-page links are resolved against.
pub const BASE_URL: &str = "https://yugipedia.com";

/// The tabular catalog page listing every card with detail-page links.
pub const LIST_PAGE_URL: &str = "https://yugipedia.com/wiki/List_of_Yu-Gi-Oh!_Duel_Monsters_cards";

/// Client identification sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; cardscrape/0.1)";

/// Minimum seconds between successive fetches during a crawl.
pub const REQUEST_DELAY_SECS: u64 = 1;

pub const CARD_LIST_JSON: &str = "json/card_list.json";
pub const CARD_LIST_CSV: &str = "csv/card_list.csv";
pub const CARD_DETAILS_JSON: &str = "json/card_details.json";
pub const CARD_DETAILS_CSV: &str = "csv/card_details.csv";

pub const FUSIONS_JSON: &str = "json/fusions.json";
pub const FUSIONS_RESHAPED_JSON: &str = "json/fusions_transformed.json";

pub const CARD_FIXTURES_JSON: &str = "fixtures/card_details_formatted.json";
pub const FUSION_ENVELOPE_JSON: &str = "fixtures/fusions_formatted.json";
pub const FUSION_FIXTURES_JSON: &str = "fixtures/fusions.json";
pub const MATERIAL_GROUP_FIXTURES_JSON: &str = "fixtures/fusion_material_groups.json";

/// Model labels in the record manager's fixture schema.
pub const CARD_MODEL: &str = "dm1.card";
pub const FUSION_MODEL: &str = "dm1.fusion";
pub const MATERIAL_GROUP_MODEL: &str = "dm1.fusionmaterialgroup";
