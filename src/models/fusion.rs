//! Fusion-recipe records and the record manager's fixture envelope.

use serde::{Deserialize, Serialize};

/// Fusion record as scraped: the card index and title share one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFusion {
    /// Combined `"NNN: Title"` field.
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Materials", default)]
    pub materials: Vec<RawMaterialGroup>,
}

/// One alternative recipe producing the fusion result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterialGroup {
    #[serde(rename = "Material1")]
    pub material1: MaterialField,
    #[serde(rename = "Material2")]
    pub material2: MaterialField,
}

/// A material side is either one combined card string or a list of
/// alternatives. The reshape preserves which variant was given; the fixture
/// split downstream counts on the distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialField {
    One(String),
    Many(Vec<String>),
}

/// Fusion record after the reshape: index and title separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fusion {
    /// Decimal card index without leading zeros; empty when the combined
    /// field did not carry a parseable index.
    #[serde(rename = "Number", default)]
    pub number: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Materials", default)]
    pub materials: Vec<MaterialGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGroup {
    #[serde(rename = "Material1")]
    pub material1: MaterialRefField,
    #[serde(rename = "Material2")]
    pub material2: MaterialRefField,
}

/// Shape-preserving counterpart of [`MaterialField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRefField {
    One(MaterialRef),
    Many(Vec<MaterialRef>),
}

/// Reference to a card by catalog index and title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRef {
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// The record manager's seed-data shape. `pk` values are assigned
/// sequentially from 1 in input order, independently per entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture<T> {
    pub model: String,
    pub pk: u32,
    pub fields: T,
}

/// Parent fusion fixture fields: materials stripped, `result_card` left as
/// a null placeholder for a later card linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionFields {
    pub number: u32,
    pub name: String,
    pub result_card: Option<u32>,
}

/// One material group flattened for the relational schema: both sides become
/// lists of card references, tied back to the parent fusion by pk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGroupFields {
    pub fusion: u32,
    pub material1: Vec<CardRef>,
    pub material2: Vec<CardRef>,
}

/// A reduced card reference: the parsed integer index, or the original
/// string when the index did not parse (unresolved reference, tolerated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardRef {
    Id(i64),
    Raw(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_field_deserializes_both_shapes() {
        let one: MaterialField = serde_json::from_str("\"001: A\"").unwrap();
        assert_eq!(one, MaterialField::One("001: A".to_string()));

        let many: MaterialField = serde_json::from_str("[\"002: B\", \"003: C\"]").unwrap();
        assert_eq!(
            many,
            MaterialField::Many(vec!["002: B".to_string(), "003: C".to_string()])
        );
    }

    #[test]
    fn card_ref_serializes_as_bare_value() {
        assert_eq!(serde_json::to_string(&CardRef::Id(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&CardRef::Raw(String::new())).unwrap(),
            "\"\""
        );
    }

    #[test]
    fn fusion_fields_keep_null_result_card() {
        let fields = FusionFields {
            number: 1,
            name: "Firegrass".to_string(),
            result_card: None,
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("result_card").unwrap().is_null());
    }
}
