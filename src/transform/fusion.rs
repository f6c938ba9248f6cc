//! Splits combined `"index: name"` fusion fields into separate attributes.

use crate::models::{
    Fusion, MaterialField, MaterialGroup, MaterialRef, MaterialRefField, RawFusion,
};

/// Split `"002: Mystical Elf"` into `("2", "Mystical Elf")`.
///
/// The index may carry a leading `#` and leading zeros; it is parsed as an
/// integer purely to normalize those away. When the separator is missing or
/// the index portion is not an integer, falls back to an empty index and the
/// trimmed original text. Formatting problems here are recoverable, never
/// errors.
pub fn split_name_field(full_name: &str) -> (String, String) {
    if let Some((index_part, name_part)) = full_name.split_once(':') {
        let trimmed = index_part.trim().trim_start_matches('#');
        if let Ok(index) = trimmed.parse::<i64>() {
            return (index.to_string(), name_part.trim().to_string());
        }
    }
    (String::new(), full_name.trim().to_string())
}

fn material_ref(combined: &str) -> MaterialRef {
    let (number, name) = split_name_field(combined);
    MaterialRef { number, name }
}

/// Split every card string in a material side, preserving the scalar/list
/// shape of the input.
fn reshape_material(field: &MaterialField) -> MaterialRefField {
    match field {
        MaterialField::One(combined) => MaterialRefField::One(material_ref(combined)),
        MaterialField::Many(items) => {
            MaterialRefField::Many(items.iter().map(|item| material_ref(item)).collect())
        }
    }
}

/// Reshape one fusion record: split its name and every material reference.
pub fn reshape_fusion(raw: &RawFusion) -> Fusion {
    let (number, name) = split_name_field(&raw.name);
    Fusion {
        number,
        name,
        materials: raw
            .materials
            .iter()
            .map(|group| MaterialGroup {
                material1: reshape_material(&group.material1),
                material2: reshape_material(&group.material2),
            })
            .collect(),
    }
}

/// Reshape a whole collection, order-preserving.
pub fn reshape_all(raw: &[RawFusion]) -> Vec<Fusion> {
    raw.iter().map(reshape_fusion).collect()
}
