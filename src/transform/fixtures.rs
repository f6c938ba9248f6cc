//! Fixture envelope wrapping and relational fusion normalization.
//!
//! Extraction is lenient; this path is not. Anything the record manager
//! persists as a hard numeric type is strict-parsed here, and a failure
//! aborts before any fixture file is written.

use serde_json::Value;

use crate::config::{FUSION_MODEL, MATERIAL_GROUP_MODEL};
use crate::error::{Result, ScrapeError};
use crate::models::{
    CardRef, Fixture, Fusion, FusionFields, MaterialGroupFields, MaterialRef, MaterialRefField,
};

/// Wrap records in the `{model, pk, fields}` envelope, pk = 1-based
/// position in input order.
pub fn wrap_fixtures<T>(model: &str, records: Vec<T>) -> Vec<Fixture<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, fields)| Fixture {
            model: model.to_string(),
            pk: (i + 1) as u32,
            fields,
        })
        .collect()
}

/// Strict integer parse for an image dimension.
fn parse_dimension(field: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ScrapeError::InvalidDimension {
            field,
            value: value.to_string(),
        })
}

const DIMENSION_FIELDS: [&str; 4] = ["width", "height", "data_file_width", "data_file_height"];

/// Verify every image dimension in a card collection parses as an integer.
///
/// Any dimension key that is present must hold integer text. The empty
/// string a missing `<img>` attribute leaves behind is rejected like any
/// other non-integer text: the record manager's integer columns cannot
/// take it. Only a wholly absent key is tolerated, where the loader
/// substitutes zero.
pub fn validate_card_dimensions(cards: &[Value]) -> Result<()> {
    for card in cards {
        let Some(image) = card.get("image").and_then(Value::as_object) else {
            continue;
        };
        for field in DIMENSION_FIELDS {
            if let Some(value) = image.get(field).and_then(Value::as_str) {
                parse_dimension(field, value)?;
            }
        }
    }
    Ok(())
}

fn reduce_ref(material: &MaterialRef) -> CardRef {
    match material.number.parse::<i64>() {
        Ok(id) => CardRef::Id(id),
        // Unresolved reference: keep the original text rather than failing.
        Err(_) => CardRef::Raw(material.number.clone()),
    }
}

fn reduce_refs(field: &MaterialRefField) -> Vec<CardRef> {
    match field {
        MaterialRefField::One(material) => vec![reduce_ref(material)],
        MaterialRefField::Many(materials) => materials.iter().map(reduce_ref).collect(),
    }
}

/// Split wrapped fusion records into the two relational fixture streams.
///
/// Fusion fixtures and material-group fixtures each get their own pk
/// counter starting at 1; every group fixture points back at its parent
/// fusion's pk. The fusion number must parse as an integer here.
pub fn normalize_fusions(
    fusions: &[Fixture<Fusion>],
) -> Result<(Vec<Fixture<FusionFields>>, Vec<Fixture<MaterialGroupFields>>)> {
    let mut fusion_fixtures = Vec::with_capacity(fusions.len());
    let mut group_fixtures = Vec::new();
    let mut group_pk: u32 = 0;

    for (i, fixture) in fusions.iter().enumerate() {
        let fusion_pk = (i + 1) as u32;
        let number = fixture
            .fields
            .number
            .parse::<u32>()
            .map_err(|_| ScrapeError::InvalidNumber {
                value: fixture.fields.number.clone(),
            })?;

        fusion_fixtures.push(Fixture {
            model: FUSION_MODEL.to_string(),
            pk: fusion_pk,
            fields: FusionFields {
                number,
                name: fixture.fields.name.clone(),
                result_card: None,
            },
        });

        for group in &fixture.fields.materials {
            group_pk += 1;
            group_fixtures.push(Fixture {
                model: MATERIAL_GROUP_MODEL.to_string(),
                pk: group_pk,
                fields: MaterialGroupFields {
                    fusion: fusion_pk,
                    material1: reduce_refs(&group.material1),
                    material2: reduce_refs(&group.material2),
                },
            });
        }
    }

    Ok((fusion_fixtures, group_fixtures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialGroup;

    fn material(number: &str, name: &str) -> MaterialRef {
        MaterialRef {
            number: number.to_string(),
            name: name.to_string(),
        }
    }

    fn fusion(number: &str, name: &str, groups: usize) -> Fusion {
        Fusion {
            number: number.to_string(),
            name: name.to_string(),
            materials: (0..groups)
                .map(|_| MaterialGroup {
                    material1: MaterialRefField::One(material("1", "A")),
                    material2: MaterialRefField::Many(vec![
                        material("2", "B"),
                        material("3", "C"),
                    ]),
                })
                .collect(),
        }
    }

    #[test]
    fn wrap_assigns_positional_pks() {
        let wrapped = wrap_fixtures("dm1.card", vec!["a", "b", "c"]);
        assert_eq!(
            wrapped.iter().map(|f| f.pk).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(wrapped.iter().all(|f| f.model == "dm1.card"));
    }

    #[test]
    fn normalize_counts_and_parent_links() {
        let wrapped = wrap_fixtures(
            "dm1.fusion",
            vec![fusion("1", "A", 2), fusion("2", "B", 0), fusion("3", "C", 3)],
        );
        let (fusions, groups) = normalize_fusions(&wrapped).unwrap();

        assert_eq!(fusions.len(), 3);
        assert_eq!(
            fusions.iter().map(|f| f.pk).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(groups.len(), 5);
        assert_eq!(
            groups.iter().map(|g| g.pk).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            groups.iter().map(|g| g.fields.fusion).collect::<Vec<_>>(),
            vec![1, 1, 3, 3, 3]
        );
    }

    #[test]
    fn material_refs_reduce_to_bare_integers() {
        let wrapped = wrap_fixtures("dm1.fusion", vec![fusion("1", "A", 1)]);
        let (_, groups) = normalize_fusions(&wrapped).unwrap();
        assert_eq!(groups[0].fields.material1, vec![CardRef::Id(1)]);
        assert_eq!(
            groups[0].fields.material2,
            vec![CardRef::Id(2), CardRef::Id(3)]
        );
    }

    #[test]
    fn unparseable_material_number_is_retained() {
        assert_eq!(reduce_ref(&material("7", "X")), CardRef::Id(7));
        assert_eq!(
            reduce_ref(&material("", "Y")),
            CardRef::Raw(String::new())
        );
    }

    #[test]
    fn non_integer_fusion_number_is_fatal() {
        let wrapped = wrap_fixtures("dm1.fusion", vec![fusion("", "Broken", 1)]);
        let err = normalize_fusions(&wrapped).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidNumber { .. }));
    }

    #[test]
    fn dimension_validation_is_strict_for_any_present_text() {
        let good = serde_json::json!([{"image": {"width": "300", "height": "440"}}]);
        validate_card_dimensions(good.as_array().unwrap()).unwrap();

        let bad = serde_json::json!([{"image": {"width": "wide"}}]);
        let err = validate_card_dimensions(bad.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidDimension { .. }));
    }

    #[test]
    fn empty_dimension_text_is_rejected() {
        // A page without an image leaves empty attribute strings behind;
        // those must fail validation, not crash the downstream loader.
        let cards = serde_json::json!([{"image": {"width": "", "height": "440"}}]);
        let err = validate_card_dimensions(cards.as_array().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::InvalidDimension { field: "width", .. }
        ));
    }

    #[test]
    fn cards_without_dimension_keys_pass_validation() {
        let cards = serde_json::json!([
            {"card_name": "No Image", "image": {}},
            {"card_name": "No Image Object"}
        ]);
        validate_card_dimensions(cards.as_array().unwrap()).unwrap();
    }
}
