//! Data models for the scrape and fixture pipelines.

mod card;
mod fusion;

pub use card::{CardDetail, CardImage, IndexRow};
pub use fusion::{
    CardRef, Fixture, Fusion, FusionFields, MaterialField, MaterialGroup, MaterialGroupFields,
    MaterialRef, MaterialRefField, RawFusion, RawMaterialGroup,
};
