//! Pure JSON reshaping: fusion records and relational fixtures.

pub mod fixtures;
pub mod fusion;
