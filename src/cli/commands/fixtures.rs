//! Fixture generation commands.

use std::path::Path;

use console::style;
use serde_json::Value;

use crate::config::{CARD_MODEL, FUSION_MODEL};
use crate::export;
use crate::models::Fusion;
use crate::transform::fixtures;

/// Wrap scraped card details in the record manager's fixture envelope.
///
/// Image dimensions are strict-checked first; a card with non-numeric
/// dimension text aborts the command before anything is written.
pub fn cmd_card_fixtures(input: &Path, output: &Path) -> anyhow::Result<()> {
    let cards: Vec<Value> = export::read_json(input)?;
    fixtures::validate_card_dimensions(&cards)?;
    let wrapped = fixtures::wrap_fixtures(CARD_MODEL, cards);
    export::write_json(output, &wrapped)?;
    println!(
        "{} Wrote {} card fixtures.",
        style("✓").green(),
        wrapped.len()
    );
    Ok(())
}

/// Split reshaped fusions into the two relational fixture streams.
///
/// The normalization runs before any file is written so a bad record can
/// never leave a partial fixture set behind.
pub fn cmd_fusion_fixtures(
    input: &Path,
    envelope: &Path,
    fusions: &Path,
    groups: &Path,
) -> anyhow::Result<()> {
    let reshaped: Vec<Fusion> = export::read_json(input)?;
    let wrapped = fixtures::wrap_fixtures(FUSION_MODEL, reshaped);
    let (fusion_fixtures, group_fixtures) = fixtures::normalize_fusions(&wrapped)?;

    export::write_json(envelope, &wrapped)?;
    export::write_json(fusions, &fusion_fixtures)?;
    export::write_json(groups, &group_fixtures)?;
    println!(
        "{} Wrote {} fusion fixtures and {} material group fixtures.",
        style("✓").green(),
        fusion_fixtures.len(),
        group_fixtures.len()
    );
    Ok(())
}
