//! Fusion reshape command.

use std::path::Path;

use console::style;

use crate::export;
use crate::models::RawFusion;
use crate::transform::fusion;

/// Reshape combined `"index: name"` fusion records from one JSON file into
/// another.
pub fn cmd_reshape(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw: Vec<RawFusion> = export::read_json(input)?;
    let reshaped = fusion::reshape_all(&raw);
    export::write_json(output, &reshaped)?;
    println!(
        "{} Reshaped {} fusion records.",
        style("✓").green(),
        reshaped.len()
    );
    Ok(())
}
