//! Dataset sinks: structured JSON and tabular CSV, plus whole-file reads.
//!
//! Both sinks treat an empty collection as "nothing to export": a notice is
//! printed and no file is touched. Writes are whole-file and synchronous.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use console::style;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Read and deserialize a whole JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize a collection as indented JSON, non-ASCII preserved literally.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if records.is_empty() {
        println!("{} No data to export.", style("!").yellow());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    buf.push(b'\n');
    fs::write(path, buf)?;

    println!(
        "{} Exported JSON to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

/// Write flattened records as CSV with a union-of-keys header row.
///
/// A key absent on a given record yields an empty cell.
pub fn write_csv(path: &Path, rows: &[BTreeMap<String, String>]) -> Result<()> {
    if rows.is_empty() {
        println!("{} No data to export to CSV.", style("!").yellow());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let columns: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for row in rows {
        let record: Vec<&str> = columns
            .iter()
            .map(|column| row.get(*column).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!(
        "{} Exported CSV to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_collections_write_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("out.json");
        let csv_path = dir.path().join("out.csv");

        write_json::<serde_json::Value>(&json_path, &[]).unwrap();
        write_csv(&csv_path, &[]).unwrap();

        assert!(!json_path.exists());
        assert!(!csv_path.exists());
    }

    #[test]
    fn json_round_trips_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let records = vec![serde_json::json!({"card_name": "ホーリー・エルフ"})];

        write_json(&path, &records).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("ホーリー・エルフ"));

        let back: Vec<serde_json::Value> = read_json(&path).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn csv_uses_union_of_keys_with_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        let rows = vec![
            row(&[("a", "1"), ("b", "2")]),
            row(&[("b", "3"), ("c", "4")]),
        ];

        write_csv(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("a,b,c"));
        assert_eq!(lines.next(), Some("1,2,"));
        assert_eq!(lines.next(), Some(",3,4"));
    }
}
