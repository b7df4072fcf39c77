//! Reading the schema CSV into header-keyed rows.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, Trim};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// The schema CSV as read from disk: the header row plus one
/// header-keyed map per data row. Structural validation happens later,
/// so unknown or missing columns are preserved as-is here.
#[derive(Debug, Clone)]
pub struct RawSchema {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

/// Read and parse the schema CSV at `path`.
///
/// A missing file is `Error::FileNotFound`; decoding problems surface as
/// `Error::Parse`. Prints the row count and a three-row sample on success.
pub fn read_schema_csv(path: &Path) -> Result<RawSchema> {
    println!("📄 Lecture du fichier CSV du schéma...");

    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    println!("✅ CSV lu avec succès - {} lignes trouvées", rows.len());
    info!(path = %path.display(), rows = rows.len(), "schema csv read");

    println!("📊 Échantillon des données:");
    for (i, row) in rows.iter().take(3).enumerate() {
        let table = row.get("table").map(String::as_str).unwrap_or("N/A");
        let column = row.get("column").map(String::as_str).unwrap_or("N/A");
        println!("  {}. Table: {}, Colonne: {}", i + 1, table, column);
    }

    Ok(RawSchema { headers, rows })
}
