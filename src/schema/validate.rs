//! Structural validation of the schema CSV and per-table statistics.

use super::read::RawSchema;
use super::types::SchemaRow;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Columns every schema CSV must carry. Order matters only for reporting.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "table",
    "table description",
    "column",
    "column description",
    "public",
];

/// Per-table statistics derived during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub columns: usize,
    pub public_columns: usize,
}

/// The validated schema: typed rows plus the statistics the report needs.
#[derive(Debug, Clone)]
pub struct SchemaSummary {
    pub rows: Vec<SchemaRow>,
    /// Lexicographically sorted, distinct table names.
    pub tables: Vec<TableSummary>,
    pub public_columns: usize,
}

impl SchemaSummary {
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }
}

/// Validate the CSV structure: all required columns present and at least
/// one data row. On success returns typed rows and per-table counts;
/// `SchemaMismatch` names exactly the missing columns otherwise.
pub fn validate_structure(raw: &RawSchema) -> Result<SchemaSummary> {
    println!("🔍 Validation de la structure CSV...");

    if raw.rows.is_empty() {
        println!("❌ Aucune donnée à valider");
        return Err(Error::EmptySchema);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !raw.headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        println!("❌ Colonnes manquantes: {}", missing.join(", "));
        warn!(?missing, "schema csv is missing required columns");
        return Err(Error::SchemaMismatch { missing });
    }

    let rows: Vec<SchemaRow> = raw
        .rows
        .iter()
        .map(|row| {
            // Short rows (flexible parsing) fall back to empty fields.
            let field = |name: &str| row.get(name).cloned().unwrap_or_default();
            SchemaRow {
                table: field("table"),
                table_description: field("table description"),
                column: field("column"),
                column_description: field("column description"),
                public: field("public"),
            }
        })
        .collect();

    // BTreeMap keeps the table list sorted for printing and reporting.
    let mut per_table: BTreeMap<String, TableSummary> = BTreeMap::new();
    for row in &rows {
        let entry = per_table
            .entry(row.table.clone())
            .or_insert_with(|| TableSummary {
                name: row.table.clone(),
                columns: 0,
                public_columns: 0,
            });
        entry.columns += 1;
        if row.is_public() {
            entry.public_columns += 1;
        }
    }

    let tables: Vec<TableSummary> = per_table.into_values().collect();
    println!(
        "✅ Tables trouvées: {}",
        tables
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    for table in &tables {
        println!(
            "  - {}: {} colonnes, {} publiques",
            table.name, table.columns, table.public_columns
        );
    }

    let public_columns = rows.iter().filter(|r| r.is_public()).count();
    println!("✅ Structure CSV valide");
    info!(
        tables = tables.len(),
        rows = rows.len(),
        public_columns,
        "schema structure valid"
    );

    Ok(SchemaSummary {
        rows,
        tables,
        public_columns,
    })
}
