// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// One record of the schema CSV: a column of a table, with descriptions
/// and its public-visibility flag. Extra CSV columns are ignored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct SchemaRow {
    pub table: String,
    #[serde(rename = "table description")]
    pub table_description: String,
    pub column: String,
    #[serde(rename = "column description")]
    pub column_description: String,
    /// The literal string "true" (any case) marks a column as public.
    pub public: String,
}

impl SchemaRow {
    /// Whether the `public` flag is the string "true", case-insensitively.
    pub fn is_public(&self) -> bool {
        self.public.trim().eq_ignore_ascii_case("true")
    }
}
