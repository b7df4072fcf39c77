pub mod read;
pub mod types;
pub mod validate;

pub use read::read_schema_csv;
pub use types::SchemaRow;
pub use validate::{validate_structure, SchemaSummary, TableSummary};
