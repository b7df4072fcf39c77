//! The JSON test report written at the end of a successful run.

use crate::error::Result;
use crate::schema::SchemaSummary;
use crate::workflow::ValidationTask;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct TestSummary {
    pub timestamp: String,
    pub api_status: String,
    pub frontend_status: String,
    pub csv_file: String,
    pub csv_valid: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CsvAnalysis {
    pub total_rows: usize,
    pub tables: Vec<String>,
    pub public_columns: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestResults {
    pub api_health: String,
    pub frontend_access: String,
    pub csv_structure: String,
    pub validation_workflow: String,
}

/// Everything one run observed, aggregated for the JSON file.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestReport {
    pub test_summary: TestSummary,
    pub csv_analysis: CsvAnalysis,
    pub validation_task: ValidationTask,
    pub test_results: TestResults,
}

fn verdict(ok: bool) -> String {
    if ok { "PASS" } else { "FAIL" }.to_string()
}

impl TestReport {
    /// Aggregate the run's outcomes. Only reachable once the CSV gate
    /// passed, so the structure and workflow verdicts are PASS here.
    pub fn new(
        api_ok: bool,
        frontend_ok: bool,
        csv_path: &Path,
        summary: &SchemaSummary,
        task: ValidationTask,
    ) -> Self {
        TestReport {
            test_summary: TestSummary {
                timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                api_status: if api_ok {
                    "✅ Accessible".to_string()
                } else {
                    "❌ Inaccessible".to_string()
                },
                frontend_status: if frontend_ok {
                    "✅ Accessible".to_string()
                } else {
                    "❌ Inaccessible".to_string()
                },
                csv_file: csv_path.display().to_string(),
                csv_valid: "✅ Valide".to_string(),
            },
            csv_analysis: CsvAnalysis {
                total_rows: summary.total_rows(),
                tables: summary.table_names(),
                public_columns: summary.public_columns,
            },
            validation_task: task,
            test_results: TestResults {
                api_health: verdict(api_ok),
                frontend_access: verdict(frontend_ok),
                csv_structure: verdict(true),
                validation_workflow: verdict(true),
            },
        }
    }

    /// Serialize to `test_report_<unix_ts>.json` under `dir`,
    /// pretty-printed with 2-space indentation. Returns the path written.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        println!("📋 Génération du rapport de test...");
        let filename = format!("test_report_{}.json", Utc::now().timestamp());
        let path = dir.join(filename);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        println!("✅ Rapport sauvegardé: {}", path.display());
        info!(path = %path.display(), "test report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaRow, TableSummary};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_summary() -> SchemaSummary {
        let rows = vec![
            SchemaRow {
                table: "orders".into(),
                table_description: "d".into(),
                column: "total".into(),
                column_description: "d".into(),
                public: "true".into(),
            },
            SchemaRow {
                table: "users".into(),
                table_description: "d".into(),
                column: "id".into(),
                column_description: "d".into(),
                public: "false".into(),
            },
        ];
        SchemaSummary {
            rows,
            tables: vec![
                TableSummary {
                    name: "orders".into(),
                    columns: 1,
                    public_columns: 1,
                },
                TableSummary {
                    name: "users".into(),
                    columns: 1,
                    public_columns: 0,
                },
            ],
            public_columns: 1,
        }
    }

    #[test]
    fn report_reflects_probe_outcomes() {
        let task = ValidationTask::new(&PathBuf::from("schema.csv"), 2, 2);
        let report = TestReport::new(true, false, &PathBuf::from("schema.csv"), &sample_summary(), task);
        assert_eq!(report.test_results.api_health, "PASS");
        assert_eq!(report.test_results.frontend_access, "FAIL");
        assert_eq!(report.test_results.csv_structure, "PASS");
        assert_eq!(report.csv_analysis.total_rows, 2);
        assert_eq!(report.csv_analysis.tables, vec!["orders", "users"]);
    }

    #[test]
    fn report_round_trips_through_json_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let task = ValidationTask::new(&PathBuf::from("schema.csv"), 2, 2);
        let report = TestReport::new(true, true, &PathBuf::from("schema.csv"), &sample_summary(), task);

        let path = report.write(dir.path())?;
        let name = path.file_name().and_then(|n| n.to_str()).expect("filename");
        assert!(name.starts_with("test_report_"));
        assert!(name.ends_with(".json"));

        let loaded: TestReport = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(loaded.csv_analysis.public_columns, 1);
        assert_eq!(loaded.validation_task.id, report.validation_task.id);
        Ok(())
    }
}
