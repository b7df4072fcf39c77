//! End-to-end tests for the checklist runner.
//!
//! No running deployment is needed: the probe URLs point at a closed
//! local port, which exercises the non-fatal failure path, and the CSV
//! fixtures live in a tempdir.

use schemacheck::workflow::TaskStatus;
use schemacheck::Config;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn test_config(dir: &TempDir, csv_name: &str) -> Config {
    Config {
        // Closed port: both probes fail fast, which must not gate the run.
        api_base_url: "http://127.0.0.1:9".to_string(),
        frontend_url: "http://127.0.0.1:9".to_string(),
        csv_path: dir.path().join(csv_name),
        report_dir: dir.path().to_path_buf(),
        probe_timeout: Duration::from_millis(200),
        step_delay: Duration::ZERO,
    }
}

const VALID_CSV: &str = "\
table,table description,column,column description,public
users,application users,id,primary key,true
users,application users,email,login email,false
orders,customer orders,total,order amount,true
";

#[tokio::test]
async fn valid_csv_runs_to_completion_despite_dead_probes() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = test_config(&dir, "schema.csv");
    fs::write(&cfg.csv_path, VALID_CSV).expect("write csv");

    let report = schemacheck::run(&cfg)
        .await
        .expect("run")
        .expect("csv gate should pass");

    assert_eq!(report.test_results.api_health, "FAIL");
    assert_eq!(report.test_results.frontend_access, "FAIL");
    assert_eq!(report.test_results.csv_structure, "PASS");
    assert_eq!(report.test_results.validation_workflow, "PASS");

    assert_eq!(report.csv_analysis.total_rows, 3);
    assert_eq!(report.csv_analysis.tables, vec!["orders", "users"]);
    assert_eq!(report.csv_analysis.public_columns, 2);

    assert_eq!(report.validation_task.status, TaskStatus::Integrated);
    assert_eq!(report.validation_task.tables_count, 2);
    assert_eq!(report.validation_task.columns_count, 3);
    assert!(report.validation_task.id.starts_with("task_"));

    // The report landed on disk as test_report_<ts>.json.
    let written: Vec<PathBuf> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("test_report_") && n.ends_with(".json"))
                .unwrap_or(false)
        })
        .collect();
    assert_eq!(written.len(), 1);
}

#[tokio::test]
async fn missing_csv_aborts_before_task_creation() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = test_config(&dir, "does_not_exist.csv");

    let report = schemacheck::run(&cfg).await.expect("run");
    assert!(report.is_none());

    // Aborted at the gate, so no report file either.
    let reports = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(reports, 0);
}

#[tokio::test]
async fn missing_column_aborts_at_the_gate() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = test_config(&dir, "schema.csv");
    fs::write(
        &cfg.csv_path,
        "table,table description,column,public\nusers,d,id,true\n",
    )
    .expect("write csv");

    let report = schemacheck::run(&cfg).await.expect("run");
    assert!(report.is_none());
}

#[tokio::test]
async fn header_only_csv_aborts_at_the_gate() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = test_config(&dir, "schema.csv");
    fs::write(
        &cfg.csv_path,
        "table,table description,column,column description,public\n",
    )
    .expect("write csv");

    let report = schemacheck::run(&cfg).await.expect("run");
    assert!(report.is_none());
}
