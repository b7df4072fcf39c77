//! Environment-based configuration for the checklist runner.
//!
//! Every value has the deployment's local-dev default, so a bare
//! `schemacheck` run probes the stack `docker compose up` brings up.

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_CSV_PATH: &str = "schema-database-project/database_schema.csv";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the validation API, probed at `/health`.
    pub api_base_url: String,
    /// Root URL of the web frontend.
    pub frontend_url: String,
    /// Path of the schema CSV to validate.
    pub csv_path: PathBuf,
    /// Directory the JSON report is written into.
    pub report_dir: PathBuf,
    /// Per-request timeout for the two HTTP probes.
    pub probe_timeout: Duration,
    /// Pause between workflow simulation steps.
    pub step_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            report_dir: PathBuf::from("."),
            probe_timeout: Duration::from_secs(5),
            step_delay: Duration::from_millis(400),
        }
    }
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// Environment variables:
    /// - SCHEMACHECK_API_URL: base URL of the API (default: http://localhost:8000)
    /// - SCHEMACHECK_FRONTEND_URL: frontend root URL (default: http://localhost:5173)
    /// - SCHEMACHECK_CSV_PATH: schema CSV path (default: schema-database-project/database_schema.csv)
    /// - SCHEMACHECK_REPORT_DIR: where the JSON report lands (default: current directory)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cfg = Self {
            api_base_url: std::env::var("SCHEMACHECK_API_URL").unwrap_or(defaults.api_base_url),
            frontend_url: std::env::var("SCHEMACHECK_FRONTEND_URL")
                .unwrap_or(defaults.frontend_url),
            csv_path: std::env::var("SCHEMACHECK_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            report_dir: std::env::var("SCHEMACHECK_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            probe_timeout: defaults.probe_timeout,
            step_delay: defaults.step_delay,
        };
        info!(
            api = %cfg.api_base_url,
            frontend = %cfg.frontend_url,
            csv = %cfg.csv_path.display(),
            "configuration resolved"
        );
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_dev_stack() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert_eq!(cfg.frontend_url, "http://localhost:5173");
        assert_eq!(
            cfg.csv_path,
            PathBuf::from("schema-database-project/database_schema.csv")
        );
        assert_eq!(cfg.probe_timeout, Duration::from_secs(5));
    }
}
