//! Error types for schemacheck

use std::fmt;
use std::path::PathBuf;

/// Result type alias for schemacheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// The closed set of failures the checklist can hit.
#[derive(Debug)]
pub enum Error {
    /// HTTP probe failure (timeout, refused connection, DNS)
    Network(reqwest::Error),
    /// The schema CSV does not exist at the configured path
    FileNotFound(PathBuf),
    /// Required columns missing from the CSV header
    SchemaMismatch { missing: Vec<String> },
    /// The CSV parsed but contained no data rows
    EmptySchema,
    /// CSV decoding errors
    Parse(csv::Error),
    /// IO errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::FileNotFound(path) => {
                write!(f, "fichier CSV non trouvé: {}", path.display())
            }
            Error::SchemaMismatch { missing } => {
                write!(f, "colonnes manquantes: {}", missing.join(", "))
            }
            Error::EmptySchema => write!(f, "aucune donnée à valider"),
            Error::Parse(e) => write!(f, "CSV parse error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e)
    }
}
