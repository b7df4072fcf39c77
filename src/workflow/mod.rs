//! The synthetic validation task and its scripted status workflow.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// The seven stations every validation task moves through, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Created,
    FileUploaded,
    StructureValidated,
    ContentAnalyzed,
    ReadyForReview,
    Approved,
    Integrated,
}

impl TaskStatus {
    /// The full workflow, in transition order.
    pub const SEQUENCE: [TaskStatus; 7] = [
        TaskStatus::Created,
        TaskStatus::FileUploaded,
        TaskStatus::StructureValidated,
        TaskStatus::ContentAnalyzed,
        TaskStatus::ReadyForReview,
        TaskStatus::Approved,
        TaskStatus::Integrated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Created => "created",
            TaskStatus::FileUploaded => "file_uploaded",
            TaskStatus::StructureValidated => "structure_validated",
            TaskStatus::ContentAnalyzed => "content_analyzed",
            TaskStatus::ReadyForReview => "ready_for_review",
            TaskStatus::Approved => "approved",
            TaskStatus::Integrated => "integrated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "created" => Some(TaskStatus::Created),
            "file_uploaded" => Some(TaskStatus::FileUploaded),
            "structure_validated" => Some(TaskStatus::StructureValidated),
            "content_analyzed" => Some(TaskStatus::ContentAnalyzed),
            "ready_for_review" => Some(TaskStatus::ReadyForReview),
            "approved" => Some(TaskStatus::Approved),
            "integrated" => Some(TaskStatus::Integrated),
            _ => None,
        }
    }

    /// Human-readable step description printed during the simulation.
    pub fn description(&self) -> &'static str {
        match self {
            TaskStatus::Created => "Tâche créée",
            TaskStatus::FileUploaded => "Fichier téléchargé",
            TaskStatus::StructureValidated => "Structure validée",
            TaskStatus::ContentAnalyzed => "Contenu analysé",
            TaskStatus::ReadyForReview => "Prêt pour révision",
            TaskStatus::Approved => "Approuvé",
            TaskStatus::Integrated => "Intégré",
        }
    }
}

/// One simulated review-and-approval task. Only ever a single instance
/// per run, owned by the main execution path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub file_path: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub tables_count: usize,
    pub columns_count: usize,
}

impl ValidationTask {
    /// Synthesize a task for the given CSV, with counts derived from the
    /// parsed data. The id embeds the call-time unix timestamp.
    pub fn new(csv_path: &Path, tables_count: usize, columns_count: usize) -> Self {
        let now = Local::now();
        Self {
            id: format!("task_{}", now.timestamp()),
            title: "Validation du schéma de base de données".to_string(),
            description: format!("Validation du fichier {}", csv_path.display()),
            file_path: csv_path.display().to_string(),
            status: TaskStatus::Created,
            created_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            tables_count,
            columns_count,
        }
    }
}

/// Create the task and print its summary block.
pub fn create_validation_task(
    csv_path: &Path,
    tables_count: usize,
    columns_count: usize,
) -> ValidationTask {
    println!("🚀 Création d'une tâche de validation simulée...");
    let task = ValidationTask::new(csv_path, tables_count, columns_count);
    println!("✅ Tâche de validation créée:");
    println!("  - ID: {}", task.id);
    println!("  - Titre: {}", task.title);
    println!("  - Fichier: {}", task.file_path);
    println!("  - Tables: {}", task.tables_count);
    println!("  - Colonnes: {}", task.columns_count);
    info!(id = %task.id, "validation task created");
    task
}

/// Walk the task through the fixed seven-step sequence, pausing
/// `step_delay` between steps. Always completes once started.
pub async fn simulate_workflow(mut task: ValidationTask, step_delay: Duration) -> ValidationTask {
    println!("🔄 Simulation du workflow de validation...");

    for status in TaskStatus::SEQUENCE {
        println!("  📝 {}...", status.description());
        task.status = status;
        info!(status = status.as_str(), "workflow step");
        sleep(step_delay).await;
    }

    println!("✅ Workflow de validation terminé avec succès");
    task
}
