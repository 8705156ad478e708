use serde_derive::{Deserialize, Serialize};

/// Lifecycle status of a job instruction, as stored in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Waiting,
    InProgress,
    Completed,
    Delayed,
    NonCompliant,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Waiting => "waiting",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Delayed => "delayed",
            JobStatus::NonCompliant => "non_compliant",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the `job_instructions` collection. The schema is owned by
/// the wider application; this crate only consumes it.
#[derive(Debug, Clone, Deserialize)]
pub struct JobInstruction {
    pub id: i64,
    #[serde(default)]
    pub tpo_id: Option<i64>,
    #[serde(default)]
    pub task_group_id: Option<i64>,
    pub team: String,
    #[serde(default)]
    pub assignee: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub evidence_url: Option<String>,
    #[serde(default)]
    pub verification_result: Option<String>,
    #[serde(default)]
    pub ai_score: Option<f64>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub feedback_comment: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub workplace: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    pub created_at: String,
}

/// A TPO row: the time/place/occasion context key grouping checklist
/// items.
#[derive(Debug, Clone, Deserialize)]
pub struct Tpo {
    pub id: i64,
    pub tpo_time: String,
    pub tpo_place: String,
    pub tpo_occasion: String,
}

/// A task group attached to a TPO.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskGroup {
    pub id: i64,
    #[serde(default)]
    pub tpo_id: Option<i64>,
}

/// Junction row linking task groups to checklist items (many-to-many).
#[derive(Debug, Clone, Deserialize)]
pub struct TaskGroupItem {
    pub id: i64,
    pub task_group_id: i64,
    pub checklist_item_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistItem {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// An object-storage bucket as returned by the storage API.
#[derive(Debug, Clone, Deserialize)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: bool,
}
