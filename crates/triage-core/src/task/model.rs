//! Task and backlog domain models.
//!
//! These mirror the persisted JSON schema exactly: a backlog document is
//! `{"tasks":[...]}` and each task carries the fields below. Unknown-status
//! values are tolerated, and `subtasks`/`dependencies` round-trip without
//! being interpreted anywhere in the lifecycle logic.

use serde::{Deserialize, Serialize};

/// Well-known task status values. The `status` field itself stays an opaque
/// string so externally supplied documents with other values still load.
pub const STATUS_OPEN: &str = "Open";
pub const STATUS_TODO: &str = "Todo";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_DONE: &str = "Done";

/// Default value of the `type` field for system-created tasks.
pub const DEFAULT_TASK_KIND: &str = "task";

fn default_status() -> String {
    STATUS_OPEN.to_string()
}

fn default_kind() -> String {
    DEFAULT_TASK_KIND.to_string()
}

/// A single backlog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// `T` + 4 zero-padded digits when allocated by the system. Externally
    /// supplied tasks may carry ids outside that format.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Insertion order is preserved for display.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Ordered, e.g. `["human", "ai"]`.
    #[serde(default)]
    pub assignable_to: Vec<String>,
    /// ISO-8601, set once at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// ISO-8601, set when `status` transitions into `Done` from a non-`Done`
    /// value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    /// Present in the schema but not exercised by the lifecycle logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<TaskDependencies>,
}

impl Task {
    /// Creates a task with the given id and title and all other fields at
    /// their defaults. The creation timestamp is left to the caller.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: default_status(),
            kind: default_kind(),
            labels: Vec::new(),
            assignable_to: Vec::new(),
            created: None,
            completion_time: None,
            subtasks: None,
            dependencies: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == STATUS_DONE
    }
}

/// Structured cross-references between tasks. Preserved on round-trip only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDependencies {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<DependencyRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nice_to_have: Vec<DependencyRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub human: Vec<HumanDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRef {
    pub task_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanDependency {
    pub assignee: String,
    pub action: String,
    pub status: String,
    pub reason: String,
}

/// The full ordered task collection for one principal.
///
/// Insertion order equals storage and display order. The container itself
/// enforces no id uniqueness; that is a caller responsibility.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Backlog {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Backlog {
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new("T0001", "Write docs");
        assert_eq!(task.status, STATUS_OPEN);
        assert_eq!(task.kind, DEFAULT_TASK_KIND);
        assert!(task.labels.is_empty());
        assert!(!task.is_done());
    }

    #[test]
    fn test_backlog_deserializes_sparse_tasks() {
        let backlog: Backlog =
            serde_json::from_str(r#"{"tasks":[{"id":"X-17","title":"external"}]}"#).unwrap();
        let task = backlog.find_task("X-17").unwrap();
        assert_eq!(task.status, STATUS_OPEN);
        assert_eq!(task.kind, DEFAULT_TASK_KIND);
        assert!(task.created.is_none());
    }

    #[test]
    fn test_round_trip_preserves_uninterpreted_fields() {
        let json = serde_json::json!({
            "tasks": [{
                "id": "T0001",
                "title": "parent",
                "status": "In Progress",
                "type": "epic",
                "description": "",
                "labels": ["infra"],
                "assignable_to": ["human"],
                "subtasks": [{"id": "T0002", "title": "child"}],
                "dependencies": {
                    "must": [{"task_id": "T0003", "reason": "blocks rollout"}],
                    "human": [{
                        "assignee": "ops",
                        "action": "approve budget",
                        "status": "waiting",
                        "reason": "cost"
                    }]
                }
            }]
        });
        let backlog: Backlog = serde_json::from_value(json).unwrap();
        let reparsed: Backlog =
            serde_json::from_str(&serde_json::to_string(&backlog).unwrap()).unwrap();
        assert_eq!(backlog, reparsed);

        let deps = reparsed.tasks[0].dependencies.as_ref().unwrap();
        assert_eq!(deps.must[0].task_id, "T0003");
        assert_eq!(deps.human[0].assignee, "ops");
        assert_eq!(
            reparsed.tasks[0].subtasks.as_ref().unwrap()[0].title,
            "child"
        );
    }

    #[test]
    fn test_serialized_task_omits_absent_optionals() {
        let value = serde_json::to_value(Task::new("T0001", "minimal")).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("created"));
        assert!(!object.contains_key("completion_time"));
        assert!(!object.contains_key("subtasks"));
        assert!(!object.contains_key("dependencies"));
        assert_eq!(object["type"], "task");
    }
}
