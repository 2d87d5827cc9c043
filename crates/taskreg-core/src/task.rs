//! Task and Execution types.

use crate::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for registering a new Task.
///
/// Carries no id and no history; the store assigns the id on insert. Unknown
/// fields in a request body (such as a client-supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Display label.
    pub name: String,

    /// Free-text attribution.
    #[serde(default)]
    pub owner: String,

    /// Literal shell command. A missing command is left empty for the
    /// safety gate to reject.
    #[serde(default)]
    pub command: String,
}

impl NewTask {
    /// Create a new NewTask.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            command: command.into(),
        }
    }
}

/// A Task is a named, owned shell command plus its execution history.
///
/// The history is append-only: the only way to change it is
/// [`Task::record_execution`]. Removing history means deleting the Task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    id: TaskId,

    /// Display label, not required to be unique.
    pub name: String,

    /// Who registered this task.
    pub owner: String,

    /// Literal shell command, validated once at creation.
    pub command: String,

    /// Completed runs, oldest first.
    #[serde(default)]
    executions: Vec<Execution>,
}

impl Task {
    /// Build a stored Task from creation input and an assigned id.
    pub fn from_new(id: TaskId, new: NewTask) -> Self {
        Self {
            id,
            name: new.name,
            owner: new.owner,
            command: new.command,
            executions: Vec::new(),
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Execution history in chronological order.
    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }

    /// Append one completed run to the history.
    pub fn record_execution(&mut self, execution: Execution) {
        self.executions.push(execution);
    }

    /// Get the most recent execution, if any.
    pub fn latest_execution(&self) -> Option<&Execution> {
        self.executions.last()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// One completed run of a Task's command.
///
/// Immutable once constructed: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    output: String,
}

impl Execution {
    /// Create a new Execution.
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            output: output.into(),
        }
    }

    /// When the child process was about to be spawned.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// When the child process terminated, or the failure was caught.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Combined output followed by the exit status line.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}
