//! Task record and the draft used to create one.

use super::{ColumnKey, TaskDraftError, TaskId};
use serde::{Deserialize, Serialize};

/// Tag given to drafts that do not set one.
pub const DEFAULT_TAG: &str = "Quick Add";

/// Estimate given to drafts that do not set one.
pub const DEFAULT_ETA: &str = "Unassigned";

/// A task record held by a board column.
///
/// Display fields are opaque to the core. `column` mirrors list membership
/// and is only rewritten by the board store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    owner: String,
    tag: String,
    eta: String,
    column: ColumnKey,
}

/// Parameter object for reconstructing a task supplied by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Display title.
    pub title: String,
    /// Display owner.
    pub owner: String,
    /// Display tag.
    pub tag: String,
    /// Display estimate.
    pub eta: String,
    /// Column the collaborator believes the task belongs to.
    pub column: ColumnKey,
}

impl Task {
    /// Reconstructs a task from collaborator data.
    ///
    /// The column is resynchronised from list membership when the task is
    /// seeded into a store.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            owner: data.owner,
            tag: data.tag,
            eta: data.eta,
            column: data.column,
        }
    }

    pub(crate) fn from_draft(id: TaskId, draft: TaskDraft, column: ColumnKey) -> Self {
        Self {
            id,
            title: draft.title,
            owner: draft.owner,
            tag: draft.tag,
            eta: draft.eta,
            column,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the estimate.
    #[must_use]
    pub fn eta(&self) -> &str {
        &self.eta
    }

    /// Returns the key of the column containing this task.
    #[must_use]
    pub const fn column(&self) -> &ColumnKey {
        &self.column
    }

    pub(crate) fn relocate(&mut self, column: ColumnKey) {
        self.column = column;
    }
}

/// Validated input for a new task, as produced by the quick-add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    owner: String,
    tag: String,
    eta: String,
}

impl TaskDraft {
    /// Creates a draft from a title and an owner.
    ///
    /// Both values are trimmed. The tag and estimate start at
    /// [`DEFAULT_TAG`] and [`DEFAULT_ETA`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDraftError::EmptyTitle`] or [`TaskDraftError::EmptyOwner`]
    /// when the corresponding value is blank.
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Result<Self, TaskDraftError> {
        let raw_title = title.into();
        let raw_owner = owner.into();
        let trimmed_title = raw_title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskDraftError::EmptyTitle);
        }
        let trimmed_owner = raw_owner.trim();
        if trimmed_owner.is_empty() {
            return Err(TaskDraftError::EmptyOwner);
        }

        Ok(Self {
            title: trimmed_title.to_owned(),
            owner: trimmed_owner.to_owned(),
            tag: DEFAULT_TAG.to_owned(),
            eta: DEFAULT_ETA.to_owned(),
        })
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the estimate.
    #[must_use]
    pub fn with_eta(mut self, eta: impl Into<String>) -> Self {
        self.eta = eta.into();
        self
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}
