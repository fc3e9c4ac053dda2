//! Local edit drafts
//!
//! A [`Draft`] is the client-side editable copy of a committed issue. Edits
//! land on the draft, never on the committed record; reconciliation happens
//! only when the caller asks for the update to send on save.

use crate::{Issue, IssueUpdate, Status};

/// Editable copy of a committed issue
#[derive(Debug, Clone)]
pub struct Draft {
    committed: Issue,
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl Draft {
    /// Start a draft from the committed record
    pub fn of(committed: Issue) -> Self {
        Self {
            title: committed.title.clone(),
            description: committed.description.clone(),
            status: committed.status,
            committed,
        }
    }

    /// Id of the committed record this draft edits
    pub fn id(&self) -> &str {
        &self.committed.id
    }

    /// The committed record the draft was started from
    pub fn committed(&self) -> &Issue {
        &self.committed
    }

    /// Whether any field differs from the committed record
    pub fn is_dirty(&self) -> bool {
        self.title != self.committed.title
            || self.description != self.committed.description
            || self.status != self.committed.status
    }

    /// Reconcile into a partial update carrying only the changed fields
    pub fn into_update(self) -> IssueUpdate {
        IssueUpdate {
            title: (self.title != self.committed.title).then_some(self.title),
            description: (self.description != self.committed.description)
                .then_some(self.description),
            status: (self.status != self.committed.status).then_some(self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed() -> Issue {
        Issue {
            id: "isu-ab12cd34".to_string(),
            title: "Bug A".to_string(),
            description: "crashes".to_string(),
            status: Status::Open,
        }
    }

    #[test]
    fn test_clean_draft_produces_empty_update() {
        let draft = Draft::of(committed());
        assert!(!draft.is_dirty());
        assert!(draft.into_update().is_empty());
    }

    #[test]
    fn test_only_changed_fields_are_reconciled() {
        let mut draft = Draft::of(committed());
        draft.status = Status::Closed;
        assert!(draft.is_dirty());

        let update = draft.into_update();
        assert_eq!(update.status, Some(Status::Closed));
        assert!(update.title.is_none());
        assert!(update.description.is_none());
    }

    #[test]
    fn test_draft_edits_leave_committed_untouched() {
        let mut draft = Draft::of(committed());
        draft.title = "Bug A (renamed)".to_string();
        assert_eq!(draft.committed().title, "Bug A");
    }
}
