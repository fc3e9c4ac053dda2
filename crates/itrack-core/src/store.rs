//! Issue stores for itrack
//!
//! No SQL, no daemon - one JSON document per line in a single file.
//!
//! [`IssueStore`] is the seam the HTTP service is built against; the server
//! runs on [`JsonlStore`], tests run on [`MemoryStore`]. `list()` returns
//! insertion order. That is a property of these implementations, not part of
//! the contract.

use crate::{generate_id, Error, Issue, IssueUpdate, NewIssue, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Storage contract for issue records
///
/// Single-document operations only; consistency across calls is whatever the
/// backing file gives. Implementations must never reuse an id.
pub trait IssueStore: Send + Sync {
    /// Assign a fresh id, persist the record, return it
    fn insert(&mut self, new: NewIssue) -> Result<Issue>;

    /// All records
    fn list(&self) -> Vec<Issue>;

    /// Lookup by id
    fn get(&self, id: &str) -> Option<Issue>;

    /// Overwrite the named fields on an existing record
    fn replace(&mut self, id: &str, update: IssueUpdate) -> Result<Issue>;

    /// Hard delete
    fn remove(&mut self, id: &str) -> Result<()>;
}

/// In-memory issue store
///
/// Same contract as [`JsonlStore`], nothing persisted. Useful for tests and
/// embedding.
#[derive(Default)]
pub struct MemoryStore {
    issues: HashMap<String, Issue>,
    order: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.issues.contains_key(&id) {
                return id;
            }
        }
    }
}

impl IssueStore for MemoryStore {
    fn insert(&mut self, new: NewIssue) -> Result<Issue> {
        let issue = Issue {
            id: self.fresh_id(),
            title: new.title,
            description: new.description,
            status: new.status,
        };
        self.order.push(issue.id.clone());
        self.issues.insert(issue.id.clone(), issue.clone());
        Ok(issue)
    }

    fn list(&self) -> Vec<Issue> {
        self.order
            .iter()
            .filter_map(|id| self.issues.get(id))
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Issue> {
        self.issues.get(id).cloned()
    }

    fn replace(&mut self, id: &str, update: IssueUpdate) -> Result<Issue> {
        let issue = self.issues.get_mut(id).ok_or(Error::NotFound)?;
        issue.apply(update);
        Ok(issue.clone())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.issues.remove(id).ok_or(Error::NotFound)?;
        self.order.retain(|i| i != id);
        Ok(())
    }
}

/// JSONL-backed issue store
///
/// Loads everything at open, rewrites the whole file after each mutation.
/// The file path is the storage "connection string".
pub struct JsonlStore {
    path: PathBuf,
    issues: HashMap<String, Issue>,
    order: Vec<String>,
}

impl JsonlStore {
    /// Open the store at `path`, creating the file if it does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            issues: HashMap::new(),
            order: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all issues from JSONL
    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let issue: Issue = serde_json::from_str(&line)?;
            self.order.push(issue.id.clone());
            self.issues.insert(issue.id.clone(), issue);
        }

        Ok(())
    }

    /// Save all issues to JSONL, in insertion order
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for id in &self.order {
            if let Some(issue) = self.issues.get(id) {
                serde_json::to_writer(&mut writer, issue)?;
                writeln!(writer)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.issues.contains_key(&id) {
                return id;
            }
        }
    }
}

impl IssueStore for JsonlStore {
    fn insert(&mut self, new: NewIssue) -> Result<Issue> {
        let issue = Issue {
            id: self.fresh_id(),
            title: new.title,
            description: new.description,
            status: new.status,
        };
        self.order.push(issue.id.clone());
        self.issues.insert(issue.id.clone(), issue.clone());
        self.save()?;
        Ok(issue)
    }

    fn list(&self) -> Vec<Issue> {
        self.order
            .iter()
            .filter_map(|id| self.issues.get(id))
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Issue> {
        self.issues.get(id).cloned()
    }

    fn replace(&mut self, id: &str, update: IssueUpdate) -> Result<Issue> {
        let issue = self.issues.get_mut(id).ok_or(Error::NotFound)?;
        issue.apply(update);
        let updated = issue.clone();
        self.save()?;
        Ok(updated)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.issues.remove(id).ok_or(Error::NotFound)?;
        self.order.retain(|i| i != id);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;
    use std::collections::HashSet;

    fn new_issue(title: &str) -> NewIssue {
        NewIssue {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let mut store = MemoryStore::new();
        let mut seen = HashSet::new();
        for i in 0..50 {
            let issue = store.insert(new_issue(&format!("issue {i}"))).unwrap();
            assert!(seen.insert(issue.id));
        }
    }

    #[test]
    fn test_get_after_insert() {
        let mut store = MemoryStore::new();
        let created = store
            .insert(NewIssue {
                title: "Bug A".to_string(),
                description: "crashes".to_string(),
                status: Status::Open,
            })
            .unwrap();
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_replace_applies_fields_and_keeps_id() {
        let mut store = MemoryStore::new();
        let created = store
            .insert(NewIssue {
                title: "Bug A".to_string(),
                description: "crashes".to_string(),
                status: Status::Open,
            })
            .unwrap();

        let updated = store
            .replace(
                &created.id,
                IssueUpdate {
                    status: Some(Status::Closed),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, Status::Closed);
        assert_eq!(updated.title, "Bug A");
        assert_eq!(updated.description, "crashes");
        assert_eq!(store.get(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let mut store = MemoryStore::new();
        let created = store.insert(new_issue("short lived")).unwrap();
        store.remove(&created.id).unwrap();
        assert!(store.get(&created.id).is_none());
        assert!(matches!(store.remove(&created.id), Err(Error::NotFound)));
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = MemoryStore::new();
        assert!(store.get("isu-missing").is_none());
        assert!(matches!(
            store.replace("isu-missing", IssueUpdate::default()),
            Err(Error::NotFound)
        ));
        assert!(matches!(store.remove("isu-missing"), Err(Error::NotFound)));
    }

    #[test]
    fn test_list_membership() {
        let mut store = MemoryStore::new();
        let mut ids = HashSet::new();
        for i in 0..5 {
            ids.insert(store.insert(new_issue(&format!("issue {i}"))).unwrap().id);
        }
        let listed: HashSet<_> = store.list().into_iter().map(|i| i.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_list_is_insertion_ordered() {
        let mut store = MemoryStore::new();
        let a = store.insert(new_issue("first")).unwrap();
        let b = store.insert(new_issue("second")).unwrap();
        let c = store.insert(new_issue("third")).unwrap();
        let ids: Vec<_> = store.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_jsonl_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.jsonl");

        let (a, b) = {
            let mut store = JsonlStore::open(&path).unwrap();
            let a = store.insert(new_issue("first")).unwrap();
            let b = store
                .insert(NewIssue {
                    title: "second".to_string(),
                    description: "details".to_string(),
                    status: Status::InProgress,
                })
                .unwrap();
            (a, b)
        };

        let store = JsonlStore::open(&path).unwrap();
        let listed = store.list();
        assert_eq!(listed, vec![a, b.clone()]);
        assert_eq!(store.get(&b.id).unwrap().status, Status::InProgress);
    }

    #[test]
    fn test_jsonl_store_remove_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.jsonl");

        let mut store = JsonlStore::open(&path).unwrap();
        let keep = store.insert(new_issue("keep")).unwrap();
        let removed = store.insert(new_issue("drop me")).unwrap();
        store.remove(&removed.id).unwrap();
        drop(store);

        let store = JsonlStore::open(&path).unwrap();
        assert_eq!(store.list(), vec![keep]);
        assert!(store.get(&removed.id).is_none());
    }

    #[test]
    fn test_jsonl_store_opens_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path().join("fresh.jsonl")).unwrap();
        assert!(store.list().is_empty());
    }
}
