use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use super::models::*;
use crate::errors::StoreError;

/// Shared handle to the process-wide issue collection.
///
/// Cloning is cheap and every clone sees the same records. Records are kept
/// most-recent-first; each mutation holds the write lock for its whole
/// duration, so creates and status updates never interleave.
#[derive(Clone, Default)]
pub struct IssueStore {
    inner: Arc<RwLock<Vec<Issue>>>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written record
    // behind, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Issue>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Issue>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate, truncate and insert a new report at the front of the list.
    pub fn create(&self, fields: CreateIssueRequest) -> Result<Issue, StoreError> {
        let missing = fields.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::MissingFields { fields: missing });
        }

        let now = Utc::now();
        let issue = Issue {
            id: Uuid::new_v4().to_string(),
            title: truncate_chars(fields.title.as_deref().unwrap_or_default(), TITLE_MAX),
            description: truncate_chars(
                fields.description.as_deref().unwrap_or_default(),
                DESCRIPTION_MAX,
            ),
            category: truncate_chars(fields.category.as_deref().unwrap_or_default(), CATEGORY_MAX),
            location: truncate_chars(fields.location.as_deref().unwrap_or_default(), LOCATION_MAX),
            contact: fields
                .contact
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| truncate_chars(c, CONTACT_MAX)),
            status: IssueStatus::Open,
            created_at: now,
            updated_at: now,
        };

        self.write().insert(0, issue.clone());
        Ok(issue)
    }

    pub fn list(&self) -> Vec<Issue> {
        self.read().clone()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Issue, StoreError> {
        self.read()
            .iter()
            .find(|issue| issue.id == id)
            .cloned()
            .ok_or_else(|| StoreError::IssueNotFound { id: id.to_string() })
    }

    /// Move an issue to `status`.
    ///
    /// The id is resolved before the status text is parsed, so an unknown id
    /// wins over a bad status. Setting the current status again is accepted
    /// and leaves `updated_at` untouched.
    pub fn update_status(&self, id: &str, status: Option<&str>) -> Result<Issue, StoreError> {
        let mut issues = self.write();
        let issue = issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| StoreError::IssueNotFound { id: id.to_string() })?;

        let next = status
            .and_then(|s| IssueStatus::from_str(s).ok())
            .ok_or_else(|| StoreError::InvalidStatus {
                value: status.map(str::to_string),
            })?;

        if issue.status != next {
            issue.status = next;
            // Never step backwards, even if the wall clock does.
            issue.updated_at = Utc::now().max(issue.updated_at);
        }
        Ok(issue.clone())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
