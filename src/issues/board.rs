//! Client-side cache of the issue list plus its loading/error state.
//!
//! The cache is disposable: `refresh` always replaces it with the server's
//! list. Mutations update it locally with the record the server returned.

use super::client::IssueClient;
use super::feed::{FeedFilter, IssueStats};
use super::form::IssueForm;
use super::models::{Issue, IssueStatus};
use crate::errors::ClientError;

#[derive(Debug, Clone, Default)]
pub struct IssueBoard {
    pub issues: Vec<Issue>,
    pub loading: bool,
    pub error: Option<String>,
}

/// One status button on an issue card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChoice {
    pub status: IssueStatus,
    /// The issue is already in this status.
    pub disabled: bool,
}

/// Status controls for `issue`, with the current status disabled.
pub fn status_choices(issue: &Issue) -> [StatusChoice; 3] {
    IssueStatus::ALL.map(|status| StatusChoice {
        status,
        disabled: status == issue.status,
    })
}

impl IssueBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the list. On failure the previous cache is kept and the error
    /// message is recorded.
    pub async fn refresh(&mut self, client: &IssueClient) -> Result<(), ClientError> {
        self.loading = true;
        let result = client.fetch_issues().await;
        self.loading = false;
        match result {
            Ok(issues) => {
                self.issues = issues;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Submit the form and put the created issue at the top of the cache.
    /// The form is reset only when the submit succeeds.
    pub async fn add_issue(
        &mut self,
        client: &IssueClient,
        form: &mut IssueForm,
    ) -> Result<Issue, ClientError> {
        let created = client.create_issue(&form.to_request()).await?;
        self.issues.insert(0, created.clone());
        form.reset();
        Ok(created)
    }

    pub async fn change_status(
        &mut self,
        client: &IssueClient,
        id: &str,
        status: IssueStatus,
    ) -> Result<Issue, ClientError> {
        let updated = client.update_issue_status(id, status).await?;
        self.apply_update(updated.clone());
        Ok(updated)
    }

    /// Replace the cached copy of `issue` in place.
    ///
    /// Returns false when the record is unknown or older than the cached
    /// copy, which happens when responses to rapid status changes arrive out
    /// of order.
    pub fn apply_update(&mut self, issue: Issue) -> bool {
        match self.issues.iter_mut().find(|cached| cached.id == issue.id) {
            Some(cached) if issue.updated_at >= cached.updated_at => {
                *cached = issue;
                true
            }
            _ => false,
        }
    }

    pub fn visible<'a>(&'a self, filter: &FeedFilter) -> Vec<&'a Issue> {
        filter.apply(&self.issues)
    }

    pub fn stats(&self) -> IssueStats {
        IssueStats::from_issues(&self.issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn issue(id: &str, status: IssueStatus) -> Issue {
        let now = Utc::now();
        Issue {
            id: id.into(),
            title: format!("issue {}", id),
            description: "desc".into(),
            category: "Safety".into(),
            location: "Main St".into(),
            contact: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_choices_disable_current() {
        let choices = status_choices(&issue("a", IssueStatus::InProgress));
        let disabled: Vec<IssueStatus> = choices
            .iter()
            .filter(|c| c.disabled)
            .map(|c| c.status)
            .collect();
        assert_eq!(disabled, vec![IssueStatus::InProgress]);
        assert_eq!(choices[0].status, IssueStatus::Open);
    }

    #[test]
    fn test_apply_update_replaces_in_place() {
        let mut board = IssueBoard {
            issues: vec![issue("a", IssueStatus::Open), issue("b", IssueStatus::Open)],
            ..IssueBoard::default()
        };
        let mut updated = board.issues[1].clone();
        updated.status = IssueStatus::Resolved;
        updated.updated_at += Duration::seconds(1);

        assert!(board.apply_update(updated));
        assert_eq!(board.issues[1].status, IssueStatus::Resolved);
        assert_eq!(board.issues[0].id, "a");
        assert_eq!(board.stats().resolved, 1);
    }

    #[test]
    fn test_apply_update_ignores_stale_response() {
        let base = issue("a", IssueStatus::Open);
        let mut first = base.clone();
        first.status = IssueStatus::InProgress;
        first.updated_at = base.updated_at + Duration::seconds(1);
        let mut second = base.clone();
        second.status = IssueStatus::Resolved;
        second.updated_at = base.updated_at + Duration::seconds(2);

        let mut board = IssueBoard {
            issues: vec![base],
            ..IssueBoard::default()
        };
        assert!(board.apply_update(second));
        assert!(!board.apply_update(first));
        assert_eq!(board.issues[0].status, IssueStatus::Resolved);
    }

    #[test]
    fn test_apply_update_unknown_id() {
        let mut board = IssueBoard::new();
        assert!(!board.apply_update(issue("ghost", IssueStatus::Open)));
        assert!(board.issues.is_empty());
    }

    #[test]
    fn test_visible_uses_filter() {
        let board = IssueBoard {
            issues: vec![issue("a", IssueStatus::Open), issue("b", IssueStatus::Resolved)],
            ..IssueBoard::default()
        };
        let filter = FeedFilter::new().with_status(IssueStatus::Open);
        let visible = board.visible(&filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");
    }
}
