//! Client-side projections over the fetched issue list: filtering and stats.
//!
//! Nothing here mutates the list; every result is recomputed from the
//! current inputs.

use serde::Serialize;

use super::models::{Issue, IssueStatus};

/// Feed filter state. `None` / empty search means "no filter" for that input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    pub category: Option<String>,
    pub status: Option<IssueStatus>,
    pub search: String,
}

impl FeedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.status.is_some() || !self.search.is_empty()
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| issue.category == c);
        let status_ok = self.status.is_none_or(|s| issue.status == s);
        let search_ok = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            issue.title.to_lowercase().contains(&needle)
                || issue.description.to_lowercase().contains(&needle)
        };
        category_ok && status_ok && search_ok
    }

    /// The visible subset, in the same order as `issues`.
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }

    pub fn summary(&self, issues: &[Issue]) -> String {
        format!(
            "Showing {} of {} issues",
            self.apply(issues).len(),
            issues.len()
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl IssueStats {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(
            Self {
                total: issues.len(),
                ..Self::default()
            },
            |mut stats, issue| {
                match issue.status {
                    IssueStatus::Open => stats.open += 1,
                    IssueStatus::InProgress => stats.in_progress += 1,
                    IssueStatus::Resolved => stats.resolved += 1,
                }
                stats
            },
        )
    }

    pub fn count(&self, status: IssueStatus) -> usize {
        match status {
            IssueStatus::Open => self.open,
            IssueStatus::InProgress => self.in_progress,
            IssueStatus::Resolved => self.resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn issue(id: &str, category: &str, status: IssueStatus, title: &str, description: &str) -> Issue {
        let now = Utc::now();
        Issue {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            location: "Main St".into(),
            contact: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Issue> {
        vec![
            issue("1", "Safety", IssueStatus::Open, "pothole", "deep hole on Elm"),
            issue("2", "Health", IssueStatus::Resolved, "flu", "clinic closed"),
        ]
    }

    fn ids(issues: Vec<&Issue>) -> Vec<&str> {
        issues.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_category_and_search_compose() {
        let issues = sample();
        let filter = FeedFilter::new().with_category("Safety").with_search("pot");
        assert_eq!(ids(filter.apply(&issues)), vec!["1"]);
    }

    #[test]
    fn test_status_filter_alone() {
        let issues = sample();
        let filter = FeedFilter::new().with_status(IssueStatus::Resolved);
        assert_eq!(ids(filter.apply(&issues)), vec!["2"]);
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let issues = sample();
        let filter = FeedFilter::new();
        assert!(!filter.is_active());
        assert_eq!(ids(filter.apply(&issues)), vec!["1", "2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description() {
        let issues = sample();
        let filter = FeedFilter::new().with_search("CLINIC");
        assert_eq!(ids(filter.apply(&issues)), vec!["2"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let issues = sample();
        assert!(FeedFilter::new().with_category("safety").apply(&issues).is_empty());
    }

    #[test]
    fn test_conflicting_filters_yield_nothing() {
        let issues = sample();
        let filter = FeedFilter::new()
            .with_category("Safety")
            .with_status(IssueStatus::Resolved);
        assert!(filter.apply(&issues).is_empty());
        assert_eq!(filter.summary(&issues), "Showing 0 of 2 issues");
    }

    #[test]
    fn test_stats_counts_per_status() {
        let mut issues = sample();
        issues.push(issue("3", "Other", IssueStatus::Open, "graffiti", "wall"));
        issues.push(issue("4", "Other", IssueStatus::InProgress, "noise", "late"));
        let stats = IssueStats::from_issues(&issues);
        assert_eq!(
            stats,
            IssueStats {
                total: 4,
                open: 2,
                in_progress: 1,
                resolved: 1
            }
        );
        assert_eq!(stats.count(IssueStatus::Open), 2);
        assert_eq!(IssueStats::from_issues(&[]), IssueStats::default());
    }
}
