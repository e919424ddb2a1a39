//! Client commands: `list`, `submit`, `status`, `show`, `stats`.

use anyhow::{Context, Result};

use reporter::issues::board::{IssueBoard, status_choices};
use reporter::issues::client::IssueClient;
use reporter::issues::feed::FeedFilter;
use reporter::issues::form::IssueForm;
use reporter::issues::models::{Coordinates, Issue, IssueStatus};

/// Arguments of `reporter submit`.
pub struct SubmitArgs {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub coords: Option<Coordinates>,
}

impl SubmitArgs {
    fn into_form(self) -> IssueForm {
        let mut form = IssueForm {
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            coordinates: None,
        };
        if let Some(coords) = self.coords {
            form.use_coordinates(coords);
        }
        form
    }
}

fn status_label(status: IssueStatus) -> console::StyledObject<&'static str> {
    let label = console::style(status.as_str());
    match status {
        IssueStatus::Open => label.yellow(),
        IssueStatus::InProgress => label.blue(),
        IssueStatus::Resolved => label.green(),
    }
}

fn print_issue(issue: &Issue) {
    println!(
        "{} {}  {}",
        status_label(issue.status),
        console::style(&issue.id).dim(),
        console::style(issue.created_at.format("%Y-%m-%d %H:%M UTC")).dim()
    );
    println!("  {}", console::style(&issue.title).bold());
    println!("  {}", issue.description);
    println!("  Category: {}", issue.category);
    println!("  Location: {}", issue.location);
    if let Some(contact) = &issue.contact {
        println!("  Contact:  {}", contact);
    }
}

pub async fn cmd_list(
    server: &str,
    category: Option<String>,
    status: Option<IssueStatus>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let client = IssueClient::new(server);
    let mut board = IssueBoard::new();
    board
        .refresh(&client)
        .await
        .with_context(|| format!("Failed to load issues from {}", client.base_url()))?;

    let filter = FeedFilter {
        category,
        status,
        search: search.unwrap_or_default(),
    };
    let visible = board.visible(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!();
    println!("{}", console::style("Recent issues").bold().cyan());
    println!("{}", console::style(filter.summary(&board.issues)).dim());
    if board.issues.is_empty() {
        println!("{}", console::style("No issues yet. Be the first to report!").dim());
    } else if visible.is_empty() && filter.is_active() {
        println!("{}", console::style("No issues match your filters.").dim());
    }
    for issue in visible {
        println!();
        print_issue(issue);
    }
    println!();
    Ok(())
}

pub async fn cmd_submit(server: &str, args: SubmitArgs) -> Result<()> {
    let client = IssueClient::new(server);
    let mut form = args.into_form();
    let mut board = IssueBoard::new();

    let created = board
        .add_issue(&client, &mut form)
        .await
        .context("Failed to submit issue")?;

    println!("{}", console::style("Issue submitted successfully!").green());
    print_issue(&created);
    Ok(())
}

pub async fn cmd_status(server: &str, id: &str, status: IssueStatus) -> Result<()> {
    let client = IssueClient::new(server);
    let current = client
        .get_issue(id)
        .await
        .with_context(|| format!("Failed to load issue {}", id))?;

    let already = status_choices(&current)
        .iter()
        .any(|choice| choice.status == status && choice.disabled);
    if already {
        println!(
            "{} is already {}",
            console::style(id).dim(),
            status_label(status)
        );
        return Ok(());
    }

    let mut board = IssueBoard {
        issues: vec![current],
        ..IssueBoard::default()
    };
    let updated = board
        .change_status(&client, id, status)
        .await
        .context("Failed to update status")?;
    println!(
        "{} {} → {}",
        console::style(&updated.id).dim(),
        console::style(&updated.title).bold(),
        status_label(updated.status)
    );
    Ok(())
}

pub async fn cmd_show(server: &str, id: &str) -> Result<()> {
    let client = IssueClient::new(server);
    let issue = client
        .get_issue(id)
        .await
        .with_context(|| format!("Failed to load issue {}", id))?;
    print_issue(&issue);
    println!(
        "  Updated:  {}",
        issue.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}

pub async fn cmd_stats(server: &str, json: bool) -> Result<()> {
    let client = IssueClient::new(server);
    let mut board = IssueBoard::new();
    board
        .refresh(&client)
        .await
        .with_context(|| format!("Failed to load issues from {}", client.base_url()))?;
    let stats = board.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{:<14} {}", "Total Issues", console::style(stats.total).bold());
    for status in IssueStatus::ALL {
        println!("{:<14} {}", status_label(status), stats.count(status));
    }
    Ok(())
}
