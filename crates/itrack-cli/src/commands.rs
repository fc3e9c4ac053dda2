//! CLI command implementations

use anyhow::Result;
use colored::Colorize;
use itrack_core::{Draft, NewIssue, Status};

use crate::client::ApiClient;

pub async fn list(client: &ApiClient, json: bool) -> Result<()> {
    let issues = client.list().await?;

    if json {
        println!("{}", serde_json::to_string(&issues)?);
    } else if issues.is_empty() {
        println!("No issues found");
    } else {
        for issue in issues {
            let status = match issue.status {
                Status::Open => "Open".white(),
                Status::InProgress => "In Progress".yellow(),
                Status::Closed => "Closed".green(),
            };
            println!("{} [{}] {}", issue.id.cyan(), status, issue.title);
        }
    }

    Ok(())
}

pub async fn show(client: &ApiClient, id: &str, json: bool) -> Result<()> {
    let issue = client.get(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!("{} {}", issue.id.cyan().bold(), issue.title.bold());
        println!();
        println!("Status: {}", issue.status);

        if !issue.description.is_empty() {
            println!();
            println!("{}", "Description:".bold());
            println!("{}", issue.description);
        }
    }

    Ok(())
}

pub async fn create(
    client: &ApiClient,
    title: &str,
    description: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    let new = NewIssue {
        title: title.to_string(),
        description: description.unwrap_or_default(),
        status: status
            .as_deref()
            .map(|s| s.parse::<Status>())
            .transpose()?
            .unwrap_or_default(),
    };

    let issue = client.create(&new).await?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
    } else {
        println!("{} Created issue: {}", "✓".green(), issue.id);
        println!("  Title: {}", issue.title);
    }

    Ok(())
}

pub async fn edit(
    client: &ApiClient,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    // Edits land on a local draft; the server sees one update on save.
    let mut draft = Draft::of(client.get(id).await?);

    if let Some(t) = title {
        draft.title = t;
    }
    if let Some(d) = description {
        draft.description = d;
    }
    if let Some(s) = status {
        draft.status = s.parse()?;
    }

    if !draft.is_dirty() {
        println!("No changes for {}", id);
        return Ok(());
    }

    let issue = client.update(id, &draft.into_update()).await?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
    } else {
        println!("{} Updated {}", "✓".green(), id);
    }

    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<()> {
    let message = client.delete(id).await?;
    println!("{} {}", "✓".green(), message);
    Ok(())
}
