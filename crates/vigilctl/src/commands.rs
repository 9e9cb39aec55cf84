//! Command handlers for vigilctl.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use vigil_common::config::{ChatConfig, ReportApiConfig};
use vigil_common::ticket::{NewTicket, Ticket, TicketStatus, KNOWN_ISSUE_TYPES};

use crate::chat_api::ChatClient;
use crate::client::ReportClient;
use crate::session::ChatSession;

/// Handle status command
pub async fn status() -> Result<()> {
    let client = ReportClient::new(ReportApiConfig::from_env())?;
    let health = client.health().await?;

    println!();
    println!("{}", format!("vigilctl v{}", env!("CARGO_PKG_VERSION")).bold());
    print_kv("daemon", &health.status);
    print_kv("version", &health.version);
    print_kv("uptime", &format!("{}s", health.uptime_seconds));
    print_kv("tickets", &health.tickets_stored.to_string());
    Ok(())
}

/// Handle report command
pub async fn report(
    issue_type: String,
    title: String,
    description: String,
    location: Option<String>,
) -> Result<()> {
    if !KNOWN_ISSUE_TYPES.contains(&issue_type.as_str()) {
        println!(
            "{}",
            format!("note: unrecognized issue type '{}', accepted as free text", issue_type)
                .dimmed()
        );
    }

    let client = ReportClient::new(ReportApiConfig::from_env())?;
    let created = client
        .submit(&NewTicket {
            issue_type,
            title,
            description,
            location,
        })
        .await?;

    println!("{} {}", "ok".green().bold(), created.message);
    print_ticket(&created.report);
    Ok(())
}

/// Handle reports command
pub async fn reports(
    page: usize,
    limit: usize,
    status: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let client = ReportClient::new(ReportApiConfig::from_env())?;
    let listing = client.list(page, limit).await?;

    // Status/search filtering is applied over the fetched page only,
    // matching the web client this replaces.
    let shown: Vec<&Ticket> = listing
        .data
        .iter()
        .filter(|t| {
            status
                .as_deref()
                .map_or(true, |s| status_matches(t.status, s))
        })
        .filter(|t| search.as_deref().map_or(true, |q| t.matches_search(q)))
        .collect();

    if shown.is_empty() {
        println!("{}", "no reports".dimmed());
    }
    for ticket in &shown {
        print_ticket(ticket);
    }

    println!(
        "{}",
        format!(
            "page {} of {} ({} total)",
            listing.pagination.current_page,
            listing.pagination.total_pages,
            listing.pagination.total_results
        )
        .dimmed()
    );
    if shown.len() < listing.data.len() {
        println!(
            "{}",
            format!(
                "filter applied to this page only: {} of {} shown",
                shown.len(),
                listing.data.len()
            )
            .dimmed()
        );
    }
    Ok(())
}

/// Handle chat command - interactive session with the assistant
pub async fn chat() -> Result<()> {
    let config = ChatConfig::from_env();
    let client = ChatClient::new(config.clone())?;
    let mut session = ChatSession::new(config.agent);

    println!(
        "{}",
        "Vigil assistant - describe what you observed. Ctrl-D to exit.".dimmed()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "you>".bold());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let Some(payload) = session.submit(&line) else {
            continue;
        };

        match client.send(&payload).await {
            Ok(envelope) => {
                let turn = session.complete(&envelope);
                println!("{} {}", "bot>".cyan().bold(), turn.text);
                if turn.suspicious {
                    println!(
                        "{}",
                        "This sounds suspicious - consider filing a report with `vigilctl report`."
                            .yellow()
                    );
                }
            }
            Err(e) => {
                let turn = session.fail();
                eprintln!("{} {}", "error:".red().bold(), e);
                println!("{} {}", "bot>".cyan().bold(), turn.text);
            }
        }
    }

    println!();
    Ok(())
}

fn status_matches(status: TicketStatus, wanted: &str) -> bool {
    normalize(&status.to_string()) == normalize(wanted)
}

fn normalize(s: &str) -> String {
    s.to_ascii_lowercase().replace([' ', '-', '_'], "")
}

fn print_ticket(ticket: &Ticket) {
    println!();
    println!(
        "{}  {}  {}",
        ticket.ticket_id.bold(),
        ticket.issue_type,
        status_label(ticket.status)
    );
    print_kv("title", &ticket.title);
    print_kv("description", &ticket.description);
    if let Some(location) = &ticket.location {
        print_kv("location", location);
    }
    print_kv("created", &ticket.created_at);
}

fn status_label(status: TicketStatus) -> String {
    match status {
        TicketStatus::PendingReview => status.to_string().yellow().to_string(),
        TicketStatus::InProgress => status.to_string().cyan().to_string(),
        TicketStatus::Resolved => status.to_string().green().to_string(),
    }
}

fn print_kv(key: &str, value: &str) {
    // Pad before coloring; escape codes would count against the width
    println!("  {} {}", format!("{:12}", key).dimmed(), value);
}
