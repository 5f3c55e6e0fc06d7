pub mod assign;
pub mod classify;
pub mod create;
pub mod labels;
pub mod list;
pub mod show;
pub mod staff;
pub mod stats;
pub mod status;

use crate::classify::Priority;
use crate::error::AppError;
use crate::format::{format_date, time_ago};
use crate::tickets::model::{Ticket, TicketStatus};
use chrono::Utc;
use colored::{ColoredString, Colorize};

/// Serialize a value as pretty-printed JSON and print it to stdout.
fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Convert a library error into the CLI's error string.
fn fail(err: impl Into<AppError>) -> String {
    err.into().to_string()
}

fn priority_badge(priority: Priority) -> ColoredString {
    let text = format!(" {} ", priority.label().to_uppercase());
    match priority {
        Priority::Critical => text.white().on_red().bold(),
        Priority::High => text.black().on_yellow(),
        Priority::Medium => text.black().on_blue(),
        Priority::Low => text.black().on_green(),
    }
}

fn status_badge(status: TicketStatus) -> ColoredString {
    let label = status.label();
    match status {
        TicketStatus::Open => label.cyan(),
        TicketStatus::InProgress => label.yellow(),
        TicketStatus::Resolved => label.green(),
        TicketStatus::Closed => label.dimmed(),
    }
}

/// One-line summary used by `list`, `create` and friends.
fn print_ticket_line(ticket: &Ticket) {
    println!(
        "{} {} {} {} {}",
        ticket.id.bold(),
        priority_badge(ticket.priority),
        ticket.ticket_type.label().magenta(),
        status_badge(ticket.status),
        ticket.title
    );
    let assigned = ticket
        .assigned_to
        .as_ref()
        .map_or_else(|| "Sin asignar".to_owned(), |a| a.name.clone());
    println!(
        "    {} {}  {} {}  {}",
        "De:".dimmed(),
        ticket.user.name,
        "Asignado:".dimmed(),
        assigned,
        time_ago(ticket.created_at, Utc::now()).dimmed()
    );
}

/// Full ticket view with response and history.
fn print_ticket_detail(ticket: &Ticket) {
    print_ticket_line(ticket);
    println!();
    println!("  {}", ticket.description);
    println!();
    println!("  {} {}", "Respuesta:".dimmed(), ticket.ai_response);
    println!(
        "  {} {}",
        "Creado:".dimmed(),
        format_date(Some(ticket.created_at))
    );
    println!(
        "  {} {}",
        "Actualizado:".dimmed(),
        format_date(Some(ticket.updated_at))
    );
    if !ticket.history.is_empty() {
        println!();
        println!("{}", "Historial".bold());
        for entry in &ticket.history {
            println!(
                "  {} {} {}",
                format_date(Some(entry.timestamp)).dimmed(),
                entry.action,
                format!("({})", entry.user).dimmed()
            );
        }
    }
}
