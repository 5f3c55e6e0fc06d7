use super::{fail, print_json, print_ticket_line};
use crate::cli::OutputFormat;
use crate::tickets::filters::TicketFilter;
use crate::tickets::storage::TicketStore;
use colored::Colorize;

/// Parse an optional code flag; blank means "any".
fn parse_code<T>(raw: Option<String>) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: Into<crate::error::AppError>,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(fail),
    }
}

pub fn run(
    store: &dyn TicketStore,
    priority: Option<String>,
    ticket_type: Option<String>,
    status: Option<String>,
    search: Option<String>,
    format: OutputFormat,
) -> Result<(), String> {
    let filter = TicketFilter {
        priority: parse_code(priority)?,
        ticket_type: parse_code(ticket_type)?,
        status: parse_code(status)?,
        search,
    };

    let tickets = store.list_tickets().map_err(fail)?;
    let found = filter.apply(&tickets);

    if format == OutputFormat::Json {
        return print_json(&found);
    }

    if found.is_empty() {
        if tickets.is_empty() {
            println!("No tickets yet. Create one with 'triage create'.");
        } else {
            println!("No tickets match the given filters.");
        }
        return Ok(());
    }

    for ticket in &found {
        print_ticket_line(ticket);
    }
    println!();
    println!(
        "{}",
        format!("{} of {} tickets", found.len(), tickets.len()).dimmed()
    );
    Ok(())
}
