use super::{fail, print_json, print_ticket_line};
use crate::cli::OutputFormat;
use crate::tickets::model::{Ticket, TicketStatus, TicketUpdate};
use crate::tickets::storage::TicketStore;
use colored::Colorize;

pub fn run(
    store: &dyn TicketStore,
    id: &str,
    status: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let status: TicketStatus = status.parse().map_err(fail)?;
    let ticket = store
        .update_ticket(id, TicketUpdate::status(status))
        .map_err(fail)?;
    report(&ticket, format)
}

pub fn resolve(store: &dyn TicketStore, id: &str, format: OutputFormat) -> Result<(), String> {
    let ticket = store.resolve_ticket(id).map_err(fail)?;
    report(&ticket, format)
}

fn report(ticket: &Ticket, format: OutputFormat) -> Result<(), String> {
    if format == OutputFormat::Json {
        return print_json(ticket);
    }

    println!(
        "{} {} is now {}",
        "Updated".green().bold(),
        ticket.id.bold(),
        ticket.status.label()
    );
    print_ticket_line(ticket);
    Ok(())
}
