use super::{fail, print_json, print_ticket_detail};
use crate::cli::OutputFormat;
use crate::tickets::model::{NewTicket, Requester};
use crate::tickets::storage::TicketStore;
use colored::Colorize;

/// Requester and ticket fields from the command line.
pub struct CreateArgs {
    pub title: String,
    pub description: String,
    pub name: String,
    pub email: String,
    pub area: String,
    pub puesto: String,
}

pub fn run(store: &dyn TicketStore, args: CreateArgs, format: OutputFormat) -> Result<(), String> {
    let form = NewTicket {
        requester: Requester {
            name: args.name,
            email: args.email,
            area: args.area,
            puesto: args.puesto,
        },
        title: args.title,
        description: args.description,
    };

    let ticket = store.create_ticket(form).map_err(fail)?;

    if format == OutputFormat::Json {
        return print_json(&ticket);
    }

    println!("{} {}", "Created".green().bold(), ticket.id.bold());
    println!();
    print_ticket_detail(&ticket);
    Ok(())
}
