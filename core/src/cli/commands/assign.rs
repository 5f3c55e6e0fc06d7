use super::{fail, print_json, print_ticket_line};
use crate::cli::OutputFormat;
use crate::tickets::model::{Assignee, Assignment, TicketUpdate};
use crate::tickets::storage::TicketStore;
use colored::Colorize;

pub fn run(
    store: &dyn TicketStore,
    id: &str,
    staff: Option<u32>,
    name: Option<String>,
    email: Option<String>,
    puesto: Option<String>,
    format: OutputFormat,
) -> Result<(), String> {
    let assignment = match (staff, name, email) {
        (Some(staff_id), _, _) => Assignment::Staff(staff_id),
        (None, Some(name), Some(email)) => Assignment::Manual(Assignee {
            name,
            email,
            puesto: puesto.unwrap_or_default(),
        }),
        _ => {
            return Err("Specify --staff <id> or both --name and --email.".to_owned());
        }
    };

    let ticket = store
        .update_ticket(id, TicketUpdate::assign(assignment))
        .map_err(fail)?;

    if format == OutputFormat::Json {
        return print_json(&ticket);
    }

    let assignee = ticket
        .assigned_to
        .as_ref()
        .map_or("", |a| a.name.as_str());
    println!(
        "{} {} to {}",
        "Assigned".green().bold(),
        ticket.id.bold(),
        assignee
    );
    print_ticket_line(&ticket);
    Ok(())
}
