use super::{fail, print_json};
use crate::cli::{OutputFormat, StaffAction};
use crate::tickets::storage::TicketStore;
use colored::Colorize;

pub fn run(store: &dyn TicketStore, action: StaffAction, format: OutputFormat) -> Result<(), String> {
    match action {
        StaffAction::List => list(store, format),
        StaffAction::Add {
            name,
            email,
            puesto,
            area,
        } => {
            let member = store
                .add_staff(&name, &email, &puesto, &area)
                .map_err(fail)?;
            if format == OutputFormat::Json {
                return print_json(&member);
            }
            println!(
                "{} {} ({}) with id {}",
                "Added".green().bold(),
                member.name,
                member.email,
                member.id
            );
            Ok(())
        }
    }
}

fn list(store: &dyn TicketStore, format: OutputFormat) -> Result<(), String> {
    let staff = store.list_staff().map_err(fail)?;

    if format == OutputFormat::Json {
        return print_json(&staff);
    }

    if staff.is_empty() {
        println!("No staff members. Add one with 'triage staff add'.");
        return Ok(());
    }

    for member in &staff {
        println!(
            "  {:>3}  {}  {}  {}",
            member.id.to_string().bold(),
            member.name,
            member.email.dimmed(),
            member.puesto.dimmed()
        );
    }
    Ok(())
}
