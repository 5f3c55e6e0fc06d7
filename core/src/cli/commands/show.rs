use super::{fail, print_json, print_ticket_detail};
use crate::cli::OutputFormat;
use crate::tickets::storage::TicketStore;

pub fn run(store: &dyn TicketStore, id: &str, format: OutputFormat) -> Result<(), String> {
    let ticket = store.get_ticket(id).map_err(fail)?;

    if format == OutputFormat::Json {
        return print_json(&ticket);
    }

    print_ticket_detail(&ticket);
    Ok(())
}
