//! FileStore behaviour against a real directory.

use std::fs;
use tempfile::TempDir;
use triage::tickets::model::{Assignee, Assignment, NewTicket, Requester, TicketUpdate};
use triage::tickets::storage::{FileStore, StorageError, TicketStore};
use triage::tickets::BookError;
use triage::{Priority, TicketStatus, TicketType};

fn form(title: &str, description: &str) -> NewTicket {
    NewTicket {
        requester: Requester {
            name: "Marta Ruiz".to_owned(),
            email: "marta@example.com".to_owned(),
            area: "Ventas".to_owned(),
            puesto: "Coordinadora".to_owned(),
        },
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

fn store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_ticket_lifecycle() {
    let (_dir, store) = store();

    let ticket = store
        .create_ticket(form("VPN", "necesito acceso a la vpn urgente"))
        .unwrap();
    assert_eq!(ticket.id, "INC-000001");
    assert_eq!(ticket.ticket_type, TicketType::Request);
    assert_eq!(ticket.priority, Priority::Critical);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(ticket.ai_response.starts_with("🔴"));

    let member = store
        .add_staff("Luis Pérez", "luis@example.com", "Soporte N2", "TI")
        .unwrap();
    let assigned = store
        .update_ticket(&ticket.id, TicketUpdate::assign(Assignment::Staff(member.id)))
        .unwrap();
    assert_eq!(assigned.status, TicketStatus::InProgress);
    assert_eq!(assigned.assigned_to.unwrap().name, "Luis Pérez");

    let resolved = store.resolve_ticket(&ticket.id).unwrap();
    assert_eq!(resolved.status, TicketStatus::Resolved);
    let actions: Vec<&str> = resolved.history.iter().map(|h| h.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Ticket reportado vía Portal",
            "IA Clasifica Automáticamente: REQUEST - CRITICAL.",
            "Asignado a Luis Pérez",
            "Estado cambiado a Resuelto",
        ]
    );
}

#[test]
fn test_data_survives_reopen() {
    let (dir, store) = store();
    store.create_ticket(form("A", "error")).unwrap();
    store
        .add_staff("Ana", "ana@example.com", "", "")
        .unwrap();

    let reopened = FileStore::new(dir.path());
    assert_eq!(reopened.list_tickets().unwrap().len(), 1);
    assert_eq!(reopened.list_staff().unwrap()[0].id, 1);
}

#[test]
fn test_ticket_json_uses_camel_case() {
    let (_dir, store) = store();
    store
        .create_ticket(form("Impresora", "la impresora no funciona"))
        .unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let ticket = &json["tickets"][0];
    assert_eq!(ticket["type"], "incident");
    assert!(ticket["aiResponse"].is_string());
    assert!(ticket["createdAt"].is_string());
    assert_eq!(json["version"], 1);
}

#[test]
fn test_concurrent_writer_conflict() {
    let (dir, store) = store();
    store.create_ticket(form("A", "error")).unwrap();

    // Another process loads, then this process saves first
    let other = FileStore::new(dir.path());
    let mut stale = other.load().unwrap();
    store.create_ticket(form("B", "lento")).unwrap();

    stale.prepare_for_save();
    match other.save(&stale) {
        Err(StorageError::VersionConflict { expected, found }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        other => panic!("Expected version conflict, got {other:?}"),
    }
    assert_eq!(store.list_tickets().unwrap().len(), 2);
}

#[test]
fn test_errors_leave_file_untouched() {
    let (_dir, store) = store();
    store.create_ticket(form("A", "error")).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let err = store.get_ticket("INC-000009").unwrap_err();
    assert!(matches!(err, StorageError::Book(BookError::NotFound(_))));

    let err = store
        .update_ticket("INC-000001", TicketUpdate::assign(Assignment::Staff(42)))
        .unwrap_err();
    assert!(matches!(err, StorageError::Book(BookError::UnknownStaff(42))));

    let err = store
        .update_ticket(
            "INC-000001",
            TicketUpdate::assign(Assignment::Manual(Assignee {
                name: " ".to_owned(),
                email: "x@example.com".to_owned(),
                puesto: String::new(),
            })),
        )
        .unwrap_err();
    assert!(matches!(err, StorageError::Book(BookError::Validation(_))));

    let err = store.create_ticket(form("", "error")).unwrap_err();
    assert!(matches!(err, StorageError::Book(BookError::Validation(_))));

    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_corrupt_file_is_reported() {
    let (_dir, store) = store();
    fs::write(store.path(), "{not json").unwrap();
    assert!(matches!(store.load(), Err(StorageError::Json(_))));
}
