//! In-memory ticket aggregate: id allocation, creation and staff updates.
//!
//! Stores persist a whole `TicketBook`; every state change goes through
//! the methods here so the audit trail stays consistent across backends.

use super::model::{
    Assignment, HistoryEntry, NewTicket, StaffMember, Ticket, TicketStatus, TicketUpdate,
    ValidationError,
};
use crate::classify;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Author of automatic history entries.
pub const SYSTEM_USER: &str = "Sistema IA";

/// Author of staff-side history entries.
pub const ADMIN_USER: &str = "Administrador";

const TICKET_ID_PREFIX: &str = "INC";

static TICKET_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^INC-\d{6,}$").expect("ticket id pattern is valid"));

/// Numeric part of a valid ticket id.
fn ticket_sequence(id: &str) -> Option<u64> {
    if !is_valid_ticket_id(id) {
        return None;
    }
    id.strip_prefix(TICKET_ID_PREFIX)?
        .strip_prefix('-')?
        .parse()
        .ok()
}

/// Check that `id` has the `INC-000123` shape (six digits or more).
pub fn is_valid_ticket_id(id: &str) -> bool {
    TICKET_ID_PATTERN.is_match(id)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Ticket not found: {0}")]
    NotFound(String),
    #[error("Invalid ticket id '{0}': expected INC-NNNNNN")]
    InvalidId(String),
    #[error("Unknown staff member: {0}")]
    UnknownStaff(u32),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketBook {
    /// Incremented on every save; used for conflict detection.
    #[serde(default)]
    pub version: u64,
    /// In creation order.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

impl TicketBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the version before saving.
    pub fn prepare_for_save(&mut self) {
        self.version += 1;
    }

    /// One past the highest sequence number in use, zero-padded to six digits.
    pub fn next_ticket_id(&self) -> String {
        let last = self
            .tickets
            .iter()
            .filter_map(|t| ticket_sequence(&t.id))
            .max()
            .unwrap_or(0);
        format!("{TICKET_ID_PREFIX}-{:06}", last + 1)
    }

    /// Tickets with the most recently created first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter().rev()
    }

    pub fn get(&self, id: &str) -> Result<&Ticket, BookError> {
        if !is_valid_ticket_id(id) {
            return Err(BookError::InvalidId(id.to_owned()));
        }
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_owned()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Ticket, BookError> {
        if !is_valid_ticket_id(id) {
            return Err(BookError::InvalidId(id.to_owned()));
        }
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_owned()))
    }

    /// Register a submission: classify it, attach the canned response and
    /// record the intake in the history.
    pub fn create(&mut self, new: NewTicket, now: DateTime<Utc>) -> Result<Ticket, BookError> {
        new.validate()?;

        let result = classify::triage(&new.description);
        let ticket_type = result.classification.ticket_type;
        let priority = result.classification.priority;
        let id = self.next_ticket_id();

        let history = vec![
            HistoryEntry {
                timestamp: now,
                action: "Ticket reportado vía Portal".to_owned(),
                user: new.requester.name.clone(),
            },
            HistoryEntry {
                timestamp: now,
                action: format!(
                    "IA Clasifica Automáticamente: {} - {}.",
                    ticket_type.as_str().to_uppercase(),
                    priority.as_str().to_uppercase()
                ),
                user: SYSTEM_USER.to_owned(),
            },
        ];

        let ticket = Ticket {
            id,
            title: new.title,
            description: new.description,
            ticket_type,
            priority,
            status: TicketStatus::Open,
            ai_response: result.response.to_owned(),
            created_at: now,
            updated_at: now,
            user: new.requester,
            assigned_to: None,
            history,
        };

        log::info!(
            "[tickets] Created {} as {}/{}",
            ticket.id,
            ticket_type,
            priority
        );
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Apply a staff-side change.
    ///
    /// Assignment is applied before an explicit status, so assigning an open
    /// ticket moves it to in-progress unless the same update sets a status.
    pub fn apply_update(
        &mut self,
        id: &str,
        update: TicketUpdate,
        now: DateTime<Utc>,
    ) -> Result<Ticket, BookError> {
        if update.is_empty() {
            return Err(ValidationError::EmptyUpdate.into());
        }

        let assignee = match update.assign {
            Some(Assignment::Staff(staff_id)) => Some(
                self.staff
                    .iter()
                    .find(|s| s.id == staff_id)
                    .map(StaffMember::to_assignee)
                    .ok_or(BookError::UnknownStaff(staff_id))?,
            ),
            Some(Assignment::Manual(assignee)) => {
                if assignee.name.trim().is_empty() {
                    return Err(ValidationError::EmptyField("name").into());
                }
                Some(assignee)
            }
            None => None,
        };

        let ticket = self.get_mut(id)?;

        if let Some(assignee) = assignee {
            ticket.history.push(HistoryEntry {
                timestamp: now,
                action: format!("Asignado a {}", assignee.name),
                user: ADMIN_USER.to_owned(),
            });
            ticket.assigned_to = Some(assignee);
            if ticket.status == TicketStatus::Open {
                ticket.status = TicketStatus::InProgress;
            }
        }

        if let Some(status) = update.status {
            ticket.status = status;
            ticket.history.push(HistoryEntry {
                timestamp: now,
                action: format!("Estado cambiado a {}", status.label()),
                user: ADMIN_USER.to_owned(),
            });
        }

        ticket.updated_at = now;
        log::info!("[tickets] Updated {} (status {})", ticket.id, ticket.status);
        Ok(ticket.clone())
    }

    pub fn resolve(&mut self, id: &str, now: DateTime<Utc>) -> Result<Ticket, BookError> {
        self.apply_update(id, TicketUpdate::status(TicketStatus::Resolved), now)
    }

    /// Add someone to the staff roster with the next free id.
    pub fn add_staff(
        &mut self,
        name: &str,
        email: &str,
        puesto: &str,
        area: &str,
    ) -> Result<StaffMember, BookError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if email.trim().is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }

        let id = self.staff.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let member = StaffMember {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            puesto: puesto.to_owned(),
            area: area.to_owned(),
        };
        self.staff.push(member.clone());
        Ok(member)
    }
}
