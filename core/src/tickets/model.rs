use crate::classify::{Classification, ParseCodeError, Priority, TicketType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Spanish display label.
    pub fn label(self) -> &'static str {
        crate::labels::status_label(self.as_str())
    }

    /// Still needs staff attention (neither resolved nor closed).
    pub fn is_active(self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseCodeError::new("status", s))
    }
}

/// The person who reported the ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub puesto: String,
}

/// Staff member a ticket is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub puesto: String,
}

/// A support team member that tickets can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub puesto: String,
    #[serde(default)]
    pub area: String,
}

impl StaffMember {
    pub fn to_assignee(&self) -> Assignee {
        Assignee {
            name: self.name.clone(),
            email: self.email.clone(),
            puesto: self.puesto.clone(),
        }
    }
}

/// One line of a ticket's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub priority: Priority,
    pub status: TicketStatus,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Requester,
    #[serde(default)]
    pub assigned_to: Option<Assignee>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Ticket {
    pub fn classification(&self) -> Classification {
        Classification {
            ticket_type: self.ticket_type,
            priority: self.priority,
        }
    }
}

/// Submission form for a new ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    #[serde(alias = "user")]
    pub requester: Requester,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("Update has no changes")]
    EmptyUpdate,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("name", &self.requester.name),
            ("email", &self.requester.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

/// Who a ticket should be assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// A member of the staff roster, by id.
    Staff(u32),
    /// Someone entered by hand.
    Manual(Assignee),
}

/// Staff-side change to an existing ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub status: Option<TicketStatus>,
    pub assign: Option<Assignment>,
}

impl TicketUpdate {
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            assign: None,
        }
    }

    pub fn assign(assignment: Assignment) -> Self {
        Self {
            status: None,
            assign: Some(assignment),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assign.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester() -> Requester {
        Requester {
            name: "Ana Torres".to_owned(),
            email: "ana@example.com".to_owned(),
            area: "Finanzas".to_owned(),
            puesto: "Analista Senior".to_owned(),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!("in-progress".parse::<TicketStatus>(), Ok(TicketStatus::InProgress));
        assert!("in_progress".parse::<TicketStatus>().is_err());
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_active_statuses() {
        assert!(TicketStatus::Open.is_active());
        assert!(TicketStatus::InProgress.is_active());
        assert!(!TicketStatus::Resolved.is_active());
        assert!(!TicketStatus::Closed.is_active());
    }

    #[test]
    fn test_new_ticket_validation() {
        let mut form = NewTicket {
            requester: requester(),
            title: "VPN".to_owned(),
            description: "necesito acceso".to_owned(),
        };
        assert!(form.validate().is_ok());

        form.description = "   ".to_owned();
        assert_eq!(
            form.validate(),
            Err(ValidationError::EmptyField("description"))
        );

        form.description = "ok".to_owned();
        form.requester.email = String::new();
        assert_eq!(form.validate(), Err(ValidationError::EmptyField("email")));
    }

    #[test]
    fn test_new_ticket_accepts_user_alias() {
        let json = r#"{
            "user": {"name": "Ana", "email": "ana@example.com"},
            "title": "Impresora",
            "description": "no funciona"
        }"#;
        let form: NewTicket = serde_json::from_str(json).unwrap();
        assert_eq!(form.requester.name, "Ana");
        assert!(form.requester.area.is_empty());
    }

    #[test]
    fn test_update_constructors() {
        assert!(TicketUpdate::default().is_empty());
        assert!(!TicketUpdate::status(TicketStatus::Closed).is_empty());
        assert!(!TicketUpdate::assign(Assignment::Staff(1)).is_empty());
    }
}
