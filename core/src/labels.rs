//! Spanish display labels for ticket codes.
//!
//! Stored tickets and downstream reports compare against these exact
//! strings, accents included. Unknown codes are returned unchanged.

use crate::classify::{Priority, TicketType};
use crate::tickets::model::TicketStatus;
use serde::Serialize;

const TYPE_LABELS: &[(&str, &str)] = &[
    ("incident", "Incidente"),
    ("request", "Solicitud"),
    ("problem", "Problema"),
];

const PRIORITY_LABELS: &[(&str, &str)] = &[
    ("critical", "Crítica"),
    ("high", "Alta"),
    ("medium", "Media"),
    ("low", "Baja"),
];

const STATUS_LABELS: &[(&str, &str)] = &[
    ("open", "Abierto"),
    ("in-progress", "En Proceso"),
    ("resolved", "Resuelto"),
    ("closed", "Cerrado"),
];

fn lookup<'a>(table: &[(&str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, label)| *label)
}

pub fn type_label(code: &str) -> &str {
    lookup(TYPE_LABELS, code)
}

pub fn priority_label(code: &str) -> &str {
    lookup(PRIORITY_LABELS, code)
}

pub fn status_label(code: &str) -> &str {
    lookup(STATUS_LABELS, code)
}

/// Priority caption used on the statistics chart, where the critical slice
/// reads "Crítico" rather than the badge label "Crítica".
pub fn chart_priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "Crítico",
        other => other.label(),
    }
}

/// Plural type label used for chart legends.
pub fn plural_type_label(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Incident => "Incidentes",
        TicketType::Request => "Solicitudes",
        TicketType::Problem => "Problemas",
    }
}

/// One code with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelEntry {
    pub code: &'static str,
    pub label: &'static str,
}

/// All label tables in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub types: Vec<LabelEntry>,
    pub priorities: Vec<LabelEntry>,
    pub statuses: Vec<LabelEntry>,
}

impl LabelSet {
    pub fn snapshot() -> Self {
        Self {
            types: TicketType::ALL
                .iter()
                .map(|t| LabelEntry {
                    code: t.as_str(),
                    label: t.label(),
                })
                .collect(),
            priorities: Priority::ALL
                .iter()
                .map(|p| LabelEntry {
                    code: p.as_str(),
                    label: p.label(),
                })
                .collect(),
            statuses: TicketStatus::ALL
                .iter()
                .map(|s| LabelEntry {
                    code: s.as_str(),
                    label: s.label(),
                })
                .collect(),
        }
    }
}
