//! Dashboard ticket filters.

use super::model::{Ticket, TicketStatus};
use crate::classify::{Priority, TicketType};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Filter criteria from the staff dashboard. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<Priority>,
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub ticket_type: Option<TicketType>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TicketStatus>,
    /// Case-insensitive text matched against id, title, description and requester name.
    pub search: Option<String>,
}

impl TicketFilter {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.ticket_type.is_none()
            && self.status.is_none()
            && self.search_query().is_none()
    }

    /// Lowercased search text, or `None` when blank.
    fn search_query(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_fields(ticket)
            && self
                .search_query()
                .map_or(true, |q| matches_search(ticket, &q))
    }

    fn matches_fields(&self, ticket: &Ticket) -> bool {
        self.priority.map_or(true, |p| ticket.priority == p)
            && self.ticket_type.map_or(true, |t| ticket.ticket_type == t)
            && self.status.map_or(true, |s| ticket.status == s)
    }

    /// Tickets that pass the filter, in input order.
    pub fn apply<'a>(&self, tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<&'a Ticket> {
        let query = self.search_query();
        tickets
            .into_iter()
            .filter(|t| {
                self.matches_fields(t) && query.as_deref().map_or(true, |q| matches_search(t, q))
            })
            .collect()
    }
}

/// The dashboard sends `""` for "any"; treat it like an absent field.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => code.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn matches_search(ticket: &Ticket, query: &str) -> bool {
    ticket.id.to_lowercase().contains(query)
        || ticket.title.to_lowercase().contains(query)
        || ticket.description.to_lowercase().contains(query)
        || ticket.user.name.to_lowercase().contains(query)
}
