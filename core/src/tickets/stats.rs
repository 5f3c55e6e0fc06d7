//! Dashboard counters and chart distributions.

use super::model::{Ticket, TicketStatus};
use crate::classify::{Priority, TicketType};
use crate::labels;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Critical tickets still awaiting resolution.
    pub critical_active: usize,
}

impl DashboardStats {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        tickets
            .into_iter()
            .fold(DashboardStats::default(), |mut stats, ticket| {
                stats.total += 1;
                match ticket.status {
                    TicketStatus::Open => stats.open += 1,
                    TicketStatus::InProgress => stats.in_progress += 1,
                    TicketStatus::Resolved => stats.resolved += 1,
                    TicketStatus::Closed => {}
                }
                if ticket.priority == Priority::Critical && ticket.status.is_active() {
                    stats.critical_active += 1;
                }
                stats
            })
    }
}

/// One chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub code: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Non-empty buckets by priority then by type, in enum order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub by_priority: Vec<Bucket>,
    pub by_type: Vec<Bucket>,
}

impl Distribution {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let by_priority = Priority::ALL
            .iter()
            .map(|p| Bucket {
                code: p.as_str(),
                label: labels::chart_priority_label(*p),
                count: tickets.iter().filter(|t| t.priority == *p).count(),
            })
            .filter(|b| b.count > 0)
            .collect();

        let by_type = TicketType::ALL
            .iter()
            .map(|t| Bucket {
                code: t.as_str(),
                label: labels::plural_type_label(*t),
                count: tickets.iter().filter(|ticket| ticket.ticket_type == *t).count(),
            })
            .filter(|b| b.count > 0)
            .collect();

        Self {
            by_priority,
            by_type,
        }
    }
}

/// Everything the statistics page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub distribution: Distribution,
}

impl StatsReport {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        Self {
            stats: DashboardStats::from_tickets(tickets),
            distribution: Distribution::from_tickets(tickets),
        }
    }
}
