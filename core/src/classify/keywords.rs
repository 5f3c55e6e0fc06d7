//! Keyword tables for type and urgency classification.
//!
//! Every trigger is lowercase and matched as a plain substring of the
//! lowercased description, so multi-word triggers and accented triggers
//! work without tokenizing. The lists are reproduced exactly as stored
//! tickets were classified with them; editing a trigger changes outcomes.

use super::{Priority, TicketType};

// --- Type triggers ---

const INCIDENT_KEYWORDS: &[&str] = &[
    "error",
    "caído",
    "caida",
    "no funciona",
    "problema",
    "falla",
    "crash",
    "down",
    "bloqueado",
    "roto",
    "inaccesible",
    "lento",
    "colgado",
    "no responde",
    "pantalla azul",
    "virus",
    "malware",
    "hackeado",
    "no carga",
    "interrumpido",
    "desconectado",
    "no disponible",
];

const REQUEST_KEYWORDS: &[&str] = &[
    "necesito",
    "solicito",
    "requiero",
    "acceso",
    "permiso",
    "nuevo",
    "instalación",
    "instalar",
    "crear",
    "configurar",
    "actualizar",
    "cambiar contraseña",
    "alta de usuario",
    "licencia",
    "software",
    "equipo nuevo",
    "cuenta",
    "habilitar",
    "desbloquear",
];

const PROBLEM_KEYWORDS: &[&str] = &[
    "recurrente",
    "repetido",
    "siempre",
    "constante",
    "patrón",
    "múltiples veces",
    "otra vez",
    "frecuente",
    "intermitente",
    "periódicamente",
    "cada vez",
    "todos los días",
    "semanal",
    "persistente",
    "crónico",
];

// --- Urgency triggers ---

const CRITICAL_KEYWORDS: &[&str] = &[
    "producción",
    "crítico",
    "urgente",
    "inmediato",
    "todos",
    "sistema completo",
    "empresa",
    "masivo",
    "generalizado",
    "pérdida de datos",
    "seguridad",
    "brecha",
    "total",
];

const HIGH_KEYWORDS: &[&str] = &[
    "importante",
    "prioridad",
    "múltiples usuarios",
    "departamento",
    "equipo",
    "afecta a varios",
    "proyecto",
    "deadline",
    "fecha límite",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "normal",
    "cuando sea posible",
    "algunos usuarios",
    "grupo",
    "moderado",
    "parcial",
];

const LOW_KEYWORDS: &[&str] = &[
    "bajo",
    "menor",
    "cosmético",
    "sugerencia",
    "mejora",
    "opcional",
    "no urgente",
    "cuando puedas",
    "sin prisa",
];

/// Urgency tiers in scan order. The first tier with any matching trigger
/// decides the priority, so the most severe tier must come first.
pub const URGENCY_TIERS: [(Priority, &[&str]); 4] = [
    (Priority::Critical, CRITICAL_KEYWORDS),
    (Priority::High, HIGH_KEYWORDS),
    (Priority::Medium, MEDIUM_KEYWORDS),
    (Priority::Low, LOW_KEYWORDS),
];

/// Triggers counted as evidence for a ticket type.
pub fn type_keywords(ticket_type: TicketType) -> &'static [&'static str] {
    match ticket_type {
        TicketType::Incident => INCIDENT_KEYWORDS,
        TicketType::Request => REQUEST_KEYWORDS,
        TicketType::Problem => PROBLEM_KEYWORDS,
    }
}

/// Triggers that select an urgency tier.
pub fn urgency_keywords(priority: Priority) -> &'static [&'static str] {
    match priority {
        Priority::Critical => CRITICAL_KEYWORDS,
        Priority::High => HIGH_KEYWORDS,
        Priority::Medium => MEDIUM_KEYWORDS,
        Priority::Low => LOW_KEYWORDS,
    }
}
