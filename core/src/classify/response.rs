//! Canned responses shown to the requester after classification.

use super::{Priority, TicketType};

/// Returned when a (type, priority) pair has no registered template.
pub const FALLBACK_RESPONSE: &str = "🟡 Ticket registrado. En proceso de análisis.";

const RESPONSE_TEMPLATES: &[(TicketType, Priority, &str)] = &[
    (
        TicketType::Incident,
        Priority::Critical,
        "🔴 Incidente crítico detectado. Escalado automáticamente a nivel 3. Se ha notificado al equipo de infraestructura. ETA estimada de resolución: 2 horas.",
    ),
    (
        TicketType::Incident,
        Priority::High,
        "🟠 Incidente de alta prioridad registrado. Asignado a equipo especializado para atención inmediata. ETA: 4 horas.",
    ),
    (
        TicketType::Incident,
        Priority::Medium,
        "🟡 Incidente registrado correctamente. Se asignará al personal disponible según turno actual. ETA: 8 horas laborables.",
    ),
    (
        TicketType::Incident,
        Priority::Low,
        "🟢 Incidente de baja prioridad catalogado. Se atenderá en el próximo ciclo de soporte disponible.",
    ),
    (
        TicketType::Request,
        Priority::Critical,
        "🔴 Solicitud urgente recibida. Se ha iniciado proceso de aprobación expedita con escalamiento automático.",
    ),
    (
        TicketType::Request,
        Priority::High,
        "🟠 Solicitud de alta prioridad en proceso. Pendiente de aprobación del supervisor directo. ETA: 24 horas.",
    ),
    (
        TicketType::Request,
        Priority::Medium,
        "🟡 Solicitud registrada correctamente. En proceso de evaluación y aprobación. ETA: 2-3 días laborables.",
    ),
    (
        TicketType::Request,
        Priority::Low,
        "🟢 Requerimiento registrado. Se procesará en cola estándar de solicitudes. ETA: 5 días laborables.",
    ),
    (
        TicketType::Problem,
        Priority::Critical,
        "🔴 Problema recurrente crítico identificado. Se ha iniciado análisis de causa raíz (RCA) con prioridad máxima.",
    ),
    (
        TicketType::Problem,
        Priority::High,
        "🟠 Patrón de problema detectado. Análisis preventivo iniciado por equipo senior. Monitoreo activo habilitado.",
    ),
    (
        TicketType::Problem,
        Priority::Medium,
        "🟡 Problema catalogado para monitoreo activo. Se realizará análisis de tendencia en próximo ciclo de revisión.",
    ),
    (
        TicketType::Problem,
        Priority::Low,
        "🟢 Problema registrado para análisis de tendencias. Se incluirá en el próximo reporte mensual de problemas.",
    ),
];

/// Look up a template in `templates`, falling back to [`FALLBACK_RESPONSE`].
fn lookup(
    templates: &[(TicketType, Priority, &'static str)],
    ticket_type: TicketType,
    priority: Priority,
) -> &'static str {
    templates
        .iter()
        .find(|(t, p, _)| *t == ticket_type && *p == priority)
        .map_or(FALLBACK_RESPONSE, |(_, _, text)| *text)
}

/// Canned response for a classified ticket.
pub fn generate_response(ticket_type: TicketType, priority: Priority) -> &'static str {
    lookup(RESPONSE_TEMPLATES, ticket_type, priority)
}

/// Canned response for raw type and priority codes.
///
/// Codes outside the known sets get [`FALLBACK_RESPONSE`] instead of an error,
/// so records written by older or newer clients still render.
pub fn response_for_codes(type_code: &str, priority_code: &str) -> &'static str {
    match (
        type_code.parse::<TicketType>(),
        priority_code.parse::<Priority>(),
    ) {
        (Ok(ticket_type), Ok(priority)) => generate_response(ticket_type, priority),
        _ => FALLBACK_RESPONSE,
    }
}
