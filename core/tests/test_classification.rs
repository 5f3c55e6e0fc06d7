//! Behavioural checks for the classification engine and label registry,
//! exercised through the public API only.

use triage::classify::response::FALLBACK_RESPONSE;
use triage::classify::{classify, explain, generate_response, triage, Classification};
use triage::labels::{priority_label, status_label, type_label};
use triage::{Priority, TicketType};

fn classified(ticket_type: TicketType, priority: Priority) -> Classification {
    Classification {
        ticket_type,
        priority,
    }
}

#[test]
fn test_empty_description_uses_defaults() {
    assert_eq!(
        classify(""),
        classified(TicketType::Incident, Priority::Medium)
    );
    assert_eq!(
        classify("   \n\t "),
        classified(TicketType::Incident, Priority::Medium)
    );
}

#[test]
fn test_accented_incident_keyword() {
    assert_eq!(classify("el sistema está caído").ticket_type, TicketType::Incident);
    assert_eq!(classify("EL SISTEMA ESTÁ CAÍDO").ticket_type, TicketType::Incident);
}

#[test]
fn test_type_by_count_priority_by_first_match() {
    assert_eq!(
        classify("necesito acceso a la vpn urgente"),
        classified(TicketType::Request, Priority::Critical)
    );
}

#[test]
fn test_no_urgente_is_not_a_substring_of_no_es_urgente() {
    let text = "problema recurrente, ocurre todos los días, no es urgente";
    let trace = explain(text);
    assert_eq!(trace.result.ticket_type, TicketType::Problem);
    // "urgente" and "todos" are critical triggers on their own
    assert_ne!(trace.priority_keyword, Some("no urgente"));
    assert_eq!(trace.result.priority, Priority::Critical);
}

#[test]
fn test_tie_keeps_first_type_in_order() {
    assert_eq!(
        classify("error nuevo"),
        classified(TicketType::Incident, Priority::Medium)
    );
    // request vs problem tie: request comes first
    assert_eq!(classify("licencia siempre").ticket_type, TicketType::Request);
}

#[test]
fn test_keywords_count_once() {
    let trace = explain("error error error, solicito acceso y permiso");
    let incident = &trace.type_scores[0];
    let request = &trace.type_scores[1];
    assert_eq!(incident.score, 1);
    assert_eq!(request.score, 3);
    assert_eq!(trace.result.ticket_type, TicketType::Request);
}

#[test]
fn test_unanchored_matching_is_preserved() {
    // "nuevo" inside "renuevo" still counts
    assert_eq!(classify("renuevo").ticket_type, TicketType::Request);
}

#[test]
fn test_classification_is_total() {
    let long = "x".repeat(50_000);
    for text in [
        "",
        "🙂🙂🙂",
        "ñandú",
        "SELECT * FROM tickets; --",
        long.as_str(),
    ] {
        let result = classify(text);
        assert!(TicketType::ALL.contains(&result.ticket_type));
        assert!(Priority::ALL.contains(&result.priority));
        assert!(!generate_response(result.ticket_type, result.priority).is_empty());
    }
}

#[test]
fn test_critical_incident_response() {
    assert_eq!(
        generate_response(TicketType::Incident, Priority::Critical),
        "🔴 Incidente crítico detectado. Escalado automáticamente a nivel 3. Se ha notificado al equipo de infraestructura. ETA estimada de resolución: 2 horas."
    );
}

#[test]
fn test_every_pair_has_its_own_response() {
    for t in TicketType::ALL {
        for p in Priority::ALL {
            assert_ne!(generate_response(t, p), FALLBACK_RESPONSE, "{t}/{p}");
        }
    }
}

#[test]
fn test_unknown_codes_fall_back() {
    use triage::classify::response::response_for_codes;
    assert_eq!(response_for_codes("incident", "urgent"), FALLBACK_RESPONSE);
    assert_eq!(response_for_codes("task", "low"), FALLBACK_RESPONSE);
}

#[test]
fn test_triage_bundles_response() {
    let result = triage("la impresora falla otra vez");
    assert_eq!(result.classification, classify("la impresora falla otra vez"));
    assert_eq!(
        result.response,
        generate_response(
            result.classification.ticket_type,
            result.classification.priority
        )
    );
}

#[test]
fn test_labels_are_stable_and_pass_through() {
    for _ in 0..2 {
        assert_eq!(type_label("problem"), "Problema");
        assert_eq!(priority_label("critical"), "Crítica");
        assert_eq!(status_label("in-progress"), "En Proceso");
    }
    assert_eq!(type_label("task"), "task");
    assert_eq!(priority_label(""), "");
    assert_eq!(status_label("archived"), "archived");
}
