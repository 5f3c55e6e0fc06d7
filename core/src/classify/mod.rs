//! Keyword-based ticket classifier.
//!
//! Maps a free-text description to a ticket type and a priority by
//! substring matching against fixed keyword tables, then picks a canned
//! response for the pair. No I/O and no state: every input, including the
//! empty string, produces a classification.
//!
//! Type and priority are resolved differently:
//! - type is count-based: each type scores one point per trigger found, the
//!   highest score wins, ties keep the earlier type in `incident, request,
//!   problem` order, and a zero score falls back to `incident`;
//! - priority is first-match: tiers are scanned from `critical` down to
//!   `low` and the first tier with any trigger wins, `medium` otherwise.

pub mod keywords;
pub mod response;

use keywords::{type_keywords, URGENCY_TIERS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use response::{generate_response, response_for_codes, FALLBACK_RESPONSE};

/// A code that does not name a known type, priority or status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} code: '{code}'")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub code: String,
}

impl ParseCodeError {
    pub fn new(kind: &'static str, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Incident,
    Request,
    Problem,
}

impl TicketType {
    /// Scoring order; also the tie-break order.
    pub const ALL: [TicketType; 3] = [
        TicketType::Incident,
        TicketType::Request,
        TicketType::Problem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Incident => "incident",
            TicketType::Request => "request",
            TicketType::Problem => "problem",
        }
    }

    /// Spanish display label.
    pub fn label(self) -> &'static str {
        crate::labels::type_label(self.as_str())
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseCodeError::new("type", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Most to least severe; the urgency scan order.
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Spanish display label.
    pub fn label(self) -> &'static str {
        crate::labels::priority_label(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseCodeError::new("priority", s))
    }
}

/// The (type, priority) pair assigned to one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub priority: Priority,
}

/// A classification together with its canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triage {
    #[serde(flatten)]
    pub classification: Classification,
    pub response: &'static str,
}

/// Per-type evidence collected while classifying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeScore {
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub score: usize,
    pub matched: Vec<&'static str>,
}

/// Classification plus the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationTrace {
    pub result: Classification,
    pub type_scores: Vec<TypeScore>,
    /// Trigger that selected the priority tier; `None` when the default applied.
    pub priority_keyword: Option<&'static str>,
}

/// Classify a ticket description into a type and priority.
pub fn classify(description: &str) -> Classification {
    let text = description.to_lowercase();

    let scores = TicketType::ALL.map(|t| (t, score_type(&text, t)));
    let ticket_type = pick_type(&scores);
    let priority = match_urgency(&text).map_or(Priority::default(), |(p, _)| p);

    Classification {
        ticket_type,
        priority,
    }
}

/// Classify and attach the canned response for the result.
pub fn triage(description: &str) -> Triage {
    let classification = classify(description);
    Triage {
        classification,
        response: generate_response(classification.ticket_type, classification.priority),
    }
}

/// Classify and report which triggers produced the result.
pub fn explain(description: &str) -> ClassificationTrace {
    let text = description.to_lowercase();

    let type_scores: Vec<TypeScore> = TicketType::ALL
        .into_iter()
        .map(|ticket_type| {
            let matched: Vec<&'static str> = type_keywords(ticket_type)
                .iter()
                .copied()
                .filter(|keyword| text.contains(*keyword))
                .collect();
            TypeScore {
                ticket_type,
                score: matched.len(),
                matched,
            }
        })
        .collect();

    let scores: Vec<(TicketType, usize)> = type_scores
        .iter()
        .map(|s| (s.ticket_type, s.score))
        .collect();
    let urgency = match_urgency(&text);

    ClassificationTrace {
        result: Classification {
            ticket_type: pick_type(&scores),
            priority: urgency.map_or(Priority::default(), |(p, _)| p),
        },
        type_scores,
        priority_keyword: urgency.map(|(_, keyword)| keyword),
    }
}

/// Number of distinct triggers of `ticket_type` present in `text`.
fn score_type(text: &str, ticket_type: TicketType) -> usize {
    type_keywords(ticket_type)
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count()
}

/// Left-to-right max over scores in fixed order.
///
/// The running best starts at `incident` and is only replaced by a strictly
/// greater score, so a later type never displaces an earlier one on a tie.
fn pick_type(scores: &[(TicketType, usize)]) -> TicketType {
    let (best, best_score) = scores.iter().copied().fold(
        (TicketType::Incident, 0),
        |(best, best_score), (ticket_type, score)| {
            if score > best_score {
                (ticket_type, score)
            } else {
                (best, best_score)
            }
        },
    );

    if best_score == 0 {
        TicketType::Incident
    } else {
        best
    }
}

/// First urgency tier with a trigger present in `text`, with that trigger.
fn match_urgency(text: &str) -> Option<(Priority, &'static str)> {
    URGENCY_TIERS.iter().find_map(|(priority, triggers)| {
        triggers
            .iter()
            .find(|keyword| text.contains(**keyword))
            .map(|keyword| (*priority, *keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ticket_type: TicketType, priority: Priority) -> Classification {
        Classification {
            ticket_type,
            priority,
        }
    }

    // --- Defaults ---

    #[test]
    fn test_empty_description_defaults() {
        assert_eq!(
            classify(""),
            pair(TicketType::Incident, Priority::Medium)
        );
    }

    #[test]
    fn test_whitespace_only_defaults() {
        assert_eq!(
            classify("   \n\t  "),
            pair(TicketType::Incident, Priority::Medium)
        );
    }

    #[test]
    fn test_no_keywords_defaults() {
        assert_eq!(
            classify("hola, buenas tardes"),
            pair(TicketType::Incident, Priority::Medium)
        );
    }

    // --- Type resolution ---

    #[test]
    fn test_accented_incident_keyword() {
        assert_eq!(classify("el sistema está caído").ticket_type, TicketType::Incident);
    }

    #[test]
    fn test_uppercase_accented_description_is_lowercased() {
        assert_eq!(
            classify("EL SERVIDOR ESTÁ CAÍDO").ticket_type,
            TicketType::Incident
        );
        assert_eq!(
            classify("Solicito INSTALACIÓN de office").ticket_type,
            TicketType::Request
        );
    }

    #[test]
    fn test_request_by_count() {
        let result = classify("necesito acceso a la vpn urgente");
        assert_eq!(result, pair(TicketType::Request, Priority::Critical));
    }

    #[test]
    fn test_tie_keeps_first_type() {
        // "error" (incident) vs "nuevo" (request): 1-1, incident comes first
        assert_eq!(
            classify("error nuevo"),
            pair(TicketType::Incident, Priority::Medium)
        );
    }

    #[test]
    fn test_request_problem_tie_keeps_request() {
        // "crear" (request) vs "siempre" (problem)
        assert_eq!(classify("crear siempre").ticket_type, TicketType::Request);
    }

    #[test]
    fn test_problem_outscores_incident() {
        let result = classify("problema recurrente, ocurre todos los días");
        // incident: "problema"; problem: "recurrente", "todos los días"
        assert_eq!(result.ticket_type, TicketType::Problem);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        // three "error" occurrences are still one incident point
        let result = classify("error error error, necesito crear cuenta");
        assert_eq!(result.ticket_type, TicketType::Request);
    }

    #[test]
    fn test_unanchored_substring_match() {
        // "nuevo" matches inside "renuevo"
        assert_eq!(classify("renuevo").ticket_type, TicketType::Request);
    }

    // --- Priority resolution ---

    #[test]
    fn test_critical_wins_over_low() {
        let result = classify("mejora cosmética urgente");
        assert_eq!(result.priority, Priority::Critical);
    }

    #[test]
    fn test_first_tier_wins_regardless_of_count() {
        // one high trigger against three low triggers
        let result = classify("sugerencia opcional sin prisa para el departamento");
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn test_low_priority() {
        assert_eq!(classify("es una sugerencia, sin prisa").priority, Priority::Low);
    }

    #[test]
    fn test_medium_keyword() {
        assert_eq!(classify("falla parcial").priority, Priority::Medium);
    }

    #[test]
    fn test_no_urgente_phrase_requires_contiguous_text() {
        assert!(!"no es urgente".contains("no urgente"));
        // "urgente" alone is a critical trigger and is checked first
        assert_eq!(classify("no es urgente").priority, Priority::Critical);
        assert_eq!(classify("no urgente").priority, Priority::Critical);
    }

    // --- Totality ---

    #[test]
    fn test_assorted_inputs_classify() {
        let long = "a".repeat(10_000);
        let inputs = [
            "",
            "🙂🙂🙂",
            "İSTANBUL",
            "\u{0}",
            long.as_str(),
            "ERROR EN PRODUCCIÓN",
        ];
        for input in inputs {
            let result = classify(input);
            assert!(TicketType::ALL.contains(&result.ticket_type));
            assert!(Priority::ALL.contains(&result.priority));
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "La impresora del departamento no funciona otra vez";
        assert_eq!(classify(text), classify(text));
    }

    // --- Explain / triage ---

    #[test]
    fn test_explain_matches_classify() {
        for text in [
            "",
            "necesito acceso a la vpn urgente",
            "error nuevo",
            "problema recurrente, ocurre todos los días, no es urgente",
            "pantalla azul intermitente en el equipo del proyecto",
        ] {
            assert_eq!(explain(text).result, classify(text), "{text}");
        }
    }

    #[test]
    fn test_explain_reports_evidence() {
        let trace = explain("necesito acceso a la vpn urgente");
        let request = &trace.type_scores[1];
        assert_eq!(request.ticket_type, TicketType::Request);
        assert_eq!(request.score, 2);
        assert_eq!(request.matched, vec!["necesito", "acceso"]);
        assert_eq!(trace.priority_keyword, Some("urgente"));
    }

    #[test]
    fn test_explain_default_priority_has_no_keyword() {
        assert_eq!(explain("error").priority_keyword, None);
    }

    #[test]
    fn test_triage_attaches_response() {
        let result = triage("el sistema está caído");
        assert_eq!(
            result.response,
            generate_response(TicketType::Incident, Priority::Medium)
        );
    }

    // --- Codes ---

    #[test]
    fn test_codes_round_trip() {
        for t in TicketType::ALL {
            assert_eq!(t.as_str().parse::<TicketType>(), Ok(t));
        }
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>(), Ok(p));
        }
    }

    #[test]
    fn test_unknown_code_error() {
        let err = "Incident".parse::<TicketType>().unwrap_err();
        assert_eq!(err.kind, "type");
        assert_eq!(err.to_string(), "Unknown type code: 'Incident'");
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_classification_serializes_with_type_key() {
        let json = serde_json::to_string(&classify("solicito licencia")).unwrap();
        assert_eq!(json, r#"{"type":"request","priority":"medium"}"#);
    }
}
