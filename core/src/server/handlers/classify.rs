use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classify::{explain, triage, ClassificationTrace, Triage};
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct ClassifyRequest {
    description: String,
}

#[derive(Deserialize, Default)]
pub struct ClassifyQuery {
    #[serde(default)]
    explain: bool,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    triage: Triage,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<ClassificationTrace>,
}

/// POST /classify: classify a description without storing anything
pub async fn classify(
    Query(query): Query<ClassifyQuery>,
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = body?;
    let trace = query.explain.then(|| explain(&request.description));
    Ok(Json(ClassifyResponse {
        triage: triage(&request.description),
        trace,
    }))
}
