use axum::Json;

use crate::labels::LabelSet;

/// GET /labels
pub async fn labels() -> Json<LabelSet> {
    Json(LabelSet::snapshot())
}
