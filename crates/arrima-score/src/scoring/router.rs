use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::domain::{Factor, ScoreState};
use super::rubric::{rubric_view, FactorRubricView, RubricView};
use super::session::{ScoreReport, ScoreSession};
use crate::error::AppError;

/// Snapshot of selections expressed as rubric point values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub has_spouse: bool,
    #[serde(default)]
    pub financial_autonomy_acknowledged: bool,
    #[serde(default)]
    pub factors: BTreeMap<Factor, u16>,
}

/// Snapshot of selections expressed as rubric option keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionScoreRequest {
    #[serde(default)]
    pub has_spouse: bool,
    #[serde(default)]
    pub financial_autonomy_acknowledged: bool,
    #[serde(default)]
    pub selections: BTreeMap<Factor, String>,
}

/// Router builder exposing the rubric and scoring endpoints.
pub fn scoring_router() -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/score/options", post(score_options_handler))
        .route("/api/v1/rubric", get(rubric_handler))
        .route("/api/v1/rubric/:factor", get(factor_rubric_handler))
}

pub(crate) async fn score_handler(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let state = ScoreState::try_from(request.factors)?;
    let mut session = ScoreSession::from_state(state, request.has_spouse);
    session.acknowledge_financial_autonomy(request.financial_autonomy_acknowledged);

    let report = session.report();
    debug!(total = report.totals.total, tier = report.tier.label(), "score computed");
    Ok(Json(report))
}

pub(crate) async fn score_options_handler(
    Json(request): Json<OptionScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let mut session = ScoreSession::new();
    session.set_has_spouse(request.has_spouse);
    session.acknowledge_financial_autonomy(request.financial_autonomy_acknowledged);

    for (factor, option_key) in &request.selections {
        session.select_option(*factor, option_key)?;
    }

    let report = session.report();
    debug!(total = report.totals.total, tier = report.tier.label(), "score computed");
    Ok(Json(report))
}

pub(crate) async fn rubric_handler() -> Json<RubricView> {
    Json(rubric_view())
}

pub(crate) async fn factor_rubric_handler(Path(raw): Path<String>) -> Response {
    match raw.parse::<Factor>() {
        Ok(factor) => (StatusCode::OK, Json(FactorRubricView::for_factor(factor))).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
