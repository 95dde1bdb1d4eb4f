//! Axum route handlers for career recommendations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::careers::generator::{
    generate_recommendations, latest_careers, GeneratedRecommendation,
};
use crate::errors::AppError;
use crate::models::career::Career;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub assessment_id: String,
    pub user_id: String,
}

/// Either `{success: true, careers}` or `{success: false, message}`.
#[derive(Debug, Serialize)]
pub struct CareerLookupResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub careers: Option<Vec<Career>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/career-recommendations?assessment_id=..&user_id=..
///
/// 404 when the assessment does not exist; otherwise always succeeds,
/// falling back to stream-based careers if the provider is unavailable.
pub async fn handle_generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<GeneratedRecommendation>, AppError> {
    let response = generate_recommendations(
        state.store.as_ref(),
        state.llm.as_ref(),
        state.config.llm_timeout,
        &params.assessment_id,
        &params.user_id,
    )
    .await?;
    Ok(Json(response))
}

/// GET /api/career-recommendations/:user_id
pub async fn handle_get_latest(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CareerLookupResponse>, AppError> {
    let response = match latest_careers(state.store.as_ref(), &user_id).await? {
        Some(careers) => CareerLookupResponse {
            success: true,
            careers: Some(careers),
            message: None,
        },
        None => CareerLookupResponse {
            success: false,
            careers: None,
            message: Some("No recommendations found".to_string()),
        },
    };
    Ok(Json(response))
}
