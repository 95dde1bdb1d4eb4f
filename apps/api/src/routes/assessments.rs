use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::assessment::{Assessment, AssessmentCreate};
use crate::state::AppState;

/// POST /api/assessments
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    Json(input): Json<AssessmentCreate>,
) -> Result<Json<Assessment>, AppError> {
    input.validate()?;

    let assessment = input.into_assessment();
    state.store.insert_assessment(&assessment).await?;
    info!(
        "Saved assessment {} ({}) for user {}",
        assessment.id, assessment.stream, assessment.user_id
    );

    Ok(Json(assessment))
}

/// GET /api/assessments/:user_id
///
/// Latest assessment for the user, or `null`.
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<Assessment>>, AppError> {
    Ok(Json(state.store.latest_assessment_for_user(&user_id).await?))
}
