use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::membership::{Membership, MembershipCreate};
use crate::state::AppState;

/// POST /api/memberships
///
/// Idempotent per user: an existing active membership is returned as-is.
/// Payment is simulated and always recorded as paid.
pub async fn handle_create_membership(
    State(state): State<AppState>,
    Json(input): Json<MembershipCreate>,
) -> Result<Json<Membership>, AppError> {
    if let Some(existing) = state.store.active_membership(&input.user_id).await? {
        return Ok(Json(existing));
    }

    let membership = Membership::from(input);
    state.store.insert_membership(&membership).await?;
    info!("Activated membership {} for user {}", membership.id, membership.user_id);

    Ok(Json(membership))
}

/// GET /api/memberships/:user_id
pub async fn handle_get_membership(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<Membership>>, AppError> {
    Ok(Json(state.store.active_membership(&user_id).await?))
}
