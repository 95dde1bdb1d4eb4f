use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::otp::is_acceptable_otp;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Name given to users created by verify-otp without a prior send-otp.
const UNNAMED_USER: &str = "User";

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub phone: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SkipAuthResponse {
    pub success: bool,
    pub user_id: Uuid,
    pub message: String,
}

/// POST /api/auth/send-otp
///
/// Registers the phone if unseen. No message is actually delivered.
pub async fn handle_send_otp(
    State(state): State<AppState>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<OtpResponse>, AppError> {
    let candidate = User::new(req.name, req.phone);
    let user = state.store.insert_user_if_absent(&candidate).await?;
    if user.id == candidate.id {
        info!("Registered user {} for OTP login", user.id);
    }

    Ok(Json(OtpResponse {
        success: true,
        message: "OTP sent successfully".to_string(),
        user_id: None,
    }))
}

/// POST /api/auth/verify-otp
pub async fn handle_verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<OtpResponse>, AppError> {
    if !is_acceptable_otp(&req.otp) {
        return Ok(Json(OtpResponse {
            success: false,
            message: "Invalid OTP".to_string(),
            user_id: None,
        }));
    }

    // Unknown phones are registered already verified; known ones get flagged.
    let user = state
        .store
        .insert_user_if_absent(&User::verified(UNNAMED_USER, req.phone.as_str()))
        .await?;
    if !user.verified {
        state.store.mark_user_verified(&req.phone).await?;
    }
    let user_id = user.id;

    Ok(Json(OtpResponse {
        success: true,
        message: "OTP verified".to_string(),
        user_id: Some(user_id),
    }))
}

/// POST /api/auth/skip
///
/// Every call creates a fresh, pre-verified guest.
pub async fn handle_skip(
    State(state): State<AppState>,
) -> Result<Json<SkipAuthResponse>, AppError> {
    let guest = User::guest();
    state.store.insert_user(&guest).await?;
    info!("Guest access granted: {}", guest.id);

    Ok(Json(SkipAuthResponse {
        success: true,
        user_id: guest.id,
        message: "Guest access granted".to_string(),
    }))
}
