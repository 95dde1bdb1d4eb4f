pub mod assessments;
pub mod bookings;
pub mod health;
pub mod memberships;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::careers::handlers as careers;
use crate::state::AppState;

/// Every route lives under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Auth (mock OTP)
        .route("/auth/send-otp", post(auth::handle_send_otp))
        .route("/auth/verify-otp", post(auth::handle_verify_otp))
        .route("/auth/skip", post(auth::handle_skip))
        // Assessments
        .route("/assessments", post(assessments::handle_create_assessment))
        .route(
            "/assessments/:user_id",
            get(assessments::handle_get_assessment),
        )
        // Career recommendations
        .route("/career-recommendations", post(careers::handle_generate))
        .route(
            "/career-recommendations/:user_id",
            get(careers::handle_get_latest),
        )
        // Bookings & memberships
        .route("/bookings", post(bookings::handle_create_booking))
        .route("/bookings/:user_id", get(bookings::handle_list_bookings))
        .route("/memberships", post(memberships::handle_create_membership))
        .route(
            "/memberships/:user_id",
            get(memberships::handle_get_membership),
        );

    Router::new().nest("/api", api).with_state(state)
}
