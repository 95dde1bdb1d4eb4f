use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::booking::{Booking, BookingCreate};
use crate::state::AppState;
use crate::store::BOOKINGS_LIST_LIMIT;

/// POST /api/bookings
pub async fn handle_create_booking(
    State(state): State<AppState>,
    Json(input): Json<BookingCreate>,
) -> Result<Json<Booking>, AppError> {
    let booking = Booking::from(input);
    state.store.insert_booking(&booking).await?;
    Ok(Json(booking))
}

/// GET /api/bookings/:user_id
pub async fn handle_list_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(
        state
            .store
            .list_bookings(&user_id, BOOKINGS_LIST_LIMIT)
            .await?,
    ))
}
