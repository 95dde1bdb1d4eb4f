use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const BOOKING_CONFIRMED: &str = "confirmed";

/// A consultation slot. `consultation_type` is "Online" or "Offline" as sent by the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub consultation_type: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub consultation_type: String,
    pub date: String,
    pub time: String,
}

impl From<BookingCreate> for Booking {
    fn from(input: BookingCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            name: input.name,
            phone: input.phone,
            consultation_type: input.consultation_type,
            date: input.date,
            time: input.time,
            status: BOOKING_CONFIRMED.to_string(),
            created_at: Utc::now(),
        }
    }
}
