use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const GUEST_NAME: &str = "Guest User";
pub const GUEST_PHONE: &str = "0000000000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// An unverified user awaiting OTP confirmation.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn verified(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            verified: true,
            ..Self::new(name, phone)
        }
    }

    pub fn guest() -> Self {
        Self::verified(GUEST_NAME, GUEST_PHONE)
    }
}
