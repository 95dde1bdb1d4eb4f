use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership fee in INR. Payment is simulated and always succeeds.
pub const MEMBERSHIP_FEE_INR: u32 = 10_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub amount: u32,
    pub status: MembershipStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipCreate {
    pub user_id: String,
    pub name: String,
    pub phone: String,
}

impl From<MembershipCreate> for Membership {
    fn from(input: MembershipCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            name: input.name,
            phone: input.phone,
            amount: MEMBERSHIP_FEE_INR,
            status: MembershipStatus::Active,
            payment_status: PaymentStatus::Paid,
            created_at: Utc::now(),
        }
    }
}
