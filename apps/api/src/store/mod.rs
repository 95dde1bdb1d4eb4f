//! Document store — the only place records are read or written.
//!
//! Handlers and the recommendation generator receive an `Arc<dyn Store>` from
//! `AppState`; the concrete backend is picked once at startup from `Config`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::assessment::Assessment;
use crate::models::booking::Booking;
use crate::models::career::CareerRecommendation;
use crate::models::membership::Membership;
use crate::models::user::User;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Max bookings returned for one user.
pub const BOOKINGS_LIST_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Single-document reads and writes for every collection the API owns.
///
/// "Latest" lookups order by `created_at`, newest first, with insertion order
/// breaking ties.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError>;
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
    /// Inserts `user` unless its phone is already registered, as one atomic
    /// step. Returns whichever user owns the phone afterwards. The guest
    /// placeholder phone is exempt and always inserts.
    async fn insert_user_if_absent(&self, user: &User) -> Result<User, StoreError>;
    /// Marks every user with this phone as verified.
    async fn mark_user_verified(&self, phone: &str) -> Result<(), StoreError>;

    async fn insert_assessment(&self, assessment: &Assessment) -> Result<(), StoreError>;
    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StoreError>;
    async fn latest_assessment_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StoreError>;

    async fn insert_recommendation(
        &self,
        recommendation: &CareerRecommendation,
    ) -> Result<(), StoreError>;
    async fn latest_recommendation_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CareerRecommendation>, StoreError>;

    async fn insert_booking(&self, booking: &Booking) -> Result<(), StoreError>;
    /// Oldest first, at most `limit` records.
    async fn list_bookings(&self, user_id: &str, limit: usize)
        -> Result<Vec<Booking>, StoreError>;

    async fn insert_membership(&self, membership: &Membership) -> Result<(), StoreError>;
    async fn active_membership(&self, user_id: &str) -> Result<Option<Membership>, StoreError>;

    /// Releases connections. Called once after the server stops.
    async fn close(&self) {}
}
