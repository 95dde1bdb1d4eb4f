//! Postgres-backed document store.
//!
//! Each collection is a table of JSONB documents keyed by id, with an `owner`
//! column (user id, or phone for users) and `created_at` pulled out for lookups.
//! `seq` preserves insertion order for tie-breaking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use super::{Store, StoreError};
use crate::models::assessment::Assessment;
use crate::models::booking::Booking;
use crate::models::career::CareerRecommendation;
use crate::models::membership::Membership;
use crate::models::user::{User, GUEST_PHONE};

#[derive(Debug, Clone, Copy)]
enum Collection {
    Users,
    Assessments,
    CareerRecommendations,
    Bookings,
    Memberships,
}

impl Collection {
    const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Assessments,
        Collection::CareerRecommendations,
        Collection::Bookings,
        Collection::Memberships,
    ];

    fn table(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Assessments => "assessments",
            Collection::CareerRecommendations => "career_recommendations",
            Collection::Bookings => "bookings",
            Collection::Memberships => "memberships",
        }
    }
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connects to PostgreSQL and makes sure every collection table exists.
    /// `db_name` overrides the database named in the URL.
    pub async fn connect(database_url: &str, db_name: Option<&str>) -> Result<Self, StoreError> {
        info!("Connecting to PostgreSQL...");

        let mut options = PgConnectOptions::from_str(database_url)?;
        if let Some(name) = db_name {
            options = options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        info!("PostgreSQL connection pool established");

        let store = Self { pool };
        store.ensure_collections().await?;
        Ok(store)
    }

    async fn ensure_collections(&self) -> Result<(), StoreError> {
        for collection in Collection::ALL {
            let table = collection.table();
            let create = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    seq        BIGSERIAL PRIMARY KEY,
                    id         UUID NOT NULL UNIQUE,
                    owner      TEXT NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL,
                    doc        JSONB NOT NULL
                )
                "#
            );
            sqlx::query(&create).execute(&self.pool).await?;

            let index = format!(
                "CREATE INDEX IF NOT EXISTS {table}_owner_created_idx \
                 ON {table} (owner, created_at DESC, seq DESC)"
            );
            sqlx::query(&index).execute(&self.pool).await?;
        }
        // One user per phone; guests all share the placeholder phone
        let unique_phone = format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS users_phone_unique_idx \
             ON users (owner) WHERE owner <> '{GUEST_PHONE}'"
        );
        sqlx::query(&unique_phone).execute(&self.pool).await?;

        info!("Document collections ready");
        Ok(())
    }

    async fn insert_doc<T: Serialize + Sync>(
        &self,
        collection: Collection,
        id: Uuid,
        owner: &str,
        created_at: DateTime<Utc>,
        doc: &T,
    ) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, owner, created_at, doc) VALUES ($1, $2, $3, $4)",
            collection.table()
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(owner)
            .bind(created_at)
            .bind(Json(doc))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Newest document for `owner` that also satisfies `extra_filter`
    /// (a fixed SQL fragment, never user input).
    async fn latest_doc<T: DeserializeOwned + Send + Unpin + 'static>(
        &self,
        collection: Collection,
        owner: &str,
        extra_filter: &str,
    ) -> Result<Option<T>, StoreError> {
        let sql = format!(
            "SELECT doc FROM {} WHERE owner = $1 {extra_filter} \
             ORDER BY created_at DESC, seq DESC LIMIT 1",
            collection.table()
        );
        let doc: Option<Json<T>> = sqlx::query_scalar(&sql)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|Json(inner)| inner))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let doc: Option<Json<User>> = sqlx::query_scalar(
            "SELECT doc FROM users WHERE owner = $1 ORDER BY seq ASC LIMIT 1",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc.map(|Json(user)| user))
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.insert_doc(Collection::Users, user.id, &user.phone, user.created_at, user)
            .await
    }

    async fn insert_user_if_absent(&self, user: &User) -> Result<User, StoreError> {
        let sql = format!(
            "INSERT INTO users (id, owner, created_at, doc) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (owner) WHERE owner <> '{GUEST_PHONE}' DO NOTHING \
             RETURNING doc"
        );
        let inserted: Option<Json<User>> = sqlx::query_scalar(&sql)
            .bind(user.id)
            .bind(&user.phone)
            .bind(user.created_at)
            .bind(Json(user))
            .fetch_optional(&self.pool)
            .await?;

        match inserted {
            Some(Json(user)) => Ok(user),
            None => self
                .find_user_by_phone(&user.phone)
                .await?
                .ok_or(StoreError::Database(sqlx::Error::RowNotFound)),
        }
    }

    async fn mark_user_verified(&self, phone: &str) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE users SET doc = jsonb_set(doc, '{verified}', 'true'::jsonb) WHERE owner = $1",
        )
        .bind(phone)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_assessment(&self, assessment: &Assessment) -> Result<(), StoreError> {
        self.insert_doc(
            Collection::Assessments,
            assessment.id,
            &assessment.user_id,
            assessment.created_at,
            assessment,
        )
        .await
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StoreError> {
        let doc: Option<Json<Assessment>> =
            sqlx::query_scalar("SELECT doc FROM assessments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(doc.map(|Json(assessment)| assessment))
    }

    async fn latest_assessment_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StoreError> {
        self.latest_doc(Collection::Assessments, user_id, "").await
    }

    async fn insert_recommendation(
        &self,
        recommendation: &CareerRecommendation,
    ) -> Result<(), StoreError> {
        self.insert_doc(
            Collection::CareerRecommendations,
            recommendation.id,
            &recommendation.user_id,
            recommendation.created_at,
            recommendation,
        )
        .await
    }

    async fn latest_recommendation_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CareerRecommendation>, StoreError> {
        self.latest_doc(Collection::CareerRecommendations, user_id, "")
            .await
    }

    async fn insert_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        self.insert_doc(
            Collection::Bookings,
            booking.id,
            &booking.user_id,
            booking.created_at,
            booking,
        )
        .await
    }

    async fn list_bookings(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Booking>, StoreError> {
        let docs: Vec<Json<Booking>> = sqlx::query_scalar(
            "SELECT doc FROM bookings WHERE owner = $1 ORDER BY created_at ASC, seq ASC LIMIT $2",
        )
        .bind(user_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;
        Ok(docs.into_iter().map(|Json(booking)| booking).collect())
    }

    async fn insert_membership(&self, membership: &Membership) -> Result<(), StoreError> {
        self.insert_doc(
            Collection::Memberships,
            membership.id,
            &membership.user_id,
            membership.created_at,
            membership,
        )
        .await
    }

    async fn active_membership(&self, user_id: &str) -> Result<Option<Membership>, StoreError> {
        self.latest_doc(
            Collection::Memberships,
            user_id,
            "AND doc->>'status' = 'active'",
        )
        .await
    }

    async fn close(&self) {
        info!("Closing PostgreSQL connection pool");
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    //! Run against a scratch database:
    //! `DATABASE_URL=postgres://... cargo test -- --ignored`
    use super::*;
    use crate::careers::fallback::fallback_careers;
    use crate::models::career::CareerSource;
    use crate::models::membership::{MembershipStatus, PaymentStatus};

    async fn test_store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        PgStore::connect(&url, None).await.unwrap()
    }

    /// A phone no other test run uses.
    fn unique_phone() -> String {
        format!("9{}", &Uuid::new_v4().simple().to_string()[..9])
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_insert_user_if_absent_returns_existing_and_verify_flips_flag() {
        let store = test_store().await;
        let phone = unique_phone();

        let first = store
            .insert_user_if_absent(&User::new("Asha", phone.as_str()))
            .await
            .unwrap();
        let second = store
            .insert_user_if_absent(&User::new("Someone Else", phone.as_str()))
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Asha");
        assert!(!second.verified);

        store.mark_user_verified(&phone).await.unwrap();
        let found = store.find_user_by_phone(&phone).await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(found.verified);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_plain_insert_rejects_duplicate_phone_but_not_guests() {
        let store = test_store().await;
        let phone = unique_phone();

        store.insert_user(&User::new("Asha", phone.as_str())).await.unwrap();
        let duplicate = store.insert_user(&User::new("Ravi", phone.as_str())).await;
        assert!(matches!(duplicate, Err(StoreError::Database(_))));

        let a = store.insert_user_if_absent(&User::guest()).await.unwrap();
        let b = store.insert_user_if_absent(&User::guest()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_latest_recommendation_breaks_timestamp_ties_by_insert_order() {
        let store = test_store().await;
        let user_id = Uuid::new_v4().to_string();
        let assessment_id = Uuid::new_v4();

        let older = CareerRecommendation::new(
            assessment_id,
            user_id.clone(),
            fallback_careers("Arts"),
            CareerSource::FallbackProviderFailure,
        );
        let mut newer = CareerRecommendation::new(
            assessment_id,
            user_id.clone(),
            fallback_careers("Commerce"),
            CareerSource::Model,
        );
        newer.created_at = older.created_at;

        store.insert_recommendation(&older).await.unwrap();
        store.insert_recommendation(&newer).await.unwrap();

        let latest = store
            .latest_recommendation_for_user(&user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, newer.id);
        assert_eq!(latest.source, CareerSource::Model);
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_active_membership_skips_newer_expired_record() {
        let store = test_store().await;
        let user_id = Uuid::new_v4().to_string();
        let active = Membership {
            id: Uuid::new_v4(),
            user_id: user_id.clone(),
            name: "Priya".to_string(),
            phone: unique_phone(),
            amount: 10_000,
            status: MembershipStatus::Active,
            payment_status: PaymentStatus::Paid,
            created_at: Utc::now() - chrono::Duration::days(30),
        };
        let expired = Membership {
            id: Uuid::new_v4(),
            status: MembershipStatus::Expired,
            created_at: Utc::now(),
            ..active.clone()
        };

        assert!(store.active_membership(&user_id).await.unwrap().is_none());
        store.insert_membership(&active).await.unwrap();
        store.insert_membership(&expired).await.unwrap();

        let found = store.active_membership(&user_id).await.unwrap().unwrap();
        assert_eq!(found.id, active.id);
    }
}
