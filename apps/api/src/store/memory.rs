//! In-process document store. Used with `STORE_BACKEND=memory` for local runs
//! without Postgres, and by the test suite. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError};
use crate::models::assessment::Assessment;
use crate::models::booking::Booking;
use crate::models::career::CareerRecommendation;
use crate::models::membership::{Membership, MembershipStatus};
use crate::models::user::{User, GUEST_PHONE};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    assessments: Vec<Assessment>,
    recommendations: Vec<CareerRecommendation>,
    bookings: Vec<Booking>,
    memberships: Vec<Membership>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStore {
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn recommendation_count(&self) -> usize {
        self.inner.read().await.recommendations.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard.users.iter().find(|u| u.phone == phone).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.inner.write().await.users.push(user.clone());
        Ok(())
    }

    async fn insert_user_if_absent(&self, user: &User) -> Result<User, StoreError> {
        let mut guard = self.inner.write().await;
        if user.phone != GUEST_PHONE {
            if let Some(existing) = guard.users.iter().find(|u| u.phone == user.phone) {
                return Ok(existing.clone());
            }
        }
        guard.users.push(user.clone());
        Ok(user.clone())
    }

    async fn mark_user_verified(&self, phone: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        for user in guard.users.iter_mut().filter(|u| u.phone == phone) {
            user.verified = true;
        }
        Ok(())
    }

    async fn insert_assessment(&self, assessment: &Assessment) -> Result<(), StoreError> {
        self.inner.write().await.assessments.push(assessment.clone());
        Ok(())
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard.assessments.iter().find(|a| a.id == id).cloned())
    }

    async fn latest_assessment_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<Assessment>, StoreError> {
        let guard = self.inner.read().await;
        // max_by_key keeps the last of equal keys, i.e. the later insert
        Ok(guard
            .assessments
            .iter()
            .filter(|a| a.user_id == user_id)
            .max_by_key(|a| a.created_at)
            .cloned())
    }

    async fn insert_recommendation(
        &self,
        recommendation: &CareerRecommendation,
    ) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .recommendations
            .push(recommendation.clone());
        Ok(())
    }

    async fn latest_recommendation_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CareerRecommendation>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .recommendations
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn insert_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        self.inner.write().await.bookings.push(booking.clone());
        Ok(())
    }

    async fn list_bookings(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Booking>, StoreError> {
        let guard = self.inner.read().await;
        let mut bookings: Vec<Booking> = guard
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        // stable sort keeps insertion order among equal timestamps
        bookings.sort_by_key(|b| b.created_at);
        bookings.truncate(limit);
        Ok(bookings)
    }

    async fn insert_membership(&self, membership: &Membership) -> Result<(), StoreError> {
        self.inner.write().await.memberships.push(membership.clone());
        Ok(())
    }

    async fn active_membership(&self, user_id: &str) -> Result<Option<Membership>, StoreError> {
        let guard = self.inner.read().await;
        Ok(guard
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id && m.status == MembershipStatus::Active)
            .max_by_key(|m| m.created_at)
            .cloned())
    }
}
