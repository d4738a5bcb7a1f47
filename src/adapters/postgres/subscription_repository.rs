//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Provides persistent storage for subscriptions using PostgreSQL.

use crate::domain::foundation::{DomainError, ErrorCode, Month, SubscriptionId, UserId};
use crate::domain::subscription::{BillingWindow, PageRequest, Subscription, SubscriptionDraft};
use crate::ports::{subscription_not_found, SubscriptionRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SubscriptionRepository port.
///
/// Uses sqlx with connection pooling. Dates are stored as `DATE` pinned to the
/// first of the month.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: i64,
    service_name: String,
    price: i64,
    user_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let id = row.id;
        Ok(Subscription {
            id: SubscriptionId::new(id).map_err(|e| invalid_column(id, "id", e))?,
            service_name: row.service_name,
            price: row.price,
            user_id: UserId::from_uuid(row.user_id),
            start_date: Month::from_date("start_date", row.start_date)
                .map_err(|e| invalid_column(id, "start_date", e))?,
            end_date: Month::from_date("end_date", row.end_date)
                .map_err(|e| invalid_column(id, "end_date", e))?,
        })
    }
}

fn invalid_column(id: i64, column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} in subscription row {}: {}", column, id, err),
    )
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn create(&self, draft: &SubscriptionDraft) -> Result<SubscriptionId, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO subscriptions (service_name, price, user_id, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&draft.service_name)
        .bind(draft.price)
        .bind(draft.user_id.as_uuid())
        .bind(draft.start_date.as_date())
        .bind(draft.end_date.as_date())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create subscription: {}", e)))?;

        SubscriptionId::new(id).map_err(|e| {
            DomainError::database(format!("Database returned invalid id {}: {}", id, e))
        })
    }

    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load subscription: {}", e)))?;

        row.map(Subscription::try_from).transpose()
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list subscriptions: {}", e)))?;

        rows.into_iter().map(Subscription::try_from).collect()
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                service_name = $2,
                price = $3,
                user_id = $4,
                start_date = $5,
                end_date = $6
            WHERE id = $1
            "#,
        )
        .bind(subscription.id.value())
        .bind(&subscription.service_name)
        .bind(subscription.price)
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.start_date.as_date())
        .bind(subscription.end_date.as_date())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update subscription: {}", e)))?;

        // Postgres reports matched rows, so an unchanged row still counts.
        if result.rows_affected() == 0 {
            return Err(subscription_not_found(subscription.id));
        }

        Ok(())
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete subscription: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(subscription_not_found(id));
        }

        Ok(())
    }

    async fn find_overlapping(
        &self,
        user_id: &UserId,
        service_name: &str,
        window: &BillingWindow,
    ) -> Result<Option<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE user_id = $1
              AND service_name = $2
              AND start_date <= $4
              AND end_date >= $3
            ORDER BY id DESC
            LIMIT 2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(service_name)
        .bind(window.start().as_date())
        .bind(window.end().as_date())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to find overlapping subscription: {}", e))
        })?;

        if rows.len() > 1 {
            tracing::warn!(
                subscription_id = rows[0].id,
                user_id = %user_id,
                service_name = %service_name,
                "several subscriptions overlap the window, using the newest"
            );
        }

        rows.into_iter().next().map(Subscription::try_from).transpose()
    }
}
