//! Complaint repository implementation.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use janconnect_core::error::{AppError, ErrorKind};
use janconnect_core::result::AppResult;
use janconnect_entity::complaint::{Complaint, ComplaintStatus, NewComplaint, ReferenceCode};
use janconnect_notify::store::ComplaintStore;

/// Repository for complaint CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    /// Create a new complaint repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new complaint with status `Submitted`.
    ///
    /// The reference code is assigned here, exactly once, from the
    /// `complaint_reference_seq` sequence. It never changes afterwards.
    pub async fn create(&self, new: &NewComplaint) -> AppResult<Complaint> {
        let sequence: i64 = sqlx::query_scalar("SELECT nextval('complaint_reference_seq')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to allocate reference", e)
            })?;
        let reference = ReferenceCode::new(Utc::now().year(), sequence).to_string();

        sqlx::query_as::<_, Complaint>(
            "INSERT INTO complaints (reference, user_id, title, description, category, priority, status, location, language, attachments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&reference)
        .bind(new.user_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.category)
        .bind(new.priority)
        .bind(ComplaintStatus::Submitted)
        .bind(&new.location)
        .bind(&new.language)
        .bind(&new.attachments)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create complaint", e))
    }

    /// Find a complaint by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>> {
        sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find complaint by id", e)
            })
    }

    /// Find a complaint by its human-facing reference code.
    pub async fn find_by_reference(&self, reference: &str) -> AppResult<Option<Complaint>> {
        sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find complaint by reference",
                    e,
                )
            })
    }

    /// List a citizen's complaints, most recent first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Complaint>> {
        sqlx::query_as::<_, Complaint>(
            "SELECT * FROM complaints WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list complaints", e))
    }

    /// Update a complaint's status, refreshing `updated_at`.
    pub async fn update_status(&self, id: Uuid, status: ComplaintStatus) -> AppResult<Complaint> {
        sqlx::query_as::<_, Complaint>(
            "UPDATE complaints SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Complaint {id} not found")))
    }
}

#[async_trait]
impl ComplaintStore for ComplaintRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>> {
        self.find_by_id(id).await
    }
}
