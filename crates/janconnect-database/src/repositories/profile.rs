//! Profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use janconnect_core::error::{AppError, ErrorKind};
use janconnect_core::result::AppResult;
use janconnect_entity::user::Profile;
use janconnect_notify::store::ProfileStore;

/// Repository for account profiles and role membership.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile for a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// List every account currently holding the administrator role.
    pub async fn list_admin_ids(&self) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM profiles WHERE is_admin = TRUE")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admins", e))
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.find_by_user(user_id).await
    }

    async fn list_admin_ids(&self) -> AppResult<Vec<Uuid>> {
        self.list_admin_ids().await
    }
}
