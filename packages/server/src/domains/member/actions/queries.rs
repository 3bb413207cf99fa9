//! Member query actions - read-only, no side effects.

use sqlx::PgPool;

use crate::common::{MemberId, ServiceError};
use crate::domains::member::models::member::Member;

/// All members.
pub async fn find_members(pool: &PgPool) -> Result<Vec<Member>, ServiceError> {
    Member::find_all(pool).await
}

/// Single member by id; `NotFound` on a miss.
pub async fn find_member(id: MemberId, pool: &PgPool) -> Result<Member, ServiceError> {
    Member::find_by_id(id, pool)
        .await?
        .ok_or_else(|| ServiceError::not_found("member", id))
}
