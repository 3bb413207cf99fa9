//! Register member action - duplicate-checked member creation.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::errors::is_unique_violation;
use crate::common::{Address, MemberId, ServiceError};
use crate::domains::member::models::member::Member;

/// Register a new member.
///
/// Runs as one transaction:
/// 1. Case-sensitive existence check on the name (fast path)
/// 2. Insert - the unique index on `members.name` rejects a concurrent
///    registration that slipped past the check
///
/// Fails with `ServiceError::DuplicateName` either way.
pub async fn register_member(
    name: String,
    address: Address,
    pool: &PgPool,
) -> Result<MemberId, ServiceError> {
    info!(name = %name, "registering member");

    let mut tx = pool.begin().await?;

    if Member::find_by_name(&name, &mut *tx).await?.is_some() {
        debug!(name = %name, "member name already taken");
        return Err(ServiceError::DuplicateName(name));
    }

    let member = Member {
        id: MemberId::new(),
        name,
        address,
        created_at: Utc::now(),
    };

    let created = match member.insert(&mut *tx).await {
        Ok(created) => created,
        Err(ServiceError::Database(e)) if is_unique_violation(&e) => {
            return Err(ServiceError::DuplicateName(member.name));
        }
        Err(e) => return Err(e),
    };

    tx.commit().await?;

    info!(member_id = %created.id, "member registered");
    Ok(created.id)
}
