//! Update member name action.

use sqlx::PgPool;
use tracing::info;

use crate::common::errors::is_unique_violation;
use crate::common::{MemberId, ServiceError};
use crate::domains::member::models::member::Member;

/// Update a member's name. Fails with `NotFound` if the id is unknown.
///
/// There is no uniqueness pre-check here, unlike registration; the unique
/// index still rejects a collision, surfaced as `DuplicateName`.
pub async fn update_member_name(
    id: MemberId,
    name: String,
    pool: &PgPool,
) -> Result<(), ServiceError> {
    info!(member_id = %id, "updating member name");

    match Member::update_name(id, &name, pool).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::not_found("member", id)),
        Err(ServiceError::Database(e)) if is_unique_violation(&e) => {
            Err(ServiceError::DuplicateName(name))
        }
        Err(e) => Err(e),
    }
}
