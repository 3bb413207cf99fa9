use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgExecutor, PgPool};

use crate::common::{Address, MemberId, ServiceError};

/// Member row model - SQL persistence layer.
///
/// `name` is unique: the registration action checks first, and the unique
/// index on `members.name` rejects whatever slips past the check.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,

    // Embedded address value object (columns live on members)
    #[sqlx(flatten)]
    pub address: Address,

    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Find member by ID
    pub async fn find_by_id(id: MemberId, pool: &PgPool) -> Result<Option<Self>, ServiceError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find member by exact name (case-sensitive)
    pub async fn find_by_name(
        name: &str,
        db: impl PgExecutor<'_>,
    ) -> Result<Option<Self>, ServiceError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE name = $1")
            .bind(name)
            .fetch_optional(db)
            .await
            .map_err(Into::into)
    }

    /// All members, oldest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ServiceError> {
        sqlx::query_as::<_, Self>("SELECT * FROM members ORDER BY created_at")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new member
    pub async fn insert(&self, db: impl PgExecutor<'_>) -> Result<Self, ServiceError> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (id, name, city, street, zipcode, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.address.city)
        .bind(&self.address.street)
        .bind(&self.address.zipcode)
        .bind(self.created_at)
        .fetch_one(db)
        .await
        .map_err(Into::into)
    }

    /// Update member name; returns the updated row if it exists
    pub async fn update_name(
        id: MemberId,
        name: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, ServiceError> {
        sqlx::query_as::<_, Self>("UPDATE members SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_nested_address() {
        let member = Member {
            id: MemberId::new(),
            name: "kim".to_string(),
            address: Address::new("Seoul", "Main", "12345"),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["name"], "kim");
        assert_eq!(json["address"]["city"], "Seoul");
        assert_eq!(json["address"]["zipcode"], "12345");
    }
}
