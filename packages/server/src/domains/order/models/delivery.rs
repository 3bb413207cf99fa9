use serde::Serialize;
use sqlx::PgPool;

use crate::common::{Address, DeliveryId, ServiceError};

/// Delivery row model - the shipping address for exactly one order.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Delivery {
    pub id: DeliveryId,

    #[sqlx(flatten)]
    pub address: Address,
}

impl Delivery {
    /// Find delivery by ID
    pub async fn find_by_id(id: DeliveryId, pool: &PgPool) -> Result<Option<Self>, ServiceError> {
        sqlx::query_as::<_, Self>("SELECT * FROM deliveries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a delivery row (fixtures; order placement is not part of this
    /// service)
    pub async fn insert(&self, pool: &PgPool) -> Result<Self, ServiceError> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO deliveries (id, city, street, zipcode)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.address.city)
        .bind(&self.address.street)
        .bind(&self.address.zipcode)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
