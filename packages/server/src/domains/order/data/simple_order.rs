//! Flat order transfer object for the simple-order list endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{Address, OrderId, ServiceError};
use crate::domains::order::models::order::{Order, OrderStatus};
use crate::domains::order::models::search::OrderSearch;

/// Exactly what the simple-order list returns, nothing else:
/// `{orderId, name, orderDate, orderStatus, address}`.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderData {
    pub order_id: OrderId,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatus,

    #[sqlx(flatten)]
    pub address: Address,
}

impl SimpleOrderData {
    /// Shape a fully-loaded order. Fails with `LazyResolution` if the order's
    /// relations were never resolved.
    pub fn from_loaded_order(order: &Order) -> Result<Self, ServiceError> {
        let member = order.member.get("member")?;
        let delivery = order.delivery.get("delivery")?;

        Ok(Self {
            order_id: order.id,
            name: member.name.clone(),
            order_date: order.order_date,
            order_status: order.status,
            address: delivery.address.clone(),
        })
    }

    /// Direct projection: one query selecting only the columns this shape
    /// needs, no entity materialization in between.
    pub async fn find(search: &OrderSearch, pool: &PgPool) -> Result<Vec<Self>, ServiceError> {
        sqlx::query_as::<_, Self>(
            "SELECT o.id AS order_id, m.name, o.order_date, o.status AS order_status,
                    d.city, d.street, d.zipcode
             FROM orders o
             JOIN members m ON m.id = o.member_id
             JOIN deliveries d ON d.id = o.delivery_id
             WHERE ($1::text IS NULL OR o.status = $1)
               AND ($2::text IS NULL OR m.name LIKE '%' || $2 || '%')
             ORDER BY o.order_date",
        )
        .bind(search.status_param())
        .bind(search.name_param())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
