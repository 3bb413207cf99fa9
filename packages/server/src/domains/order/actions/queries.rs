//! Order list query actions - four strategies, one output contract.
//!
//! For the same rows and criteria all four return the same logical tuples;
//! they differ only in query count. The direct projection is the production
//! path, the others are the earlier alternatives, each kept behind its own
//! endpoint version.

use sqlx::PgPool;
use tracing::debug;

use crate::common::ServiceError;
use crate::domains::order::data::SimpleOrderData;
use crate::domains::order::models::order::Order;
use crate::domains::order::models::search::OrderSearch;

/// v1: entity graph with both relations force-resolved one query at a time
/// (1 + 2N queries for N orders).
pub async fn list_orders_entities(
    search: &OrderSearch,
    pool: &PgPool,
) -> Result<Vec<Order>, ServiceError> {
    let mut orders = Order::find_all(search, pool).await?;
    for order in &mut orders {
        order.load_member(pool).await?;
        order.load_delivery(pool).await?;
    }
    debug!(count = orders.len(), "listed orders (entity graph)");
    Ok(orders)
}

/// v2: same lazy load, with the per-order resolution cost isolated to the
/// mapping step (still 1 + 2N queries).
pub async fn list_orders_lazy(
    search: &OrderSearch,
    pool: &PgPool,
) -> Result<Vec<SimpleOrderData>, ServiceError> {
    let mut orders = Order::find_all(search, pool).await?;

    let mut result = Vec::with_capacity(orders.len());
    for order in &mut orders {
        order.load_member(pool).await?;
        order.load_delivery(pool).await?;
        result.push(SimpleOrderData::from_loaded_order(order)?);
    }
    Ok(result)
}

/// v3: single joined query; mapping is query-free.
pub async fn list_orders_joined(
    search: &OrderSearch,
    pool: &PgPool,
) -> Result<Vec<SimpleOrderData>, ServiceError> {
    let orders = Order::find_all_with_member_delivery(search, pool).await?;
    orders.iter().map(SimpleOrderData::from_loaded_order).collect()
}

/// v4: single query straight into the transfer object. Production path.
pub async fn list_orders_projected(
    search: &OrderSearch,
    pool: &PgPool,
) -> Result<Vec<SimpleOrderData>, ServiceError> {
    SimpleOrderData::find(search, pool).await
}
