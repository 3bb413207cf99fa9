//! Simple-order list endpoints - one per query strategy.
//!
//! All four accept the same filter (`?status=&member_name=`) and return the
//! same logical rows; they differ only in how many queries they issue.

use axum::extract::{Extension, Query};
use axum::Json;

use crate::common::ServiceError;
use crate::domains::order::actions;
use crate::domains::order::data::SimpleOrderData;
use crate::domains::order::models::order::Order;
use crate::domains::order::models::search::OrderSearch;
use crate::server::app::AppState;

/// GET /api/v1/simple-orders - full entity graph, relations resolved one
/// query at a time.
pub async fn orders_v1(
    Extension(state): Extension<AppState>,
    Query(search): Query<OrderSearch>,
) -> Result<Json<Vec<Order>>, ServiceError> {
    let orders = actions::list_orders_entities(&search, &state.db_pool).await?;
    Ok(Json(orders))
}

/// GET /api/v2/simple-orders - lazy graph mapped to transfer objects.
pub async fn orders_v2(
    Extension(state): Extension<AppState>,
    Query(search): Query<OrderSearch>,
) -> Result<Json<Vec<SimpleOrderData>>, ServiceError> {
    let orders = actions::list_orders_lazy(&search, &state.db_pool).await?;
    Ok(Json(orders))
}

/// GET /api/v3/simple-orders - single joined query.
pub async fn orders_v3(
    Extension(state): Extension<AppState>,
    Query(search): Query<OrderSearch>,
) -> Result<Json<Vec<SimpleOrderData>>, ServiceError> {
    let orders = actions::list_orders_joined(&search, &state.db_pool).await?;
    Ok(Json(orders))
}

/// GET /api/v4/simple-orders - direct projection. Production path.
pub async fn orders_v4(
    Extension(state): Extension<AppState>,
    Query(search): Query<OrderSearch>,
) -> Result<Json<Vec<SimpleOrderData>>, ServiceError> {
    let orders = actions::list_orders_projected(&search, &state.db_pool).await?;
    Ok(Json(orders))
}
