//! Test fixtures for creating test data via the model methods.

use anyhow::Result;
use chrono::{DateTime, Utc};
use shop_core::common::{Address, DeliveryId, MemberId, OrderId};
use shop_core::domains::member::models::member::Member;
use shop_core::domains::order::models::delivery::Delivery;
use shop_core::domains::order::models::order::{Order, OrderStatus};
use sqlx::PgPool;

/// A fully-populated address.
pub fn address(city: &str, street: &str, zipcode: &str) -> Address {
    Address::new(city, street, zipcode)
}

/// Create a member directly through the model (bypasses the registration
/// action).
pub async fn create_test_member(pool: &PgPool, name: &str) -> Result<MemberId> {
    let member = Member {
        id: MemberId::new(),
        name: name.to_string(),
        address: address("Seoul", "Main", "12345"),
        created_at: Utc::now(),
    };

    let created = member.insert(pool).await?;
    Ok(created.id)
}

/// Create an order with its delivery.
pub async fn create_test_order(
    pool: &PgPool,
    member_id: MemberId,
    status: OrderStatus,
    order_date: DateTime<Utc>,
    delivery_address: Address,
) -> Result<OrderId> {
    let delivery = Delivery {
        id: DeliveryId::new(),
        address: delivery_address,
    }
    .insert(pool)
    .await?;

    let order = Order {
        id: OrderId::new(),
        member_id,
        delivery_id: delivery.id,
        status,
        order_date,
        member: Default::default(),
        delivery: Default::default(),
    }
    .insert(pool)
    .await?;

    Ok(order.id)
}
