use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::common::{Address, DeliveryId, MemberId, OrderId, ServiceError};
use crate::domains::member::models::member::Member;
use crate::domains::order::models::delivery::Delivery;
use crate::domains::order::models::lazy::Lazy;
use crate::domains::order::models::search::OrderSearch;

/// Order lifecycle status, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Ordered,
    Cancelled,
}

impl OrderStatus {
    /// The stored/wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordered => "ORDERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Order row model.
///
/// `member` and `delivery` are relation cells: `find_all` leaves them
/// unloaded, `find_all_with_member_delivery` returns them resolved. An
/// unloaded cell must go through `load_member`/`load_delivery` before
/// anything reads it.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub member_id: MemberId,
    pub delivery_id: DeliveryId,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,

    #[sqlx(skip)]
    pub member: Lazy<Member>,
    #[sqlx(skip)]
    pub delivery: Lazy<Delivery>,
}

impl Order {
    /// Orders matching `search`, relations left unloaded.
    ///
    /// One query for the orders themselves; every relation resolved after
    /// this costs one more query per order.
    pub async fn find_all(search: &OrderSearch, pool: &PgPool) -> Result<Vec<Self>, ServiceError> {
        sqlx::query_as::<_, Self>(
            "SELECT o.id, o.member_id, o.delivery_id, o.status, o.order_date
             FROM orders o
             JOIN members m ON m.id = o.member_id
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

    /// Orders matching `search` with member and delivery resolved in a
    /// single three-way join.
    pub async fn find_all_with_member_delivery(
        search: &OrderSearch,
        pool: &PgPool,
    ) -> Result<Vec<Self>, ServiceError> {
        let rows = sqlx::query(
            "SELECT o.id, o.member_id, o.delivery_id, o.status, o.order_date,
                    m.name AS member_name, m.city AS member_city,
                    m.street AS member_street, m.zipcode AS member_zipcode,
                    m.created_at AS member_created_at,
                    d.city AS delivery_city, d.street AS delivery_street,
                    d.zipcode AS delivery_zipcode
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
        .await?;

        rows.into_iter().map(Self::from_joined_row).collect()
    }

    // Aliased columns keep the two embedded addresses apart.
    fn from_joined_row(row: PgRow) -> Result<Self, ServiceError> {
        let member = Member {
            id: row.try_get("member_id")?,
            name: row.try_get("member_name")?,
            address: Address {
                city: row.try_get("member_city")?,
                street: row.try_get("member_street")?,
                zipcode: row.try_get("member_zipcode")?,
            },
            created_at: row.try_get("member_created_at")?,
        };

        let delivery = Delivery {
            id: row.try_get("delivery_id")?,
            address: Address {
                city: row.try_get("delivery_city")?,
                street: row.try_get("delivery_street")?,
                zipcode: row.try_get("delivery_zipcode")?,
            },
        };

        Ok(Self {
            id: row.try_get("id")?,
            member_id: row.try_get("member_id")?,
            delivery_id: row.try_get("delivery_id")?,
            status: row.try_get("status")?,
            order_date: row.try_get("order_date")?,
            member: Lazy::loaded(member),
            delivery: Lazy::loaded(delivery),
        })
    }

    /// Resolve the member relation (one query) unless already loaded.
    pub async fn load_member(&mut self, pool: &PgPool) -> Result<&Member, ServiceError> {
        if !self.member.is_loaded() {
            let member = Member::find_by_id(self.member_id, pool)
                .await?
                .ok_or_else(|| ServiceError::not_found("member", self.member_id))?;
            self.member = Lazy::loaded(member);
        }
        self.member.get("member")
    }

    /// Resolve the delivery relation (one query) unless already loaded.
    pub async fn load_delivery(&mut self, pool: &PgPool) -> Result<&Delivery, ServiceError> {
        if !self.delivery.is_loaded() {
            let delivery = Delivery::find_by_id(self.delivery_id, pool)
                .await?
                .ok_or_else(|| ServiceError::not_found("delivery", self.delivery_id))?;
            self.delivery = Lazy::loaded(delivery);
        }
        self.delivery.get("delivery")
    }

    /// Insert an order row (fixtures; order placement is not part of this
    /// service)
    pub async fn insert(&self, pool: &PgPool) -> Result<Self, ServiceError> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO orders (id, member_id, delivery_id, status, order_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(self.id)
        .bind(self.member_id)
        .bind(self.delivery_id)
        .bind(self.status)
        .bind(self.order_date)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
