//! Order list filter criteria.

use serde::Deserialize;

use super::order::OrderStatus;

/// Filter for order listing: exact status match and/or member-name substring
/// match, both optional. Deserializes straight from query parameters
/// (`?status=ORDERED&member_name=kim`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderSearch {
    pub status: Option<OrderStatus>,
    pub member_name: Option<String>,
}

impl OrderSearch {
    /// Status bind parameter for the shared `$1::text IS NULL OR o.status = $1`
    /// predicate.
    pub fn status_param(&self) -> Option<&'static str> {
        self.status.map(OrderStatus::as_str)
    }

    /// Member-name bind parameter for the shared
    /// `$2::text IS NULL OR m.name LIKE '%' || $2 || '%'` predicate.
    pub fn name_param(&self) -> Option<&str> {
        self.member_name.as_deref()
    }
}
