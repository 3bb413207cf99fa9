//! Shared value objects.

use serde::{Deserialize, Serialize};

/// Postal address value object.
///
/// Embedded as columns on whichever table owns it (members, deliveries);
/// it has no identity or lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: Some(city.into()),
            street: Some(street.into()),
            zipcode: Some(zipcode.into()),
        }
    }
}
