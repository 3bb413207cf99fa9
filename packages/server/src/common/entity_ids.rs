//! Typed ID aliases for the domain entities.
//!
//! ```rust,ignore
//! use shop_core::common::{MemberId, OrderId};
//!
//! // Incompatible types - the compiler prevents mixing them up
//! let member_id: MemberId = MemberId::new();
//! let order_id: OrderId = OrderId::new();
//! ```

pub use super::id::Id;

/// Marker type for Member entities.
pub struct Member;

/// Marker type for Order entities.
pub struct Order;

/// Marker type for Delivery entities.
pub struct Delivery;

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Order entities.
pub type OrderId = Id<Order>;

/// Typed ID for Delivery entities.
pub type DeliveryId = Id<Delivery>;
