//! Order domain actions.

mod queries;

pub use queries::{
    list_orders_entities, list_orders_joined, list_orders_lazy, list_orders_projected,
};
