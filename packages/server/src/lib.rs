// Shop back-office - API core
//
// Members and orders for a small shop, exposed as versioned REST endpoints
// over PostgreSQL. Domains own their models, transfer objects, and actions;
// the server layer only wires HTTP.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
