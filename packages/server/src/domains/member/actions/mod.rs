//! Member domain actions - each runs as a single unit of work.

mod queries;
mod register_member;
mod update_name;

pub use queries::{find_member, find_members};
pub use register_member::register_member;
pub use update_name::update_member_name;
