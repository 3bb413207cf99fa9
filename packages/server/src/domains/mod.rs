// Domain modules - each owns its models, transfer objects, and actions

pub mod member;
pub mod order;
