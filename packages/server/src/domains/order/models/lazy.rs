//! Explicitly-loaded relation cell.

use serde::{Serialize, Serializer};

use crate::common::ServiceError;

/// A relation that starts unloaded and must be resolved explicitly while
/// the caller still has database access.
///
/// Reading an unloaded cell is a programming error
/// (`ServiceError::LazyResolution`), not a user-facing condition - the caller
/// picked a query mode that never resolved the relation.
#[derive(Debug, Clone, Default)]
pub enum Lazy<T> {
    #[default]
    Unloaded,
    Loaded(T),
}

impl<T> Lazy<T> {
    /// Wrap an already-resolved value.
    pub fn loaded(value: T) -> Self {
        Self::Loaded(value)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The resolved value, or `LazyResolution` if nothing loaded it.
    pub fn get(&self, relation: &'static str) -> Result<&T, ServiceError> {
        match self {
            Self::Loaded(value) => Ok(value),
            Self::Unloaded => Err(ServiceError::LazyResolution(relation)),
        }
    }
}

/// Unloaded relations serialize as `null`, loaded ones as the value itself.
impl<T: Serialize> Serialize for Lazy<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Loaded(value) => value.serialize(serializer),
            Self::Unloaded => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_unloaded_is_a_lazy_relation_error() {
        let cell: Lazy<String> = Lazy::Unloaded;
        match cell.get("member") {
            Err(ServiceError::LazyResolution(relation)) => assert_eq!(relation, "member"),
            other => panic!("expected LazyResolution, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn get_on_loaded_returns_the_value() {
        let cell = Lazy::loaded("kim".to_string());
        assert_eq!(cell.get("member").unwrap(), "kim");
    }

    #[test]
    fn unloaded_serializes_as_null() {
        let cell: Lazy<String> = Lazy::Unloaded;
        assert_eq!(serde_json::to_value(&cell).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn loaded_serializes_as_the_value() {
        let cell = Lazy::loaded(42);
        assert_eq!(serde_json::to_value(&cell).unwrap(), serde_json::json!(42));
    }
}
