// cardform/src/validation/error_map.rs

use std::collections::BTreeMap;

use crate::error::FieldError;
use crate::types::{ErrorKey, FieldName};

/// Failing slots and why. A missing key means that slot validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ErrorMap(BTreeMap<ErrorKey, FieldError>);

impl ErrorMap {
    /// Empty map: every slot valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure recorded for a slot.
    pub fn get(&self, key: ErrorKey) -> Option<FieldError> {
        self.0.get(&key).copied()
    }

    /// User-facing message for a failing slot.
    pub fn message(&self, key: ErrorKey) -> Option<&'static str> {
        self.get(key).map(|e| e.message())
    }

    /// True when the slot failed.
    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Whether the given input should render with the error style.
    pub fn flags(&self, field: FieldName) -> bool {
        self.contains(field.error_key())
    }

    /// Number of failing slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All slots valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate failing slots in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, FieldError)> + '_ {
        self.0.iter().map(|(k, e)| (*k, *e))
    }
}

impl FromIterator<(ErrorKey, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ErrorKey, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
