//! Builder for pre-filled stores.

use crate::store::FieldStore;
use crate::types::FieldName;

/// Builder for a pre-filled `FieldStore`. Unset fields stay empty.
#[derive(Debug, Default)]
pub struct FieldStoreBuilder {
    store: FieldStore,
}

impl FieldStoreBuilder {
    /// Builder for an all-empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any field by name.
    pub fn field(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.store.set(field, value);
        self
    }

    /// Set the cardholder name.
    pub fn cardholder_name(self, value: impl Into<String>) -> Self {
        self.field(FieldName::CardholderName, value)
    }

    /// Set the card number.
    pub fn card_number(self, value: impl Into<String>) -> Self {
        self.field(FieldName::CardNumber, value)
    }

    /// Set the expiry month.
    pub fn exp_month(self, value: impl Into<String>) -> Self {
        self.field(FieldName::ExpMonth, value)
    }

    /// Set the expiry year.
    pub fn exp_year(self, value: impl Into<String>) -> Self {
        self.field(FieldName::ExpYear, value)
    }

    /// Set the security code.
    pub fn cvv(self, value: impl Into<String>) -> Self {
        self.field(FieldName::Cvv, value)
    }

    /// Finish and return the store.
    pub fn build(self) -> FieldStore {
        self.store
    }
}
