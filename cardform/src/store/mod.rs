// cardform/src/store/mod.rs
//! Raw field values for one form session.

use crate::types::FieldName;

pub mod builder;
pub use builder::FieldStoreBuilder;

/// The five raw values exactly as typed. Nothing here is ever rejected,
/// trimmed or canonicalized in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldStore {
    cardholder_name: String,
    card_number: String,
    exp_month: String,
    exp_year: String,
    cvv: String,
}

impl FieldStore {
    /// An empty store: every field is the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a `FieldStoreBuilder`.
    pub fn builder() -> FieldStoreBuilder {
        FieldStoreBuilder::new()
    }

    /// Raw value of one field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::CardholderName => &self.cardholder_name,
            FieldName::CardNumber => &self.card_number,
            FieldName::ExpMonth => &self.exp_month,
            FieldName::ExpYear => &self.exp_year,
            FieldName::Cvv => &self.cvv,
        }
    }

    /// Overwrite one field with new raw text.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::CardholderName => &mut self.cardholder_name,
            FieldName::CardNumber => &mut self.card_number,
            FieldName::ExpMonth => &mut self.exp_month,
            FieldName::ExpYear => &mut self.exp_year,
            FieldName::Cvv => &mut self.cvv,
        };
        *slot = value.into();
    }

    /// Raw cardholder name.
    pub fn cardholder_name(&self) -> &str {
        &self.cardholder_name
    }
    /// Raw card number, spaces as typed.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }
    /// Raw expiry month.
    pub fn exp_month(&self) -> &str {
        &self.exp_month
    }
    /// Raw expiry year.
    pub fn exp_year(&self) -> &str {
        &self.exp_year
    }
    /// Raw security code.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Iterate `(field, raw value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
