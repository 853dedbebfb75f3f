//! Preview placeholder configuration

use crate::constants::{
    PLACEHOLDER_CARDHOLDER_NAME, PLACEHOLDER_CARD_NUMBER, PLACEHOLDER_CVV, PLACEHOLDER_EXP_MONTH,
    PLACEHOLDER_EXP_YEAR,
};

/// Text the card mock shows for a field whose raw value is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PreviewConfig {
    /// Shown for an empty card number.
    pub card_number: String,
    /// Shown for an empty cardholder name.
    pub cardholder_name: String,
    /// Shown for an empty expiry month.
    pub exp_month: String,
    /// Shown for an empty expiry year.
    pub exp_year: String,
    /// Shown for an empty security code.
    pub cvv: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            card_number: PLACEHOLDER_CARD_NUMBER.to_string(),
            cardholder_name: PLACEHOLDER_CARDHOLDER_NAME.to_string(),
            exp_month: PLACEHOLDER_EXP_MONTH.to_string(),
            exp_year: PLACEHOLDER_EXP_YEAR.to_string(),
            cvv: PLACEHOLDER_CVV.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Replace the cardholder name placeholder.
    pub fn with_cardholder_name(mut self, placeholder: impl Into<String>) -> Self {
        self.cardholder_name = placeholder.into();
        self
    }

    /// Replace the card number placeholder.
    pub fn with_card_number(mut self, placeholder: impl Into<String>) -> Self {
        self.card_number = placeholder.into();
        self
    }
}
