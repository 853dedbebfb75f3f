// cardform/src/preview/mod.rs
//! Live card mock data.

use crate::store::FieldStore;
use crate::utils::group_card_number;

mod config;
pub use config::PreviewConfig;

/// Display data for the live card mock. Built from raw values whether or
/// not they validate; only an empty raw value falls back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPreview {
    /// Grouped card number or its placeholder.
    pub number: String,
    /// Cardholder name or its placeholder.
    pub holder: String,
    /// Expiry month or its placeholder.
    pub exp_month: String,
    /// Expiry year or its placeholder.
    pub exp_year: String,
    /// Security code or its placeholder.
    pub cvv: String,
}

impl CardPreview {
    /// Derive the preview from raw values.
    pub fn from_store(store: &FieldStore, config: &PreviewConfig) -> Self {
        Self {
            number: match store.card_number() {
                "" => config.card_number.clone(),
                raw => group_card_number(raw),
            },
            holder: or_placeholder(store.cardholder_name(), &config.cardholder_name),
            exp_month: or_placeholder(store.exp_month(), &config.exp_month),
            exp_year: or_placeholder(store.exp_year(), &config.exp_year),
            cvv: or_placeholder(store.cvv(), &config.cvv),
        }
    }

    /// `MM/YY` as printed on the card front.
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.exp_month, self.exp_year)
    }
}

fn or_placeholder(raw: &str, placeholder: &str) -> String {
    let shown = if raw.is_empty() { placeholder } else { raw };
    shown.to_string()
}
