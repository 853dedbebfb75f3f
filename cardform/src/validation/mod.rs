// cardform/src/validation/mod.rs
//! Synchronous form validation.

use crate::store::FieldStore;
use crate::types::ErrorKey;

mod error_map;
pub use error_map::ErrorMap;

pub mod rules;

/// Validate every slot of the store independently and collect the failures.
///
/// Pure and total: equal stores always produce equal maps, and an empty map
/// means the whole form is valid.
pub fn validate(store: &FieldStore) -> ErrorMap {
    let checks = [
        (
            ErrorKey::CardholderName,
            rules::cardholder_name(store.cardholder_name()),
        ),
        (ErrorKey::CardNumber, rules::card_number(store.card_number())),
        (
            ErrorKey::ExpDate,
            rules::expiry(store.exp_month(), store.exp_year()),
        ),
        (ErrorKey::Cvv, rules::cvv(store.cvv())),
    ];

    checks
        .into_iter()
        .filter_map(|(key, check)| check.map(|err| (key, err)))
        .collect()
}

/// Convenience: `validate(store).is_empty()`.
pub fn is_valid(store: &FieldStore) -> bool {
    validate(store).is_empty()
}
