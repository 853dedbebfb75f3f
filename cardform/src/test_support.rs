//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common form setup so tests across the crate
//! and tests/ directory can reuse the same fixtures.
#![allow(dead_code)]

use crate::controller::FormController;
use crate::store::FieldStore;

/// A store that passes every rule.
#[doc(hidden)]
pub fn valid_store() -> FieldStore {
    FieldStore::builder()
        .cardholder_name("Jane Appleseed")
        .card_number("1234567890123456")
        .exp_month("04")
        .exp_year("25")
        .cvv("123")
        .build()
}

/// Copy every value of `store` into the form through `set_field`, the same
/// path keystrokes take.
#[doc(hidden)]
pub fn fill(form: &mut FormController, store: &FieldStore) {
    for (field, value) in store.iter() {
        form.set_field(field, value);
    }
}

/// Convenience: a fresh controller filled with `store` via `fill`.
#[doc(hidden)]
pub fn filled_controller(store: &FieldStore) -> FormController {
    let mut form = FormController::new();
    fill(&mut form, store);
    form
}
