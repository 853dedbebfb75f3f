#[path = "../common/mod.rs"]
mod common;

use cardform::store::FieldStore;
use cardform::validation::validate;
use cardform::{ErrorKey, FieldError};

#[test]
fn all_empty_reports_four_blank_slots() {
    let errors = validate(&FieldStore::new());
    assert_eq!(errors.len(), 4);
    for key in ["cardholderName", "cardNumber", "expDate", "cvv"] {
        let key: ErrorKey = key.parse().unwrap();
        assert_eq!(errors.message(key), Some("Can't be blank"));
    }
}

#[test]
fn fifteen_digit_number_is_a_format_error() {
    let errors = validate(&common::fixtures::store_with_number(
        common::fixtures::NUMBER_15_SPACED,
    ));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(ErrorKey::CardNumber),
        Some("Wrong format, numbers only")
    );
}

#[test]
fn complete_store_is_valid() {
    assert!(validate(&common::fixtures::complete_store()).is_empty());
}

#[test]
fn one_blank_expiry_half_blanks_the_pair() {
    let store = FieldStore::builder()
        .cardholder_name("x")
        .card_number(common::fixtures::NUMBER)
        .exp_month("ab")
        .exp_year("")
        .cvv("123")
        .build();
    let errors = validate(&store);
    assert_eq!(errors.get(ErrorKey::ExpDate), Some(FieldError::Blank));
    assert_eq!(errors.len(), 1);
}

#[test]
fn blank_beats_format_per_slot() {
    let store = FieldStore::builder()
        .cardholder_name("\t")
        .card_number("  ")
        .exp_month(" ")
        .exp_year(" ")
        .cvv("   ")
        .build();
    let errors = validate(&store);
    assert!(errors.iter().all(|(_, e)| e == FieldError::Blank));
    assert_eq!(errors.len(), 4);
}
