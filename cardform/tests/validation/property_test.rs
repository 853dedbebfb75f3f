#[path = "../common/mod.rs"]
mod common;

use cardform::controller::FormController;
use cardform::store::FieldStore;
use cardform::utils::{is_blank, is_digits, strip_whitespace};
use cardform::validation::validate;
use cardform::{ErrorKey, FieldError, SessionState};
use proptest::prelude::*;

fn store_strategy() -> impl Strategy<Value = FieldStore> {
    (
        prop_oneof!["[A-Za-z ]{0,10}", Just(String::new())],
        prop_oneof!["[0-9]{16}", "[0-9 ]{0,20}", "[0-9a-z ]{0,18}"],
        "[0-9 a]{0,3}",
        "[0-9 ]{0,3}",
        prop_oneof!["[0-9]{3}", "[0-9 x]{0,4}"],
    )
        .prop_map(|(name, number, month, year, cvv)| {
            FieldStore::builder()
                .cardholder_name(name)
                .card_number(number)
                .exp_month(month)
                .exp_year(year)
                .cvv(cvv)
                .build()
        })
}

fn all_rules_pass(s: &FieldStore) -> bool {
    !is_blank(s.cardholder_name())
        && !is_blank(s.card_number())
        && is_digits(&strip_whitespace(s.card_number()), 16)
        && !is_blank(s.exp_month())
        && !is_blank(s.exp_year())
        && is_digits(s.exp_month(), 2)
        && is_digits(s.exp_year(), 2)
        && !is_blank(s.cvv())
        && is_digits(s.cvv(), 3)
}

proptest! {
    #[test]
    fn submit_transitions_iff_every_rule_passes(store in store_strategy()) {
        let mut form = common::filled_controller(&store);
        let state = form.submit();
        prop_assert_eq!(state == SessionState::Submitted, all_rules_pass(&store));
        prop_assert_eq!(form.errors().is_empty(), all_rules_pass(&store));
    }

    #[test]
    fn errors_equal_validator_output_after_submit(store in store_strategy()) {
        let mut form = FormController::with_store(store.clone());
        form.submit();
        prop_assert_eq!(form.errors(), &validate(&store));
    }

    #[test]
    fn whitespace_number_never_format_error(ws in "[ \t]{1,8}") {
        let store = common::fixtures::store_with_number(&ws);
        let errors = validate(&store);
        prop_assert_eq!(errors.get(ErrorKey::CardNumber), Some(FieldError::Blank));
    }
}
