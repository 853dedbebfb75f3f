#[path = "../common/mod.rs"]
mod common;

use cardform::controller::{FormController, FormEvent};
use cardform::{Error, SessionState};

fn run(form: &mut FormController, script: &str) -> SessionState {
    let mut state = form.state();
    for line in script.lines() {
        let event = FormEvent::parse_command(line).expect("command");
        state = form.dispatch(event);
    }
    state
}

#[test]
fn scripted_session_round_trip() {
    let mut form = FormController::new();
    let state = run(
        &mut form,
        "set cardholderName Jane Appleseed\n\
         set cardNumber 1234 5678 9012 3456\n\
         set expMonth 04\n\
         set expYear 25\n\
         set cvv 123\n\
         submit",
    );
    assert_eq!(state, SessionState::Submitted);
    assert_eq!(form.fields().cardholder_name(), "Jane Appleseed");
    assert_eq!(form.preview().number, common::fixtures::NUMBER_GROUPED);

    assert_eq!(run(&mut form, "continue"), SessionState::Editing);
}

#[test]
fn host_string_keys() {
    let mut form = FormController::new();
    form.set_field_by_name("expYear", "25").unwrap();
    assert_eq!(form.fields().exp_year(), "25");
    assert!(matches!(
        form.set_field_by_name("exp_year", "25"),
        Err(Error::UnknownField(_))
    ));
}
