#[path = "../common/mod.rs"]
mod common;

use cardform::controller::FormController;
use cardform::preview::{CardPreview, PreviewConfig};
use cardform::store::FieldStore;
use cardform::FieldName;

#[test]
fn empty_number_uses_zero_placeholder() {
    let form = FormController::new();
    assert_eq!(form.preview().number, "0000 0000 0000 0000");
}

#[test]
fn preview_follows_each_keystroke() {
    let mut form = FormController::new();
    let mut typed = String::new();
    for c in "12345".chars() {
        typed.push(c);
        form.set_field(FieldName::CardNumber, typed.clone());
    }
    assert_eq!(form.preview().number, "1234 5");

    form.set_field(FieldName::CardNumber, "");
    assert_eq!(form.preview().number, "0000 0000 0000 0000");
}

#[test]
fn controller_uses_its_preview_config() {
    let config = PreviewConfig::default().with_cardholder_name("CARDHOLDER");
    let form = FormController::new().with_preview_config(config.clone());
    assert_eq!(form.preview_config(), &config);
    assert_eq!(FormController::new().preview_config(), &PreviewConfig::default());
    assert_eq!(form.preview().holder, "CARDHOLDER");
    assert_eq!(
        form.preview(),
        CardPreview::from_store(&FieldStore::new(), &config)
    );
}

#[test]
fn submitted_preview_still_mirrors_fields() {
    let mut form = common::filled_controller(&common::valid_store());
    form.submit();
    let p = form.preview();
    assert_eq!(p.holder, "Jane Appleseed");
    assert_eq!(p.expiry(), "04/25");
    assert_eq!(p.cvv, "123");
}
