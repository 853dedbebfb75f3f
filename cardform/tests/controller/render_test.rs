#[path = "../common/mod.rs"]
mod common;

use cardform::controller::FormController;
use cardform::render::{RecordingRenderer, TextRenderer};
use cardform::{ErrorKey, FieldName, SessionState};

#[test]
fn frames_follow_the_session() {
    let mut form = FormController::new();
    let mut rec = RecordingRenderer::new();

    form.render(&mut rec).unwrap();
    form.set_field(FieldName::ExpMonth, "4");
    form.submit();
    form.render(&mut rec).unwrap();
    common::fill(&mut form, &common::valid_store());
    form.submit();
    form.render(&mut rec).unwrap();

    let states: Vec<_> = rec.frames.iter().map(|f| f.state).collect();
    assert_eq!(
        states,
        vec![
            SessionState::Editing,
            SessionState::Editing,
            SessionState::Submitted
        ]
    );
    assert_eq!(rec.frames[1].preview.expiry(), "4/00");
    assert!(rec.frames[1].errors.contains(ErrorKey::ExpDate));
}

#[test]
fn view_flags_both_expiry_inputs() {
    let mut form = FormController::new();
    form.set_field(FieldName::ExpMonth, "04");
    form.submit();
    let view = form.view();
    assert!(view.has_error(FieldName::ExpMonth));
    assert!(view.has_error(FieldName::ExpYear));
}

#[test]
fn text_output_is_utf8_lines() {
    let form = common::filled_controller(&common::valid_store());
    let mut r = TextRenderer::new(Vec::new());
    form.render(&mut r).unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();
    assert!(out.lines().any(|l| l == "[front] 1234 5678 9012 3456"));
    assert!(out.contains("\"Jane Appleseed\""));
}
