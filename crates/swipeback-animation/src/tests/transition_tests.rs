use super::*;

#[test]
fn slide_open_enters_from_the_right_and_pushes_previous_left() {
    let open = TransitionStyle::Slide.open();

    let start = open.enter.layer_at(0, 900.0);
    let end = open.enter.layer_at(300, 900.0);
    assert_eq!(start.translation_x, 900.0);
    assert_eq!(end.translation_x, 0.0);

    let pushed = open.exit.layer_at(300, 900.0);
    assert!((pushed.translation_x + 300.0).abs() < 1e-3);
    assert!((pushed.alpha - 0.7).abs() < 1e-6);
}

#[test]
fn slide_close_reverses_the_push() {
    let close = TransitionStyle::Slide.close();
    let revealed = close.enter.layer_at(0, 900.0);
    assert!((revealed.translation_x + 300.0).abs() < 1e-3);

    let settled = close.enter.layer_at(300, 900.0);
    assert_eq!(settled.translation_x, 0.0);
    assert!((settled.alpha - 1.0).abs() < 1e-6);

    assert_eq!(close.exit.layer_at(300, 900.0).translation_x, -900.0);
}

#[test]
fn plain_style_fades() {
    let open = TransitionStyle::Plain.open();
    assert_eq!(open.enter.layer_at(0, 100.0).alpha, 0.0);
    assert_eq!(open.enter.layer_at(300, 100.0).alpha, 1.0);
    assert_eq!(TransitionStyle::Plain.close().exit.layer_at(300, 100.0).alpha, 0.0);
}

#[test]
fn transition_finishes_with_both_halves() {
    let open = TransitionStyle::default().open();
    assert!(!open.is_finished(299));
    assert!(open.is_finished(300));
}
