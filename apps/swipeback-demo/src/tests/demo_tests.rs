use super::*;

fn demo() -> DemoApp {
    DemoApp::new(1080, 1920, 1.0).expect("demo starts")
}

#[test]
fn main_button_opens_second_screen() {
    let mut app = demo();
    let (x, y) = app.main_button_center();
    let second = app.tap(x, y).expect("tap").expect("second screen opened");

    assert_eq!(app.shell().top(), Some(second));
    assert_eq!(app.shell().len(), 2);
}

#[test]
fn tap_outside_button_opens_nothing() {
    let mut app = demo();
    assert_eq!(app.tap(10, 10).expect("tap"), None);
    assert_eq!(app.shell().len(), 1);
}

#[test]
fn edge_swipe_dismisses_second_screen() {
    let mut app = demo();
    let second = app.open_second().expect("second opens");

    app.swipe(30, -810, 960);

    assert!(!app.shell().stack().contains(second));
    assert_eq!(app.shell().top(), Some(app.main_id()));
}

#[test]
fn pager_pages_without_triggering_dismissal() {
    let mut app = demo();
    let (id, pager) = app.open_pager(3).expect("pager opens");

    app.swipe(810, 270, 960);
    app.swipe(810, 270, 960);
    app.swipe(810, 270, 960);

    assert_eq!(pager.borrow().current_page(), 2);
    assert_eq!(app.shell().top(), Some(id));
    assert_eq!(app.shell().surface(id).expect("surface").borrow().offset(), 0);
}

#[test]
fn short_edge_swipe_on_pager_returns_and_keeps_page() {
    let mut app = demo();
    let (id, pager) = app.open_pager(3).expect("pager opens");
    app.swipe(810, 270, 960);

    app.swipe(20, -216, 960);

    assert!(app.shell().stack().contains(id));
    assert_eq!(pager.borrow().current_page(), 1);
    assert_eq!(app.shell().surface(id).expect("surface").borrow().offset(), 0);
}

#[test]
fn back_plays_same_close_as_swipe() {
    let mut app = demo();
    app.open_second().expect("second opens");
    app.back();
    let after_back = app.shell().transitions().last().copied();

    app.open_second().expect("second opens again");
    app.swipe(30, -810, 960);
    let after_swipe = app.shell().transitions().last().copied();

    assert_eq!(app.shell().len(), 1);
    assert_eq!(after_back, after_swipe);
}
