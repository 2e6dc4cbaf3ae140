use super::*;

const WIDTH: Option<i32> = Some(1000);

fn intercept_all(gesture: &mut EdgeSwipeGesture, samples: &[PointerSample]) -> Vec<bool> {
    samples
        .iter()
        .map(|sample| gesture.intercept(*sample, WIDTH))
        .collect()
}

#[test]
fn zone_is_a_tenth_of_the_width() {
    assert_eq!(edge_activation_zone(Some(1000)), 100);
    assert_eq!(edge_activation_zone(Some(1079)), 107);
    assert_eq!(edge_activation_zone(None), 0);
    assert_eq!(edge_activation_zone(Some(-50)), 0);
}

#[test]
fn down_is_never_claimed() {
    let mut gesture = EdgeSwipeGesture::new();
    assert!(!gesture.intercept(PointerSample::down(0, 0), WIDTH));
    assert_eq!(gesture.phase(), GesturePhase::Tracking);
}

#[test]
fn horizontal_move_from_edge_is_claimed_for_rest_of_sequence() {
    let mut gesture = EdgeSwipeGesture::new();
    let decisions = intercept_all(
        &mut gesture,
        &[
            PointerSample::down(50, 300),
            PointerSample::moved(20, 300),
            PointerSample::moved(20, 600),
            PointerSample::moved(10, 300),
        ],
    );
    assert_eq!(decisions, vec![false, true, true, true]);
    assert!(gesture.is_claimed());
    assert!(gesture.state().claimed);
}

#[test]
fn down_outside_zone_is_never_claimed() {
    let mut gesture = EdgeSwipeGesture::new();
    for down_x in [100, 101, 500, 999] {
        let decisions = intercept_all(
            &mut gesture,
            &[
                PointerSample::down(down_x, 0),
                PointerSample::moved(down_x - 300, 0),
                PointerSample::moved(down_x + 400, 1),
                PointerSample::up(down_x, 0),
            ],
        );
        assert!(decisions.iter().all(|claimed| !claimed), "down at {down_x}");
    }
}

#[test]
fn vertical_drag_is_left_to_content_until_it_turns_horizontal() {
    let mut gesture = EdgeSwipeGesture::new();
    let decisions = intercept_all(
        &mut gesture,
        &[
            PointerSample::down(10, 100),
            PointerSample::moved(12, 140),
            PointerSample::moved(14, 180),
            PointerSample::moved(40, 185),
        ],
    );
    assert_eq!(decisions, vec![false, false, false, true]);
}

#[test]
fn diagonal_tie_is_not_claimed() {
    let mut gesture = EdgeSwipeGesture::new();
    let decisions = intercept_all(
        &mut gesture,
        &[PointerSample::down(10, 100), PointerSample::moved(30, 120)],
    );
    assert_eq!(decisions, vec![false, false]);
}

#[test]
fn unmeasured_surface_never_claims() {
    let mut gesture = EdgeSwipeGesture::new();
    assert!(!gesture.intercept(PointerSample::down(0, 0), None));
    assert!(!gesture.intercept(PointerSample::moved(-200, 0), None));
    assert_eq!(gesture.phase(), GesturePhase::Tracking);
}

#[test]
fn identical_samples_are_zero_delta_noops() {
    let mut gesture = EdgeSwipeGesture::new();
    let decisions = intercept_all(
        &mut gesture,
        &[PointerSample::down(10, 10), PointerSample::moved(10, 10)],
    );
    assert_eq!(decisions, vec![false, false]);
    assert_eq!(gesture.state().last_x, 10);
}

#[test]
fn move_without_down_starts_tracking_at_that_sample() {
    let mut gesture = EdgeSwipeGesture::new();
    assert!(!gesture.intercept(PointerSample::moved(30, 40), WIDTH));
    assert_eq!(
        gesture.state(),
        GestureState {
            down_x: 30,
            last_x: 30,
            last_y: 40,
            claimed: false,
        }
    );
    assert!(gesture.intercept(PointerSample::moved(0, 40), WIDTH));
}

#[test]
fn up_and_cancel_reset_unclaimed_sequences() {
    let mut gesture = EdgeSwipeGesture::new();
    gesture.intercept(PointerSample::down(10, 10), WIDTH);
    assert!(!gesture.intercept(PointerSample::up(10, 10), WIDTH));
    assert_eq!(gesture.phase(), GesturePhase::Idle);

    gesture.intercept(PointerSample::down(10, 10), WIDTH);
    gesture.intercept(PointerSample::moved(0, 10), WIDTH);
    assert!(!gesture.intercept(PointerSample::cancel(0, 10), WIDTH));
    assert_eq!(gesture.phase(), GesturePhase::Idle);
    assert_eq!(gesture.state(), GestureState::default());
}

#[test]
fn claiming_delta_is_applied_by_handling_phase() {
    let mut gesture = EdgeSwipeGesture::new();
    gesture.intercept(PointerSample::down(50, 0), WIDTH);
    assert!(gesture.intercept(PointerSample::moved(20, 0), WIDTH));

    let update = gesture.handle(PointerSample::moved(20, 0), WIDTH, 0);
    assert_eq!(update, GestureUpdate::Dragged { offset: -30 });

    let update = gesture.handle(PointerSample::moved(-470, 0), WIDTH, -30);
    assert_eq!(update, GestureUpdate::Dragged { offset: -520 });
}

#[test]
fn handling_without_interception_runs_the_same_claim_test() {
    let mut gesture = EdgeSwipeGesture::new();
    assert_eq!(
        gesture.handle(PointerSample::down(50, 0), WIDTH, 0),
        GestureUpdate::Tracking
    );
    assert_eq!(
        gesture.handle(PointerSample::moved(50, 30), WIDTH, 0),
        GestureUpdate::Tracking
    );
    assert_eq!(
        gesture.handle(PointerSample::moved(20, 30), WIDTH, 0),
        GestureUpdate::Dragged { offset: -30 }
    );
}

#[test]
fn drag_is_clamped_at_rest_and_fully_off_screen() {
    let mut gesture = EdgeSwipeGesture::new();
    gesture.handle(PointerSample::down(50, 0), WIDTH, 0);
    assert_eq!(
        gesture.handle(PointerSample::moved(40, 0), WIDTH, 0),
        GestureUpdate::Dragged { offset: -10 }
    );
    assert_eq!(
        gesture.handle(PointerSample::moved(90, 0), WIDTH, -10),
        GestureUpdate::Dragged { offset: 0 }
    );
    assert_eq!(
        gesture.handle(PointerSample::moved(-2000, 0), WIDTH, 0),
        GestureUpdate::Dragged { offset: -1000 }
    );
}

#[test]
fn release_decides_outcome_at_half_width() {
    assert_eq!(SettleOutcome::decide(0, 1000), SettleOutcome::ReturnToRest);
    assert_eq!(SettleOutcome::decide(-499, 1000), SettleOutcome::ReturnToRest);
    assert_eq!(SettleOutcome::decide(-500, 1000), SettleOutcome::FlyOffDismiss);
    assert_eq!(SettleOutcome::decide(-1000, 1000), SettleOutcome::FlyOffDismiss);
    assert_eq!(SettleOutcome::FlyOffDismiss.target_offset(1000), -1000);
    assert_eq!(SettleOutcome::ReturnToRest.target_offset(1000), 0);

    for offset in -1000..=0 {
        let expected = if -offset < 500 {
            SettleOutcome::ReturnToRest
        } else {
            SettleOutcome::FlyOffDismiss
        };
        assert_eq!(SettleOutcome::decide(offset, 1000), expected);
    }
}

#[test]
fn claimed_release_reports_outcome_and_resets() {
    let mut gesture = EdgeSwipeGesture::new();
    gesture.handle(PointerSample::down(50, 0), WIDTH, 0);
    gesture.handle(PointerSample::moved(20, 0), WIDTH, 0);

    assert!(gesture.intercept(PointerSample::up(20, 0), WIDTH));
    assert_eq!(
        gesture.handle(PointerSample::up(20, 0), WIDTH, -520),
        GestureUpdate::Released {
            offset: -520,
            outcome: SettleOutcome::FlyOffDismiss,
        }
    );
    assert_eq!(gesture.phase(), GesturePhase::Idle);
}

#[test]
fn unclaimed_release_is_ignored_and_cancel_never_settles() {
    let mut gesture = EdgeSwipeGesture::new();
    gesture.handle(PointerSample::down(500, 0), WIDTH, 0);
    assert_eq!(
        gesture.handle(PointerSample::up(500, 0), WIDTH, 0),
        GestureUpdate::Ignored
    );

    gesture.handle(PointerSample::down(50, 0), WIDTH, 0);
    gesture.handle(PointerSample::moved(0, 0), WIDTH, 0);
    assert_eq!(
        gesture.handle(PointerSample::cancel(0, 0), WIDTH, -50),
        GestureUpdate::Cancelled
    );
    assert_eq!(gesture.phase(), GesturePhase::Idle);
}
