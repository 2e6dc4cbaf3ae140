use super::*;

#[test]
fn step_interpolates_linearly_and_clamps() {
    let run = AnimationRun::new(0, -400, 300);
    assert_eq!(run.step(0), 0);
    assert_eq!(run.step(100), -133);
    assert_eq!(run.step(200), -266);
    assert_eq!(run.step(300), -400);
    for k in [0, 1, 50, 10_000] {
        assert_eq!(run.step(300 + k), run.step(300));
    }
}

#[test]
fn is_complete_from_duration_onward() {
    let run = AnimationRun::new(-520, -1000, 300);
    assert!(!run.is_complete(299));
    assert!(run.is_complete(300));
    assert!(run.is_complete(301));
}

#[test]
fn completion_fires_exactly_once() {
    let mut animator = ScrollAnimator::new();
    animator.start(0, -400, 300);

    let frames: Vec<Option<ScrollFrame>> = (0..4).map(|_| animator.advance(100)).collect();
    assert_eq!(
        frames,
        vec![
            Some(ScrollFrame {
                offset: -133,
                finished: false,
            }),
            Some(ScrollFrame {
                offset: -266,
                finished: false,
            }),
            Some(ScrollFrame {
                offset: -400,
                finished: true,
            }),
            None,
        ]
    );
    assert!(!animator.is_running());
}

#[test]
fn overshooting_frame_lands_on_exact_target() {
    let mut animator = ScrollAnimator::new();
    animator.start(-300, 0, 300);
    assert_eq!(
        animator.advance(1_000),
        Some(ScrollFrame {
            offset: 0,
            finished: true,
        })
    );
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let mut animator = ScrollAnimator::new();
    animator.start(-10, 0, 0);
    assert_eq!(
        animator.advance(0),
        Some(ScrollFrame {
            offset: 0,
            finished: true,
        })
    );
}

#[test]
fn starting_a_new_run_replaces_the_active_one() {
    let mut animator = ScrollAnimator::new();
    animator.start(0, -400, 300);
    animator.advance(150);
    animator.start(-200, 0, 300);

    assert_eq!(animator.target(), Some(0));
    let run = animator.run().expect("run active");
    assert_eq!(run.start_offset(), -200);
    assert_eq!(run.elapsed_ms(), 0);
}

#[test]
fn abort_drops_run_without_completion() {
    let mut animator = ScrollAnimator::new();
    animator.start(0, -400, 300);
    assert!(animator.abort().is_some());
    assert_eq!(animator.advance(300), None);
}
