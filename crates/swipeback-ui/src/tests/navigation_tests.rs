use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Open(ScreenId),
    Close(ScreenId),
    Transition(ScreenTransition),
}

#[derive(Default)]
struct Log(Vec<Call>);

impl ScreenHost for Log {
    fn open(&mut self, screen: ScreenId) {
        self.0.push(Call::Open(screen));
    }

    fn close(&mut self, screen: ScreenId) {
        self.0.push(Call::Close(screen));
    }

    fn play_transition(&mut self, transition: ScreenTransition) {
        self.0.push(Call::Transition(transition));
    }
}

#[test]
fn open_plays_open_pair_after_host_open() {
    let mut navigator = ScreenNavigator::new(Log::default(), TransitionStyle::Slide);
    navigator.open_screen(ScreenId(1));
    assert_eq!(
        navigator.host().0,
        vec![
            Call::Open(ScreenId(1)),
            Call::Transition(TransitionStyle::Slide.open()),
        ]
    );
}

#[test]
fn closer_and_programmatic_close_are_identical() {
    let mut programmatic = ScreenNavigator::new(Log::default(), TransitionStyle::Plain);
    programmatic.close_screen(ScreenId(4));

    let mut gesture = ScreenNavigator::new(Log::default(), TransitionStyle::Plain);
    ScreenCloser::close_screen(&mut gesture, ScreenId(4));

    assert_eq!(programmatic.host().0, gesture.into_host().0);
    assert_eq!(
        programmatic.host().0,
        vec![
            Call::Close(ScreenId(4)),
            Call::Transition(TransitionStyle::Plain.close()),
        ]
    );
}
