use std::cell::RefCell;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use swipeback_testing::{RecordingCloser, RecordingContent, TestScreen};
use swipeback_ui::{
    ContentRef, DismissalSurface, DrawScopeDefault, PointerSample, Size, SurfaceConfig,
};

fn drag_release_settle(c: &mut Criterion) {
    c.bench_function("drag_release_settle", |b| {
        b.iter(|| {
            let content: ContentRef = RecordingContent::consuming();
            let mut screen = TestScreen::new(1, content);
            let surface = Rc::new(RefCell::new(DismissalSurface::new(SurfaceConfig::default())));
            DismissalSurface::bind(&surface, &mut screen).expect("bind");
            surface.borrow_mut().set_size(1080, 1920);

            let mut surface = surface.borrow_mut();
            surface.dispatch_pointer(PointerSample::down(40, 900));
            for step in 1..=60 {
                surface.dispatch_pointer(PointerSample::moved(40 - step * 12, 900));
            }
            surface.dispatch_pointer(PointerSample::up(-680, 900));

            let mut closer = RecordingCloser::default();
            let mut scope = DrawScopeDefault::new(Size::new(1080.0, 1920.0));
            while surface.tick(16, &mut closer) {
                surface.paint(&mut scope);
            }
            closer.closed.len()
        });
    });
}

criterion_group!(benches, drag_release_settle);
criterion_main!(benches);
