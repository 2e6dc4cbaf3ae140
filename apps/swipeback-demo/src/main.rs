use swipeback_demo::DemoApp;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipeback Headless Demo ===");
    println!("Scripted session: open a screen, swipe it away, page a pager, go back.");
    println!("Set RUST_LOG=debug to follow gesture and settle decisions.");
    println!();

    if let Err(err) = run() {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), swipeback_app_shell::ShellError> {
    let (width, height) = (1080, 1920);
    let mut app = DemoApp::new(width, height, 2.75)?;

    let (x, y) = app.main_button_center();
    if let Some(second) = app.tap(x, y)? {
        log::info!("opened {second}; swiping it back from the edge");
        app.swipe(30, -width * 3 / 4, height / 2);
        log::info!(
            "{second} is {}",
            if app.shell().stack().contains(second) {
                "still open"
            } else {
                "dismissed"
            }
        );
    }

    let (pager_id, pager) = app.open_pager(3)?;
    app.swipe(width * 3 / 4, width / 4, height / 2);
    app.swipe(width * 3 / 4, width / 4, height / 2);
    log::info!(
        "pager on page {} of {}",
        pager.borrow().current_page() + 1,
        pager.borrow().page_count()
    );

    app.swipe(20, -width / 5, height / 2);
    log::info!(
        "short edge swipe left {pager_id} open: {}",
        app.shell().stack().contains(pager_id)
    );

    app.back();
    log::info!("back pressed; {} screen(s) left", app.shell().len());
    log::info!("{} transitions played", app.shell().transitions().len());
    Ok(())
}
