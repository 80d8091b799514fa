//! Deterministic demo session for the screen pager.
//!
//! Drives a three-screen pager over the headless [`ScriptedSurface`]
//! backend: composes a frame, requests animated and immediate navigation,
//! and forwards the backend's settle notifications back to the pager.

use screen_pager::{
    Axis, PagerFrame, ScreenPager, ScreenPagerArgs, ScriptedSurface, SettleEvents, SurfaceError,
    Viewport,
};
use tracing::info;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("info"),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn screens() -> Vec<&'static str> {
    vec!["home", "feed", "settings"]
}

fn log_frame(frame: &PagerFrame<&str>) {
    info!(
        width = frame.size.width,
        height = frame.size.height,
        drag_enabled = frame.surface.drag_enabled,
        "composed frame"
    );
    for screen in &frame.screens {
        info!(
            index = screen.index,
            name = screen.child,
            left = screen.rect.left,
            top = screen.rect.top,
            active = screen.active,
            "screen"
        );
    }
}

fn drain_settles(pager: &mut ScreenPager<ScriptedSurface>, settles: &SettleEvents) {
    while let Some(index) = settles.next() {
        pager.handle_settle(index);
    }
}

fn main() -> Result<(), SurfaceError> {
    init_tracing();

    let surface = ScriptedSurface::new();
    let settles = surface.settle_events();

    let args = ScreenPagerArgs::default()
        .axis(Axis::Horizontal)
        .on_screen_change(|screen| info!(screen, "screen changed"));
    let mut pager = ScreenPager::new(args, Viewport::new(320.0, 640.0), surface);

    let frame = pager.compose(screens())?;
    log_frame(&frame);

    info!("moving to the settings screen");
    pager.move_to_screen(2)?;
    drain_settles(&mut pager, &settles);
    log_frame(&pager.compose(screens())?);

    info!("jumping straight back home");
    pager.jump_to_screen(0)?;
    drain_settles(&mut pager, &settles);
    log_frame(&pager.compose(screens())?);

    Ok(())
}
