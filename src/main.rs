//! Headless driver: runs the animation and picking loop for a few seconds
//! with a scripted pointer sweep and logs what gets highlighted.
//!
//! ```text
//! RUST_LOG=info knotpick [options.toml]
//! ```

use std::path::Path;

use knotpick::input::{InputEvent, PointerPosition, Viewport};
use knotpick::options::Options;
use knotpick::DemoApp;
use web_time::Instant;

const FRAME_MS: f64 = 1000.0 / 60.0;
const FRAMES: u32 = 240;

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => {
            log::info!("loaded options from {arg}");
            options
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let viewport = Viewport::new(800.0, 600.0, 1.0);
    let mut app = DemoApp::new(options, viewport);
    let started = Instant::now();

    let mut last_pick = None;
    for frame in 0..FRAMES {
        // Sweep left to right along the middle row, leaving the canvas for
        // the final quarter.
        let event = if frame < FRAMES * 3 / 4 {
            let x = frame as f32 / (FRAMES * 3 / 4) as f32 * viewport.width;
            InputEvent::PointerMove(PointerPosition::new(
                x,
                viewport.height * 0.5,
            ))
        } else {
            InputEvent::PointerLeave
        };
        app.handle_event(event);

        let report = app.frame(f64::from(frame) * FRAME_MS);
        if report.picked != last_pick {
            let name = report
                .picked
                .and_then(|id| app.scene().node(id))
                .map_or("nothing", |node| node.name.as_str());
            log::info!(
                "frame {frame}: hovering {name} (knot at x = {:.2})",
                report.animation.x
            );
            last_pick = report.picked;
        }
    }

    log::info!(
        "simulated {FRAMES} frames in {:.2}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
}
