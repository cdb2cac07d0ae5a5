//! Driftfield entry point
//!
//! Runs the background simulation headless and dumps a final snapshot as
//! JSON. The real consumer is a page embedding the library; this loop is
//! for eyeballing motion and glow behavior from a terminal.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use driftfield::config::FieldConfig;
    use driftfield::driver::FieldDriver;
    use driftfield::sim::{ShapeField, Viewport};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let seconds: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);

    let viewport = Viewport::new(1920.0, 1080.0);
    let config = FieldConfig::default();
    let mut field = ShapeField::new(&config.shapes, viewport, seed);
    let mut driver = FieldDriver::new();

    log::info!(
        "driftfield: {} shapes, seed {}, simulating {}s",
        field.len(),
        seed,
        seconds
    );

    for second in 0..seconds {
        // 60 Hz frames; the driver folds them into 50 ms ticks
        for _ in 0..60 {
            driver.advance(&mut field, viewport, 1000.0 / 60.0);
        }
        let glowing = field.snapshot().iter().filter(|s| s.glowing).count();
        log::info!("t={}s: {} of {} glowing", second + 1, glowing, field.len());
    }

    match serde_json::to_string_pretty(field.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
