use std::f64::consts::TAU;

use aoer_pendulum_rs::prelude::*;
use geo_types::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Draws a scripted spiral stroke, lets the contraption run off the end of it,
/// and writes the result out as an SVG. Pass a RON config path as the first
/// argument to override the defaults.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig {
            seed: Some(1234),
            ..Default::default()
        },
    };
    let mut sketch = Sketch::new(config)?;

    // A slow spiral, one point per frame as if dragged by hand.
    let center = Point::new(600.0, 400.0);
    let points: Vec<Point<f64>> = (0..240)
        .map(|i| {
            let t = i as f64 / 240.0;
            let angle = t * 2.5 * TAU;
            let radius = 60.0 + 260.0 * t;
            center + Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect();

    let mut stroke = points.iter();
    if let Some(first) = stroke.next() {
        sketch.handle_input(InputEvent::Press(*first));
    }
    for point in stroke {
        sketch.handle_input(InputEvent::Drag(*point));
        sketch.tick();
    }
    sketch.handle_input(InputEvent::Release);

    let mut frames = 0;
    while sketch.registry().sessions().any(|s| !s.sampler().at_end()) {
        sketch.tick();
        frames += 1;
    }
    info!("Contraption reached the end of the stroke after {} more frames", frames);

    let filename = Sketch::snapshot_name();
    sketch.apply(Command::ExportSnapshot(filename.clone().into()))?;
    info!("Wrote {}", filename);
    Ok(())
}
