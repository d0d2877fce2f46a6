use aoer_pendulum_rs::geo_types::nannou::{to_window_space, NannouDrawer};
use aoer_pendulum_rs::sketch::config::SketchConfig;
use aoer_pendulum_rs::sketch::frame::DrawCommand;
use aoer_pendulum_rs::sketch::{Command, InputEvent, Sketch};
use geo_types::Point;
use nannou::lyon::lyon_tessellation::LineJoin;
use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// MOUSE
///   click and drag : draw a path for a new pendulum to follow
///
/// KEYS
///   1              : toggle path line
///   2              : toggle pendulum
///   3              : toggle pendulum text trail
///   arrow up/down  : increase/decrease amplitude (new paths only)
///   arrow left/right : decrease/increase gravity
///   space          : clear everything
///   s              : save an SVG snapshot
struct Model {
    sketch: Sketch,
    pressed: bool,
}

fn model(app: &App) -> Model {
    app.new_window()
        .size(1280, 800)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    Model {
        sketch: Sketch::new(SketchConfig::default()).unwrap(),
        pressed: false,
    }
}

/// Nannou's mouse is centred and y-up; the sketch works top-left and y-down.
fn sketch_space(app: &App) -> Point<f64> {
    let rect = app.window_rect();
    Point::new(
        (app.mouse.x + rect.w() / 2.0) as f64,
        (rect.h() / 2.0 - app.mouse.y) as f64,
    )
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    model.sketch.handle_input(InputEvent::Press(sketch_space(app)));
    model.pressed = true;
}

fn mouse_released(_app: &App, model: &mut Model, _button: MouseButton) {
    model.sketch.handle_input(InputEvent::Release);
    model.pressed = false;
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let command = match key {
        Key::Key1 => Command::TogglePath,
        Key::Key2 => Command::TogglePendulum,
        Key::Key3 => Command::ToggleTrail,
        Key::Up => Command::IncreaseAmplitude,
        Key::Down => Command::DecreaseAmplitude,
        Key::Left => Command::DecreaseGravity,
        Key::Right => Command::IncreaseGravity,
        Key::Space => Command::Reset,
        Key::S => Command::ExportSnapshot(Sketch::snapshot_name().into()),
        _ => return,
    };
    if let Err(err) = model.sketch.apply(command) {
        warn!("{}", err);
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // A held button records a point every frame, even when the mouse is still.
    if model.pressed {
        model.sketch.handle_input(InputEvent::Drag(sketch_space(app)));
    }
    model.sketch.tick();
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let rect = app.window_rect();
    let (w, h) = (rect.w(), rect.h());
    draw.background().color(WHITE);

    for command in model.sketch.frame().commands {
        match command {
            DrawCommand::Path(line) => {
                let points: Vec<Point<f64>> = line.points().collect();
                draw.polyline()
                    .stroke_weight(0.8)
                    .caps(LineCap::Round)
                    .join(LineJoin::Round)
                    .draw_from_points(&points, w, h)
                    .color(rgba(0.0, 0.0, 0.0, 0.1));
            }
            DrawCommand::Link(segment) => {
                draw.line()
                    .start(to_window_space(&segment.start, w, h))
                    .end(to_window_space(&segment.end, w, h))
                    .weight(0.8)
                    .color(rgba(0.0, 0.0, 0.0, 0.4));
            }
            DrawCommand::Joint(point) => {
                draw.ellipse()
                    .xy(to_window_space(&point, w, h))
                    .radius(1.0)
                    .color(rgba(0.0, 0.0, 0.0, 0.2));
            }
            DrawCommand::Glyph { placement, color } => {
                let [r, g, b, _] = color.to_rgba8();
                // Window space is y-up, so the rotation flips sign.
                draw.text(&placement.glyph.to_string())
                    .xy(to_window_space(&placement.position, w, h))
                    .rotate(-placement.rotation as f32)
                    .font_size(placement.size.round().max(1.0) as u32)
                    .no_line_wrap()
                    .left_justify()
                    .color(rgb8(r, g, b));
            }
        }
    }

    draw.to_frame(app, &frame).unwrap();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    nannou::app(model).update(update).run();
}
