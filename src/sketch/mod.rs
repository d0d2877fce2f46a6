//! Provides [`crate::sketch::Sketch`], the top level of the pendulum drawing
//! tool. The host application (a Nannou window, a headless script, ...)
//! feeds it pointer events and commands, calls [`Sketch::tick`] once per
//! frame, and renders whatever [`Sketch::frame`] hands back.

use geo_types::Point;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ConfigError, ExportError};
use crate::session::{SessionId, SessionRegistry};
use crate::typography::{FixedAdvanceMetrics, FontKitMetrics, GlyphMetrics};

pub mod config;
pub mod frame;
pub mod snapshot;

use config::SketchConfig;
use frame::Frame;

/// Pointer input, in sketch coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press(Point<f64>),
    Drag(Point<f64>),
    Release,
}

/// Discrete user commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    TogglePath,
    TogglePendulum,
    ToggleTrail,
    IncreaseAmplitude,
    DecreaseAmplitude,
    IncreaseGravity,
    DecreaseGravity,
    Reset,
    ExportSnapshot(PathBuf),
}

/// # Sketch
///
/// Owns the tunables, every drawing session, the glyph metrics and the random
/// source. Input handling and ticking both go through `&mut self`, so the
/// tunables only ever have one writer at a time.
///
/// # Example
///
/// ```rust
/// use aoer_pendulum_rs::sketch::{Sketch, InputEvent};
/// use aoer_pendulum_rs::sketch::config::SketchConfig;
/// use aoer_pendulum_rs::typography::FixedAdvanceMetrics;
/// use geo_types::Point;
///
/// let mut sketch = Sketch::with_metrics(SketchConfig::default(), Box::new(FixedAdvanceMetrics::default()))
///     .expect("default config is valid");
/// sketch.handle_input(InputEvent::Press(Point::new(10.0, 10.0)));
/// for i in 0..20 {
///     sketch.handle_input(InputEvent::Drag(Point::new(10.0 + i as f64 * 15.0, 10.0)));
///     sketch.tick();
/// }
/// sketch.handle_input(InputEvent::Release);
/// for _ in 0..100 {
///     sketch.tick();
/// }
/// assert!(!sketch.frame().is_empty());
/// ```
pub struct Sketch {
    config: SketchConfig,
    registry: SessionRegistry,
    metrics: Box<dyn GlyphMetrics>,
    rng: SmallRng,
}

impl Sketch {
    /// A sketch measuring glyphs with the configured system font, or with a
    /// fixed advance when that font cannot be found. Fails if the config does
    /// not pass [`SketchConfig::validate`].
    pub fn new(config: SketchConfig) -> Result<Sketch, ConfigError> {
        config.validate()?;
        let metrics: Box<dyn GlyphMetrics> = match FontKitMetrics::from_family(&config.font_family) {
            Ok(metrics) => Box::new(metrics),
            Err(err) => {
                warn!("Falling back to fixed glyph widths: {}", err);
                Box::new(FixedAdvanceMetrics::default())
            }
        };
        Sketch::with_metrics(config, metrics)
    }

    pub fn with_metrics(config: SketchConfig, metrics: Box<dyn GlyphMetrics>) -> Result<Sketch, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Sketch {
            config,
            registry: SessionRegistry::new(),
            metrics,
            rng,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Returns the id of the session a press started.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SessionId> {
        match event {
            InputEvent::Press(point) => {
                let id = self.registry.press(point, &self.config, &mut self.rng);
                info!("Session {} started at {:?}", id, point);
                Some(id)
            }
            InputEvent::Drag(point) => {
                self.registry.drag(point);
                None
            }
            InputEvent::Release => {
                self.registry.release();
                None
            }
        }
    }

    /// Apply a command. Only a snapshot export can fail, and a failed export
    /// leaves the sketch untouched.
    pub fn apply(&mut self, command: Command) -> Result<(), ExportError> {
        match command {
            Command::TogglePath => self.config.show_path = !self.config.show_path,
            Command::TogglePendulum => self.config.show_pendulum = !self.config.show_pendulum,
            Command::ToggleTrail => self.config.show_trail = !self.config.show_trail,
            Command::IncreaseAmplitude => {
                self.config.amplitude += self.config.amplitude_step;
                info!("Amplitude {}", self.config.amplitude);
            }
            Command::DecreaseAmplitude => {
                self.config.amplitude = (self.config.amplitude - self.config.amplitude_step).max(self.config.amplitude_step);
                info!("Amplitude {}", self.config.amplitude);
            }
            Command::IncreaseGravity => {
                self.config.gravity += self.config.gravity_step;
                info!("Gravity {}", self.config.gravity);
            }
            Command::DecreaseGravity => {
                self.config.gravity -= self.config.gravity_step;
                info!("Gravity {}", self.config.gravity);
            }
            Command::Reset => self.registry.reset(),
            Command::ExportSnapshot(path) => self.export_snapshot(path)?,
        }
        Ok(())
    }

    /// Advance every session by one frame.
    pub fn tick(&mut self) {
        self.registry.tick(&self.config, self.metrics.as_ref());
    }

    pub fn frame(&self) -> Frame {
        let mut commands = vec![];
        self.registry.draw(&self.config, &mut commands);
        Frame { commands }
    }

    pub fn export_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        snapshot::save_frame(&self.frame(), &self.config.font_family, path)
    }

    /// A fresh, unique snapshot file name.
    pub fn snapshot_name() -> String {
        format!("pendulum-{}.svg", Uuid::new_v4())
    }
}
