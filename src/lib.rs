//! ArmyOfEvilRobots pendulum writing machine
//!
//! Draw a path with the mouse, and a branching pendulum contraption gets
//! dragged along it, swinging under gravity and damping. The last joint of
//! the contraption leaves a trail, and the letters of a sentence are laid
//! along that trail, each rotated to follow it.
//!
//! This crate is the simulation and the trail-to-text mapping only. Bring
//! your own window: feed [`sketch::Sketch`] pointer events, tick it once per
//! frame, and draw the [`sketch::frame::Frame`] it returns. A Nannou host is
//! available behind the `nannou` feature (see `demos/pendulum_nannou.rs`),
//! and any frame can be saved as SVG.
//!
//! *Based on a Processing/p5 generative design sketch. Not a physics engine;
//! the pendulums are tuned to look nice, not to be right.*

/// Extensions/Traits for geo_types geometry, plus SVG and Nannou helpers.
pub mod geo_types;

/// The branching, damped pendulum chain.
pub mod pendulum;

/// A cursor that walks along a recorded stroke.
pub mod path;

/// Glyph width measurement, from real fonts or a fixed ratio.
pub mod typography;

/// Laying text along a pendulum's trail.
pub mod trail;

/// Drawing sessions and the registry that ticks them.
pub mod session;

/// The top-level sketch: input, commands, ticking, frames and snapshots.
pub mod sketch;

/// Error types.
pub mod errors;

/// Make your life easy! Just import prelude::* and get drawing.
pub mod prelude {
    pub use crate::geo_types::{PointDistance, PointHeading};
    #[cfg(feature = "nannou")]
    pub use crate::geo_types::nannou::NannouDrawer;
    pub use crate::geo_types::svg::ToSvg;
    pub use crate::path::{PathSample, PathSampler};
    pub use crate::pendulum::{LinkSegment, PendulumChain, PendulumLink};
    pub use crate::session::{DrawingSession, SessionId, SessionRegistry, SessionState};
    pub use crate::sketch::config::SketchConfig;
    pub use crate::sketch::frame::{DrawCommand, Frame};
    pub use crate::sketch::{Command, InputEvent, Sketch};
    pub use crate::trail::{GlyphPlacement, TrailGlyphMapper};
    pub use crate::typography::{FixedAdvanceMetrics, FontKitMetrics, GlyphMetrics};
}
