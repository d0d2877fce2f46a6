//! One drawn stroke and the contraption riding along it.
//! See [`crate::session::DrawingSession`].

use csscolorparser::Color as CssColor;
use geo_types::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::path::PathSampler;
use crate::pendulum::PendulumChain;
use crate::sketch::config::SketchConfig;
use crate::sketch::frame::DrawCommand;
use crate::trail::{GlyphPlacement, TrailGlyphMapper};
use crate::typography::GlyphMetrics;

pub mod registry;

pub use registry::SessionRegistry;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `Empty -> Live -> Settled`. There is no way back; a settled session only
/// goes away when the whole registry is reset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, no points recorded yet.
    Empty,
    /// The pointer is down and points are still arriving.
    Live,
    /// Pointer released: the path is frozen, the dynamics keep running.
    Settled,
}

/// # DrawingSession
///
/// Owns one stroke's [`PathSampler`], the [`PendulumChain`] dragged along it,
/// and the [`TrailGlyphMapper`] fed by the chain's last joint. The chain's
/// shape (joint count, head length, ratio) and the mapper's text and minimum
/// glyph size are copied out of the config when the session is created and
/// never re-read.
#[derive(Clone, Debug)]
pub struct DrawingSession {
    id: SessionId,
    state: SessionState,
    sampler: PathSampler,
    chain: PendulumChain,
    mapper: TrailGlyphMapper,
    glyphs: Vec<GlyphPlacement>,
    glyphs_for: usize,
    anchor: Option<Point<f64>>,
    color: CssColor,
}

impl DrawingSession {
    pub fn new<R: Rng>(config: &SketchConfig, rng: &mut R) -> DrawingSession {
        let chain = PendulumChain::new(config.amplitude, config.joints, config.link_ratio, rng);
        DrawingSession::with_chain(config, chain, random_trail_color(rng))
    }

    /// A session around a prepared chain, for reproducible setups.
    pub fn with_chain(config: &SketchConfig, chain: PendulumChain, color: CssColor) -> DrawingSession {
        let id = SessionId::new();
        debug!("Session {} created with {} links", id, chain.links().len());
        DrawingSession {
            id,
            state: SessionState::Empty,
            sampler: PathSampler::new(config.resolution),
            chain,
            mapper: TrailGlyphMapper::new(&config.text, config.min_glyph_size),
            glyphs: vec![],
            glyphs_for: 0,
            anchor: None,
            color,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn sampler(&self) -> &PathSampler {
        &self.sampler
    }

    pub fn chain(&self) -> &PendulumChain {
        &self.chain
    }

    pub fn trail(&self) -> &[Point<f64>] {
        self.mapper.trail()
    }

    /// Glyphs from the most recent scan of the trail.
    pub fn glyphs(&self) -> &[GlyphPlacement] {
        &self.glyphs
    }

    /// Where the chain hung this tick, if the cursor produced a sample.
    pub fn anchor(&self) -> Option<Point<f64>> {
        self.anchor
    }

    pub fn color(&self) -> &CssColor {
        &self.color
    }

    /// Record a point of the stroke. Ignored once the session has settled.
    pub fn push_point(&mut self, point: Point<f64>) {
        match self.state {
            SessionState::Settled => {
                warn!("Session {} is settled; dropping point {:?}", self.id, point);
            }
            SessionState::Empty | SessionState::Live => {
                self.sampler.push(point);
                self.state = SessionState::Live;
            }
        }
    }

    pub fn settle(&mut self) {
        if self.state != SessionState::Settled {
            debug!(
                "Session {} settled with {} points",
                self.id,
                self.sampler.len()
            );
            self.state = SessionState::Settled;
        }
    }

    /// One frame: advance the cursor, swing the chain from the new anchor,
    /// and record where its tip ended up. Gravity, damping, resolution and
    /// trail visibility are taken from `config` every call.
    pub fn tick(&mut self, config: &SketchConfig, metrics: &dyn GlyphMetrics) {
        self.sampler.set_resolution(config.resolution).advance();
        self.anchor = match self.sampler.sample() {
            Some(sample) => {
                self.chain.update(sample.heading, config.gravity, config.damping);
                let tip = self.chain.terminal_position(sample.position);
                if config.show_trail {
                    self.glyphs = self.mapper.on_new_trail_point(tip, metrics);
                    self.glyphs_for = self.mapper.len();
                } else {
                    self.mapper.push(tip);
                }
                Some(sample.position)
            }
            None => None,
        };
        // Placements only change when the trail grows.
        if config.show_trail && self.glyphs_for != self.mapper.len() {
            self.glyphs = self.mapper.placements(metrics);
            self.glyphs_for = self.mapper.len();
        }
    }

    /// Append this session's draw commands, honoring the visibility toggles.
    pub fn draw(&self, config: &SketchConfig, out: &mut Vec<DrawCommand>) {
        if config.show_path && !self.sampler.is_empty() {
            out.push(DrawCommand::Path(self.sampler.to_linestring()));
        }
        if config.show_trail {
            out.extend(self.glyphs.iter().map(|placement| DrawCommand::Glyph {
                placement: placement.clone(),
                color: self.color.clone(),
            }));
        }
        if config.show_pendulum {
            if let Some(anchor) = self.anchor {
                for segment in self.chain.segments(anchor) {
                    out.push(DrawCommand::Link(segment));
                    out.push(DrawCommand::Joint(segment.end));
                }
            }
        }
    }
}

/// A saturated, fairly dark color with a random hue.
pub fn random_trail_color<R: Rng>(rng: &mut R) -> CssColor {
    let hue: f64 = rng.gen_range(0.0..360.0);
    csscolorparser::parse(&format!("hsl({:.1}, 80%, 40%)", hue))
        .unwrap_or_else(|_| CssColor::from_rgba8(0, 0, 0, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_types::PointDistance;
    use crate::typography::FixedAdvanceMetrics;
    use num_traits::abs;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_PI_2;

    fn black() -> CssColor {
        CssColor::from_rgba8(0, 0, 0, 255)
    }

    #[test]
    fn test_state_machine() {
        let config = SketchConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut session = DrawingSession::new(&config, &mut rng);
        assert_eq!(session.state(), SessionState::Empty);
        session.push_point(Point::new(0.0, 0.0));
        assert_eq!(session.state(), SessionState::Live);
        session.push_point(Point::new(5.0, 0.0));
        session.settle();
        assert_eq!(session.state(), SessionState::Settled);
        session.push_point(Point::new(9.0, 9.0));
        assert_eq!(session.sampler().len(), 2);
    }

    #[test]
    fn test_chain_shape_is_copied_at_creation() {
        let mut config = SketchConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let session = DrawingSession::new(&config, &mut rng);
        config.joints = 7;
        config.amplitude = 10.0;
        assert_eq!(session.chain().links().len(), 4);
        assert_eq!(session.chain().links()[0].length, 128.0);
    }

    #[test]
    fn test_single_segment_end_to_end() {
        let config = SketchConfig {
            resolution: 1.0,
            gravity: 0.0,
            damping: 1.0,
            ..Default::default()
        };
        let chain = PendulumChain::with_angles(10.0, 1.5, &[0.3]);
        let mut session = DrawingSession::with_chain(&config, chain, black());
        session.push_point(Point::new(0.0, 0.0));
        session.push_point(Point::new(100.0, 0.0));
        session.settle();
        let metrics = FixedAdvanceMetrics::default();

        let relative = |s: &DrawingSession| s.chain().terminal_position(Point::new(0.0, 0.0));
        let before = relative(&session);

        session.tick(&config, &metrics);
        let sample = session.sampler().sample().expect("first tick reaches the segment");
        assert!(abs(sample.heading + FRAC_PI_2) < 0.0001);
        assert_eq!(session.anchor(), Some(Point::new(0.0, 0.0)));
        assert_eq!(session.trail().len(), 1);
        assert!(relative(&session).distance(&before) < 0.0001);
        assert!(session.trail()[0].distance(&(Point::new(0.0, 0.0) + before)) < 0.0001);

        for _ in 0..5 {
            session.tick(&config, &metrics);
            assert!(relative(&session).distance(&before) < 0.0001);
        }
        // The cursor ran off the end of the path: the trail is frozen.
        assert_eq!(session.anchor(), None);
        assert_eq!(session.trail().len(), 1);
    }

    #[test]
    fn test_trail_grows_once_per_sampled_tick() {
        let config = SketchConfig {
            resolution: 0.25,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = DrawingSession::new(&config, &mut rng);
        session.push_point(Point::new(0.0, 0.0));
        session.push_point(Point::new(0.0, 100.0));
        session.push_point(Point::new(100.0, 100.0));
        let metrics = FixedAdvanceMetrics::default();
        for _ in 0..20 {
            session.tick(&config, &metrics);
        }
        // Cursor 1.0 through 2.75 sample: eight ticks.
        assert_eq!(session.trail().len(), 8);
    }

    #[test]
    fn test_text_is_copied_at_creation() {
        let config = SketchConfig {
            text: "ab".to_string(),
            resolution: 1.0,
            gravity: 0.0,
            ..Default::default()
        };
        let chain = PendulumChain::with_angles(10.0, 1.5, &[0.0]);
        let mut session = DrawingSession::with_chain(&config, chain, black());
        for i in 0..4 {
            session.push_point(Point::new(i as f64 * 40.0, 0.0));
        }
        let later = SketchConfig {
            text: "xyz".to_string(),
            min_glyph_size: 500.0,
            ..config.clone()
        };
        let metrics = FixedAdvanceMetrics::default();
        for _ in 0..4 {
            session.tick(&later, &metrics);
        }
        let glyphs: String = session.glyphs().iter().map(|g| g.glyph).collect();
        // Three trail points 40 apart: the last one has no partner.
        assert_eq!(glyphs, "ab");
        assert!(session.glyphs().iter().all(|g| abs(g.size - 40.0) < 0.0001));
    }

    fn twin_sessions(config: &SketchConfig) -> (DrawingSession, DrawingSession) {
        let make = || {
            let chain = PendulumChain::with_angles(40.0, 1.5, &[1.0, 2.0]);
            let mut session = DrawingSession::with_chain(config, chain, black());
            for i in 0..10 {
                session.push_point(Point::new(i as f64 * 30.0, 0.0));
            }
            session
        };
        (make(), make())
    }

    #[test]
    fn test_gravity_and_resolution_changes_reach_existing_session() {
        let config = SketchConfig {
            resolution: 0.5,
            ..Default::default()
        };
        let metrics = FixedAdvanceMetrics::default();
        let (mut steady, mut tuned) = twin_sessions(&config);
        for _ in 0..4 {
            steady.tick(&config, &metrics);
            tuned.tick(&config, &metrics);
        }
        assert_eq!(steady.chain(), tuned.chain());
        assert_eq!(steady.sampler().cursor(), tuned.sampler().cursor());

        let retuned = SketchConfig {
            gravity: 1.0,
            resolution: 1.0,
            ..config.clone()
        };
        for _ in 0..2 {
            steady.tick(&config, &metrics);
            tuned.tick(&retuned, &metrics);
        }
        assert!(abs(steady.sampler().cursor() - 3.0) < 0.0001);
        assert!(abs(tuned.sampler().cursor() - 4.0) < 0.0001);
        let (a, b) = (&steady.chain().links()[0], &tuned.chain().links()[0]);
        assert!(abs(a.angular_velocity - b.angular_velocity) > 0.0001);
        assert!(abs(a.angle - b.angle) > 0.0001);
    }

    #[test]
    fn test_damping_change_reaches_existing_session() {
        let config = SketchConfig {
            resolution: 0.5,
            ..Default::default()
        };
        let metrics = FixedAdvanceMetrics::default();
        let (mut steady, mut damped) = twin_sessions(&config);
        for _ in 0..3 {
            steady.tick(&config, &metrics);
            damped.tick(&config, &metrics);
        }
        let heavy = SketchConfig {
            damping: 0.5,
            ..config.clone()
        };
        for _ in 0..2 {
            steady.tick(&config, &metrics);
            damped.tick(&heavy, &metrics);
        }
        assert_eq!(steady.sampler().cursor(), damped.sampler().cursor());
        let (a, b) = (&steady.chain().links()[0], &damped.chain().links()[0]);
        assert!(abs(b.angular_velocity) < abs(a.angular_velocity));
        assert!(abs(a.angle - b.angle) > 0.0001);
    }

    #[test]
    fn test_hidden_trail_catches_up_when_shown() {
        let mut config = SketchConfig {
            resolution: 0.5,
            show_trail: false,
            ..Default::default()
        };
        let chain = PendulumChain::with_angles(40.0, 1.5, &[1.0, 2.0]);
        let mut session = DrawingSession::with_chain(&config, chain, black());
        for i in 0..10 {
            session.push_point(Point::new(i as f64 * 30.0, (i % 3) as f64 * 20.0));
        }
        let metrics = FixedAdvanceMetrics::default();
        for _ in 0..12 {
            session.tick(&config, &metrics);
        }
        assert!(session.glyphs().is_empty());
        assert!(session.trail().len() > 2);

        config.show_trail = true;
        session.tick(&config, &metrics);
        let mut expected = TrailGlyphMapper::new(&config.text, config.min_glyph_size);
        for p in session.trail() {
            expected.push(*p);
        }
        assert_eq!(session.glyphs(), expected.placements(&metrics).as_slice());
    }

    #[test]
    fn test_draw_respects_toggles() {
        let mut config = SketchConfig {
            resolution: 1.0,
            ..Default::default()
        };
        let chain = PendulumChain::with_angles(10.0, 1.5, &[0.0, 0.0]);
        let mut session = DrawingSession::with_chain(&config, chain, black());
        session.push_point(Point::new(0.0, 0.0));
        session.push_point(Point::new(0.0, 50.0));
        session.push_point(Point::new(0.0, 100.0));
        let metrics = FixedAdvanceMetrics::default();
        session.tick(&config, &metrics);
        session.tick(&config, &metrics);

        let mut out = vec![];
        session.draw(&config, &mut out);
        let paths = out.iter().filter(|c| matches!(c, DrawCommand::Path(_))).count();
        let links = out.iter().filter(|c| matches!(c, DrawCommand::Link(_))).count();
        let joints = out.iter().filter(|c| matches!(c, DrawCommand::Joint(_))).count();
        assert_eq!((paths, links, joints), (1, 2, 2));

        config.show_path = false;
        config.show_pendulum = false;
        let mut out = vec![];
        session.draw(&config, &mut out);
        assert!(out.iter().all(|c| matches!(c, DrawCommand::Glyph { .. })));
    }

    #[test]
    fn test_random_color_is_opaque() {
        let color = random_trail_color(&mut SmallRng::seed_from_u64(5));
        assert_eq!(color.to_rgba8()[3], 255);
    }
}
