use geo_types::Point;
use rand::Rng;
use tracing::{debug, info};

use super::{DrawingSession, SessionId};
use crate::sketch::config::SketchConfig;
use crate::sketch::frame::DrawCommand;
use crate::typography::GlyphMetrics;

/// All sessions of the sketch: the settled ones in creation order, plus at
/// most one live session that is still receiving points.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    settled: Vec<DrawingSession>,
    live: Option<DrawingSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry::default()
    }

    /// Start a new live session at `point`. A session that is somehow still
    /// live (missed release) is settled first.
    pub fn press<R: Rng>(&mut self, point: Point<f64>, config: &SketchConfig, rng: &mut R) -> SessionId {
        self.release();
        let mut session = DrawingSession::new(config, rng);
        session.push_point(point);
        let id = session.id();
        self.live = Some(session);
        id
    }

    /// Append a point to the live session. Returns false when nothing is live.
    pub fn drag(&mut self, point: Point<f64>) -> bool {
        match self.live.as_mut() {
            Some(session) => {
                session.push_point(point);
                true
            }
            None => {
                debug!("Drag at {:?} with no live session", point);
                false
            }
        }
    }

    /// Settle the live session, if any.
    pub fn release(&mut self) -> Option<SessionId> {
        let mut session = self.live.take()?;
        session.settle();
        let id = session.id();
        self.settled.push(session);
        Some(id)
    }

    /// Tick every session once: settled first, then the live one.
    pub fn tick(&mut self, config: &SketchConfig, metrics: &dyn GlyphMetrics) {
        for session in self.settled.iter_mut() {
            session.tick(config, metrics);
        }
        if let Some(session) = self.live.as_mut() {
            session.tick(config, metrics);
        }
    }

    /// Drop every session, live or settled.
    pub fn reset(&mut self) {
        info!("Resetting {} sessions", self.len());
        self.settled.clear();
        self.live = None;
    }

    pub fn draw(&self, config: &SketchConfig, out: &mut Vec<DrawCommand>) {
        for session in self.sessions() {
            session.draw(config, out);
        }
    }

    pub fn live(&self) -> Option<&DrawingSession> {
        self.live.as_ref()
    }

    /// Settled sessions in creation order, then the live session.
    pub fn sessions(&self) -> impl Iterator<Item = &DrawingSession> {
        self.settled.iter().chain(self.live.iter())
    }

    pub fn len(&self) -> usize {
        self.settled.len() + usize::from(self.live.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
