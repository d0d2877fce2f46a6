//! The pendulum module provides the branching "contraption" that gets dragged
//! along a drawn path. See [`crate::pendulum::PendulumChain`] for details.

use geo_types::Point;
use rand::Rng;
use std::f64::consts::TAU;

use crate::geo_types::matrix::{transform_point, translate_matrix};

/// Each child link is this many times shorter than its parent.
pub const LINK_LENGTH_RATIO: f64 = 1.5;

/// # PendulumLink
///
/// One rigid segment of the chain. The link lives in its own local frame with
/// its origin at (0,0); the end of the link is at `length * (sin angle, cos angle)`,
/// so an angle of zero hangs straight "down" the +y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumLink {
    pub length: f64,
    pub angle: f64,
    pub angular_velocity: f64,
    pub angular_acceleration: f64,
}

impl PendulumLink {
    pub fn new(length: f64, angle: f64) -> PendulumLink {
        PendulumLink {
            length,
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }

    /// Local offset of this link's end from its own origin.
    pub fn end(&self) -> Point<f64> {
        Point::new(self.length * self.angle.sin(), self.length * self.angle.cos())
    }

    fn step(&mut self, heading: f64, gravity: f64, damping: f64) {
        self.angular_acceleration = (-gravity / self.length) * (self.angle + heading).sin();
        self.angle += self.angular_velocity;
        self.angular_velocity += self.angular_acceleration;
        self.angular_velocity *= damping;
    }
}

/// A drawable link: the segment from the link's origin to its end, in world
/// space. The joint marker sits at `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkSegment {
    pub start: Point<f64>,
    pub end: Point<f64>,
}

/// # PendulumChain
///
/// An open chain of links, head first. Each link owns an independent damped
/// oscillator; every link is driven by the same heading each update, and each
/// child hangs off the end of its parent.
///
/// # Example
///
/// ```rust
/// use aoer_pendulum_rs::pendulum::PendulumChain;
/// use geo_types::Point;
///
/// let mut chain = PendulumChain::with_angles(128.0, 1.5, &[0.0, 0.0, 0.0]);
/// chain.update(0.0, 0.094, 0.998);
/// let tip = chain.terminal_position(Point::new(100.0, 100.0));
/// assert!(tip.y() > 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumChain {
    links: Vec<PendulumLink>,
}

impl PendulumChain {
    /// Build a chain of `joints` links (at least one) with random starting
    /// angles. The head link is `amplitude` long and each child is `ratio`
    /// times shorter than its parent.
    pub fn new<R: Rng>(amplitude: f64, joints: usize, ratio: f64, rng: &mut R) -> PendulumChain {
        let angles: Vec<f64> = (0..joints.max(1)).map(|_| rng.gen_range(0.0..TAU)).collect();
        PendulumChain::with_angles(amplitude, ratio, &angles)
    }

    /// Build a chain with one link per supplied starting angle. An empty slice
    /// still yields a single link hanging straight down.
    pub fn with_angles(amplitude: f64, ratio: f64, angles: &[f64]) -> PendulumChain {
        let mut length = amplitude;
        let mut links = Vec::with_capacity(angles.len().max(1));
        for angle in angles {
            links.push(PendulumLink::new(length, *angle));
            length /= ratio;
        }
        if links.is_empty() {
            links.push(PendulumLink::new(amplitude, 0.0));
        }
        PendulumChain { links }
    }

    pub fn links(&self) -> &[PendulumLink] {
        &self.links
    }

    /// Number of links below the head.
    pub fn depth(&self) -> usize {
        self.links.len() - 1
    }

    /// Advance every link by one frame, all driven by the same `heading`.
    pub fn update(&mut self, heading: f64, gravity: f64, damping: f64) {
        for link in self.links.iter_mut() {
            link.step(heading, gravity, damping);
        }
    }

    /// World position of the deepest joint: every link's local end offset
    /// summed outward from the head, plus `offset`.
    pub fn terminal_position(&self, offset: Point<f64>) -> Point<f64> {
        self.links.iter().fold(offset, |acc, link| acc + link.end())
    }

    /// One segment per link in world space, each child composed onto the
    /// frame translated to its parent's end.
    pub fn segments(&self, anchor: Point<f64>) -> Vec<LinkSegment> {
        let mut frame = translate_matrix(anchor.x(), anchor.y());
        let origin = Point::new(0.0, 0.0);
        self.links
            .iter()
            .map(|link| {
                let end = link.end();
                let segment = LinkSegment {
                    start: transform_point(&frame, &origin),
                    end: transform_point(&frame, &end),
                };
                frame = frame * translate_matrix(end.x(), end.y());
                segment
            })
            .collect()
    }
}
