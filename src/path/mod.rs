//! Walks a cursor along a hand-drawn polyline. See [`crate::path::PathSampler`].

use geo_types::{LineString, Point};
use std::f64::consts::FRAC_PI_2;

use crate::geo_types::PointHeading;

/// Default cursor advance per frame; roughly 25 frames between recorded points.
pub const DEFAULT_RESOLUTION: f64 = 0.04;

/// Where the anchor currently is on the path, and which way the pendulum
/// should hang.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub position: Point<f64>,
    /// Direction of travel minus a quarter turn, so the chain hangs below
    /// the direction of motion.
    pub heading: f64,
}

/// # PathSampler
///
/// Holds the recorded points of a stroke and a fractional cursor into them.
/// The integer part of the cursor selects a segment (`points[i-1] -> points[i]`)
/// and the fractional part is the offset along that segment.
///
/// # Example
///
/// ```rust
/// use aoer_pendulum_rs::path::PathSampler;
/// use geo_types::Point;
///
/// let mut sampler = PathSampler::new(0.5);
/// sampler.push(Point::new(0.0, 0.0));
/// sampler.push(Point::new(10.0, 0.0));
/// assert!(sampler.sample().is_none());
/// sampler.advance();
/// sampler.advance();
/// let sample = sampler.sample().unwrap();
/// assert_eq!(sample.position, Point::new(0.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathSampler {
    points: Vec<Point<f64>>,
    cursor: f64,
    resolution: f64,
}

impl Default for PathSampler {
    fn default() -> Self {
        PathSampler::new(DEFAULT_RESOLUTION)
    }
}

impl PathSampler {
    pub fn new(resolution: f64) -> PathSampler {
        PathSampler {
            points: vec![],
            cursor: 0.0,
            resolution,
        }
    }

    pub fn set_resolution(&mut self, resolution: f64) -> &mut Self {
        self.resolution = resolution;
        self
    }

    /// Append a recorded point. Points are never removed or changed.
    pub fn push(&mut self, point: Point<f64>) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// True once the cursor has caught up with the last recorded point.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.points.len() as f64
    }

    /// Move the cursor forward by one resolution step, clamped to
    /// `[0, len]`. Does nothing useful once the end has been reached.
    pub fn advance(&mut self) {
        let end = self.points.len() as f64;
        self.cursor = (self.cursor + self.resolution).clamp(0.0, end);
    }

    /// Interpolated anchor and heading at the cursor. `None` while the cursor
    /// is still on the first point (there is no previous point to head from)
    /// and once it has run off the end of the recorded points.
    pub fn sample(&self) -> Option<PathSample> {
        let index = self.cursor.floor();
        if index < 1.0 || index >= self.points.len() as f64 {
            return None;
        }
        let index = index as usize;
        let previous = self.points[index - 1];
        let current = self.points[index];
        Some(PathSample {
            position: previous.lerp(&current, self.cursor - index as f64),
            heading: previous.heading_to(&current) - FRAC_PI_2,
        })
    }

    pub fn to_linestring(&self) -> LineString<f64> {
        self.points.iter().map(|p| (p.x(), p.y())).collect()
    }
}
