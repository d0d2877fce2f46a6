//! Turns the wandering tip of a pendulum into a line of rotated text.
//! See [`crate::trail::TrailGlyphMapper`].

use geo_types::Point;

use crate::geo_types::{PointDistance, PointHeading};
use crate::typography::GlyphMetrics;

/// Smallest font size a glyph is ever placed at.
pub const DEFAULT_MIN_GLYPH_SIZE: f64 = 6.0;

/// One character placed on the trail.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub glyph: char,
    pub position: Point<f64>,
    /// Radians, `atan2` of the direction to the point that made room for it.
    pub rotation: f64,
    pub size: f64,
}

/// # TrailGlyphMapper
///
/// Accumulates the positions of the chain's last joint and lays the source
/// text along them. A character is placed at a trail point once some later
/// point is further away than the character is wide (at a font size equal to
/// that distance, but never below the minimum size). Points with no such
/// partner get nothing, and the text does not advance past them.
///
/// Placement is recomputed from the first trail point on every call, with the
/// text cursor restarting at the first character.
///
/// # Example
///
/// ```rust
/// use aoer_pendulum_rs::trail::TrailGlyphMapper;
/// use aoer_pendulum_rs::typography::FixedAdvanceMetrics;
/// use geo_types::Point;
///
/// let metrics = FixedAdvanceMetrics::new(0.5);
/// let mut mapper = TrailGlyphMapper::new("abc", 6.0);
/// mapper.push(Point::new(0.0, 0.0));
/// let glyphs = mapper.on_new_trail_point(Point::new(10.0, 0.0), &metrics);
/// assert_eq!(glyphs.len(), 1);
/// assert_eq!(glyphs[0].glyph, 'a');
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TrailGlyphMapper {
    trail: Vec<Point<f64>>,
    text: Vec<char>,
    min_size: f64,
}

impl TrailGlyphMapper {
    pub fn new(text: &str, min_size: f64) -> TrailGlyphMapper {
        TrailGlyphMapper {
            trail: vec![],
            text: text.chars().collect(),
            min_size,
        }
    }

    pub fn push(&mut self, point: Point<f64>) {
        self.trail.push(point);
    }

    /// Append a trail point and re-scan the whole trail.
    pub fn on_new_trail_point(&mut self, point: Point<f64>, metrics: &dyn GlyphMetrics) -> Vec<GlyphPlacement> {
        self.push(point);
        self.placements(metrics)
    }

    pub fn trail(&self) -> &[Point<f64>] {
        &self.trail
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Full scan of the trail. Quadratic in trail length.
    pub fn placements(&self, metrics: &dyn GlyphMetrics) -> Vec<GlyphPlacement> {
        let mut placed = vec![];
        if self.text.is_empty() {
            return placed;
        }
        let mut glyph_index = 0;
        for (k, origin) in self.trail.iter().enumerate() {
            let glyph = self.text[glyph_index];
            let partner = self.trail[k + 1..].iter().find_map(|candidate| {
                let d = origin.distance(candidate);
                let size = self.min_size.max(d);
                if d > metrics.advance(glyph, size) {
                    Some((candidate, size))
                } else {
                    None
                }
            });
            if let Some((target, size)) = partner {
                placed.push(GlyphPlacement {
                    glyph,
                    position: *origin,
                    rotation: origin.heading_to(target),
                    size,
                });
                glyph_index = (glyph_index + 1) % self.text.len();
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typography::FixedAdvanceMetrics;
    use num_traits::abs;
    use std::f64::consts::PI;

    fn straight_trail(count: usize, spacing: f64) -> TrailGlyphMapper {
        let mut mapper = TrailGlyphMapper::new("abc", DEFAULT_MIN_GLYPH_SIZE);
        for i in 0..count {
            mapper.push(Point::new(i as f64 * spacing, 0.0));
        }
        mapper
    }

    #[test]
    fn test_empty_and_single_point_place_nothing() {
        let metrics = FixedAdvanceMetrics::default();
        let mut mapper = TrailGlyphMapper::new("abc", 6.0);
        assert!(mapper.placements(&metrics).is_empty());
        let glyphs = mapper.on_new_trail_point(Point::new(3.0, 4.0), &metrics);
        assert!(glyphs.is_empty());
    }

    #[test]
    fn test_glyph_text_wraps() {
        let metrics = FixedAdvanceMetrics::new(0.5);
        // Six points, ten apart: the first five each find a partner.
        let mapper = straight_trail(6, 10.0);
        let glyphs: String = mapper.placements(&metrics).iter().map(|g| g.glyph).collect();
        assert_eq!(glyphs, "abcab");
    }

    #[test]
    fn test_rotation_follows_partner() {
        let metrics = FixedAdvanceMetrics::new(0.5);
        let mut mapper = TrailGlyphMapper::new("x", 6.0);
        mapper.push(Point::new(0.0, 0.0));
        mapper.push(Point::new(0.0, 10.0));
        let glyphs = mapper.placements(&metrics);
        assert_eq!(glyphs.len(), 1);
        assert!(abs(glyphs[0].rotation - PI / 2.0) < 0.0001);
        assert!(abs(glyphs[0].size - 10.0) < 0.0001);
        assert_eq!(glyphs[0].position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_close_points_are_skipped_until_far_enough() {
        // Below the minimum size a glyph is min_size * 0.5 = 3 wide, so
        // points closer than that cannot host it yet.
        let metrics = FixedAdvanceMetrics::new(0.5);
        let mut mapper = TrailGlyphMapper::new("abc", 6.0);
        mapper.push(Point::new(0.0, 0.0));
        let glyphs = mapper.on_new_trail_point(Point::new(1.0, 0.0), &metrics);
        assert!(glyphs.is_empty());
        let glyphs = mapper.on_new_trail_point(Point::new(2.0, 0.0), &metrics);
        assert!(glyphs.is_empty());
        let glyphs = mapper.on_new_trail_point(Point::new(5.0, 0.0), &metrics);
        // (0,0) and (1,0) now clear 3 units; (2,0) sits exactly 3 away, which is not enough.
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].glyph, 'a');
        assert_eq!(glyphs[0].position, Point::new(0.0, 0.0));
        assert_eq!(glyphs[1].glyph, 'b');
        assert_eq!(glyphs[1].position, Point::new(1.0, 0.0));
    }

    #[test]
    fn test_nearest_qualifying_partner_wins() {
        let metrics = FixedAdvanceMetrics::new(0.5);
        let mut mapper = TrailGlyphMapper::new("a", 6.0);
        mapper.push(Point::new(0.0, 0.0));
        mapper.push(Point::new(4.0, 0.0));
        mapper.push(Point::new(0.0, 50.0));
        let glyphs = mapper.placements(&metrics);
        assert!(abs(glyphs[0].rotation) < 0.0001);
        assert!(abs(glyphs[0].size - 6.0) < 0.0001);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let metrics = FixedAdvanceMetrics::new(0.7);
        let mut mapper = TrailGlyphMapper::new("Sie hören nicht", 6.0);
        for i in 0..40 {
            let t = i as f64 * 0.3;
            mapper.push(Point::new(t.cos() * 30.0 + t * 4.0, t.sin() * 30.0));
        }
        let first = mapper.placements(&metrics);
        let second = mapper.placements(&metrics);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_places_nothing() {
        let metrics = FixedAdvanceMetrics::new(0.5);
        let mut mapper = TrailGlyphMapper::new("", 6.0);
        mapper.push(Point::new(0.0, 0.0));
        mapper.push(Point::new(100.0, 0.0));
        assert!(mapper.placements(&metrics).is_empty());
    }
}
