use geo_types::{CoordNum, Point};
use nannou::draw::Drawing;
use nannou::draw::primitive::{Path, PathStroke};
use nannou::geom::Point2;
use num_traits::ToPrimitive;

/// Converts sketch-space points (origin top-left, y pointing down) into
/// Nannou's centred, y-up window space.
pub fn to_window_space<T: CoordNum + ToPrimitive>(p: &Point<T>, width: f32, height: f32) -> Point2 {
    Point2::new(
        p.x().to_f32().unwrap_or(0.0) - width / 2.0,
        height / 2.0 - p.y().to_f32().unwrap_or(0.0),
    )
}

pub trait NannouDrawer<'a, T> {
    fn draw_from_points(self, points: &[Point<T>], width: f32, height: f32) -> Drawing<'a, Path>
        where T: CoordNum + ToPrimitive;
}

impl<'a, T> NannouDrawer<'a, T> for Drawing<'a, PathStroke>
{
    fn draw_from_points(self, points: &[Point<T>], width: f32, height: f32) -> Drawing<'a, Path>
        where T: CoordNum + ToPrimitive {
        self.points(
            points.iter()
                .map(|p| to_window_space(p, width, height))
                .collect::<Vec<Point2>>())
    }
}
