use geo_types::{CoordNum, Point};
use num_traits::real::Real;

/// Helper module for drawing point sequences with Nannou.
#[cfg(feature = "nannou")]
pub mod nannou;

/// Trait to convert line geometry into SVG path data.
pub mod svg;

/// Affine helpers (nalgebra) for composing nested local frames.
pub mod matrix;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

/// Direction and interpolation helpers used when walking a path.
pub trait PointHeading<T: CoordNum> {
    /// Angle (radians, `atan2(dy, dx)`) of the vector from `self` to `other`.
    fn heading_to(&self, other: &Point<T>) -> T;

    /// Linear interpolation from `self` towards `other`; `t == 0` is `self`.
    fn lerp(&self, other: &Point<T>, t: T) -> Point<T>;
}

impl<T> PointDistance<T> for Point<T>
    where T: CoordNum,
          T: Real {
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

impl<T> PointHeading<T> for Point<T>
    where T: CoordNum,
          T: Real {
    fn heading_to(&self, other: &Point<T>) -> T {
        (other.y() - self.y()).atan2(other.x() - self.x())
    }

    fn lerp(&self, other: &Point<T>, t: T) -> Point<T> {
        Point::new(
            self.x() + (other.x() - self.x()) * t,
            self.y() + (other.y() - self.y()) * t,
        )
    }
}
