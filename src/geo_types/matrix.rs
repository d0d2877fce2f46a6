use geo_types::Point;
use nalgebra::Matrix3;
use nalgebra::{Affine2, Point2 as NPoint2, RealField};
use num_traits::Float;

/// Helper to create a translation matrix
pub fn translate_matrix<T>(tx: T, ty: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        T::one(),
        T::zero(),
        tx,
        T::zero(),
        T::one(),
        ty,
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Standard orientation: positive radians turn +x towards +y.
pub fn rotate_matrix<T>(radians: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        Float::cos(radians),
        Float::sin(radians).neg(),
        T::zero(),
        Float::sin(radians),
        Float::cos(radians),
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Apply an affine transform to a geo_types point.
pub fn transform_point(tx: &Affine2<f64>, point: &Point<f64>) -> Point<f64> {
    let p = tx * NPoint2::new(point.x(), point.y());
    Point::new(p.x, p.y)
}

/// Render the transform as an SVG `matrix(a b c d e f)` attribute value.
pub fn svg_matrix(tx: &Affine2<f64>) -> String {
    let m = tx.matrix();
    format!(
        "matrix({} {} {} {} {} {})",
        m[(0, 0)],
        m[(1, 0)],
        m[(0, 1)],
        m[(1, 1)],
        m[(0, 2)],
        m[(1, 2)]
    )
}
