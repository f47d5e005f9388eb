/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// `n` must be at least 2; grid resolutions are validated before they
/// reach this function.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
