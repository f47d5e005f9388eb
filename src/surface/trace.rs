use std::f64::consts::TAU;

use crate::math::{linspace, Point3};
use crate::params::{GridResolution, SurfaceParameters};

/// The center plane a [`Trace`] lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePlane {
    /// The plane z = l.
    Xy,
    /// The plane y = k.
    Xz,
    /// The plane x = h.
    Yz,
}

/// A closed cross-section polyline in one of the three center planes.
///
/// Produced for the ellipsoid family, whose center-plane sections are the
/// three principal ellipses.
#[derive(Debug, Clone)]
pub struct Trace {
    /// The plane the polyline lies in.
    pub plane: TracePlane,
    /// The ordered vertices; first and last coincide.
    pub points: Vec<Point3>,
}

/// The three center-plane trace ellipses of an ellipsoid.
pub(super) fn ellipsoid_traces(
    params: &SurfaceParameters,
    resolution: GridResolution,
) -> Vec<Trace> {
    let thetas = linspace(0.0, TAU, resolution.get());
    let (a, b, c) = (params.a(), params.b(), params.c());
    let (h, k, l) = (params.h(), params.k(), params.l());

    let trace = |plane: TracePlane| {
        let points = thetas
            .iter()
            .map(|&t| match plane {
                TracePlane::Xy => Point3::new(a * t.cos() + h, b * t.sin() + k, l),
                TracePlane::Xz => Point3::new(a * t.cos() + h, k, c * t.sin() + l),
                TracePlane::Yz => Point3::new(h, b * t.cos() + k, c * t.sin() + l),
            })
            .collect();
        Trace { plane, points }
    };

    vec![
        trace(TracePlane::Xy),
        trace(TracePlane::Xz),
        trace(TracePlane::Yz),
    ]
}
