use std::f64::consts::{PI, TAU};

use crate::math::linspace;
use crate::params::{GridResolution, SampleDomain, SurfaceParameters};

use super::frame::{saddle_terms, AxisFrame};
use super::grid::{SampleGrid, SurfaceSample};
use super::Axis;

/// Span of the free axis for cylinders, which are unbounded along it.
/// Fixed regardless of the supplied display range.
const CYLINDER_EXTENT: f64 = 10.0;

/// Window of the cosh/sinh parameter for hyperbolic branches.
const HYPERBOLIC_SPAN: f64 = 2.0;

/// Spherical parametrization of the ellipsoid; orientation is irrelevant.
///
/// `x = a sin(θ) cos(φ) + h`, `y = b sin(θ) sin(φ) + k`, `z = c cos(θ) + l`
/// over φ ∈ [0, 2π] (columns) and θ ∈ [0, π] (rows).
pub(super) fn ellipsoid(params: &SurfaceParameters, resolution: GridResolution) -> SurfaceSample {
    let n = resolution.get();
    let phis = linspace(0.0, TAU, n);
    let thetas = linspace(0.0, PI, n);
    let (a, b, c) = (params.a(), params.b(), params.c());
    let (h, k, l) = (params.h(), params.k(), params.l());

    let grid = SampleGrid::from_fn(n, n, |row, col| {
        let phi = phis[col];
        let theta = thetas[row];
        Some(crate::math::Point3::new(
            a * theta.sin() * phi.cos() + h,
            b * theta.sin() * phi.sin() + k,
            c * theta.cos() + l,
        ))
    });
    SurfaceSample::single(grid)
}

/// Elliptic cone: radicand `t_u + t_v`, always defined, branches meet at
/// the vertex.
pub(super) fn elliptic_cone(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    solved_branches(params, axis, resolution, domain, 0.0)
}

/// Hyperboloid of one sheet: radicand `t_u + t_v - 1`; samples inside the
/// waist (negative radicand) are masked.
pub(super) fn hyperboloid_one_sheet(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    solved_branches(params, axis, resolution, domain, -1.0)
}

/// Hyperboloid of two sheets: radicand `1 + t_u + t_v`, always at least 1,
/// so the sheets never touch.
pub(super) fn hyperboloid_two_sheets(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    solved_branches(params, axis, resolution, domain, 1.0)
}

/// Shared two-branch solver for the radical families.
///
/// Samples the two free axes over the display domain and solves the
/// principal coordinate as `±s·√(t_u + t_v + shift) + offset`, where
/// `t_w = (w - offset_w)² / s_w²`. A negative radicand masks the sample.
fn solved_branches(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
    shift: f64,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let n = resolution.get();
    let us = linspace(domain.min(), domain.max(), n);
    let vs = linspace(domain.min(), domain.max(), n);

    let (su, ou) = (params.semi_axis(frame.u), params.offset(frame.u));
    let (sv, ov) = (params.semi_axis(frame.v), params.offset(frame.v));
    let (s, o) = (params.semi_axis(frame.solved), params.offset(frame.solved));

    let branch = |sign: f64| {
        SampleGrid::from_fn(n, n, |row, col| {
            let u = us[col];
            let v = vs[row];
            let tu = (u - ou) / su;
            let tv = (v - ov) / sv;
            let radicand = tu * tu + tv * tv + shift;
            (radicand >= 0.0).then(|| frame.point(u, v, sign * s * radicand.sqrt() + o))
        })
    };
    SurfaceSample::pair(branch(1.0), branch(-1.0))
}

/// Elliptic paraboloid: `solved = s·(t_u + t_v) + offset`, where `s` is
/// the semi-axis of the solved coordinate.
pub(super) fn elliptic_paraboloid(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let n = resolution.get();
    let us = linspace(domain.min(), domain.max(), n);
    let vs = linspace(domain.min(), domain.max(), n);

    let (su, ou) = (params.semi_axis(frame.u), params.offset(frame.u));
    let (sv, ov) = (params.semi_axis(frame.v), params.offset(frame.v));
    let (s, o) = (params.semi_axis(frame.solved), params.offset(frame.solved));

    let grid = SampleGrid::from_fn(n, n, |row, col| {
        let u = us[col];
        let v = vs[row];
        let tu = (u - ou) / su;
        let tv = (v - ov) / sv;
        Some(frame.point(u, v, s * (tu * tu + tv * tv) + o))
    });
    SurfaceSample::single(grid)
}

/// Hyperbolic paraboloid (saddle): `solved = s·(t_pos - t_neg) + offset`,
/// with the (pos, neg) assignment from [`saddle_terms`].
pub(super) fn hyperbolic_paraboloid(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let (pos, neg) = saddle_terms(axis);
    let n = resolution.get();
    let us = linspace(domain.min(), domain.max(), n);
    let vs = linspace(domain.min(), domain.max(), n);

    let (s, o) = (params.semi_axis(frame.solved), params.offset(frame.solved));

    let grid = SampleGrid::from_fn(n, n, |row, col| {
        let u = us[col];
        let v = vs[row];
        let coord = |w: Axis| if w == frame.u { u } else { v };
        let term = |w: Axis| {
            let t = (coord(w) - params.offset(w)) / params.semi_axis(w);
            t * t
        };
        Some(frame.point(u, v, s * (term(pos) - term(neg)) + o))
    });
    SurfaceSample::single(grid)
}

/// Elliptic cylinder: θ ∈ [0, 2π] against the free axis, radii from the
/// two transverse semi-axes.
pub(super) fn elliptic_cylinder(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let n = resolution.get();
    let thetas = linspace(0.0, TAU, n);
    let sweeps = linspace(-CYLINDER_EXTENT, CYLINDER_EXTENT, n);

    let (su, ou) = (params.semi_axis(frame.u), params.offset(frame.u));
    let (sv, ov) = (params.semi_axis(frame.v), params.offset(frame.v));
    let of = params.offset(frame.solved);

    let grid = SampleGrid::from_fn(n, n, |row, col| {
        let theta = thetas[col];
        let sweep = sweeps[row];
        Some(frame.point(
            su * theta.cos() + ou,
            sv * theta.sin() + ov,
            sweep + of,
        ))
    });
    SurfaceSample::single(grid)
}

/// Hyperbolic cylinder: two branches `±(s_u·cosh t, s_v·sinh t)` against
/// the free axis; the parametrization is defined everywhere.
pub(super) fn hyperbolic_cylinder(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let n = resolution.get();
    let ts = linspace(-HYPERBOLIC_SPAN, HYPERBOLIC_SPAN, n);
    let sweeps = linspace(-CYLINDER_EXTENT, CYLINDER_EXTENT, n);

    let (su, ou) = (params.semi_axis(frame.u), params.offset(frame.u));
    let (sv, ov) = (params.semi_axis(frame.v), params.offset(frame.v));
    let of = params.offset(frame.solved);

    let branch = |sign: f64| {
        SampleGrid::from_fn(n, n, |row, col| {
            let t = ts[col];
            let sweep = sweeps[row];
            Some(frame.point(
                sign * su * t.cosh() + ou,
                sign * sv * t.sinh() + ov,
                sweep + of,
            ))
        })
    };
    SurfaceSample::pair(branch(1.0), branch(-1.0))
}

/// Parabolic cylinder: the first transverse coordinate is solved from the
/// second as `(w - offset_w)²/(4p) + offset`, swept along the free axis.
/// The sampled transverse coordinate uses the display domain.
pub(super) fn parabolic_cylinder(
    params: &SurfaceParameters,
    axis: Axis,
    resolution: GridResolution,
    domain: SampleDomain,
) -> SurfaceSample {
    let frame = AxisFrame::for_axis(axis);
    let n = resolution.get();
    let ws = linspace(domain.min(), domain.max(), n);
    let sweeps = linspace(-CYLINDER_EXTENT, CYLINDER_EXTENT, n);

    let ou = params.offset(frame.u);
    let ov = params.offset(frame.v);
    let of = params.offset(frame.solved);
    let p = params.p();

    let grid = SampleGrid::from_fn(n, n, |row, col| {
        let w = ws[col];
        let sweep = sweeps[row];
        let solved = (w - ov) * (w - ov) / (4.0 * p) + ou;
        Some(frame.point(solved, w, sweep + of))
    });
    SurfaceSample::single(grid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn params(a: f64, b: f64, c: f64) -> SurfaceParameters {
        SurfaceParameters::new(a, b, c, 0.0, 0.0, 0.0, 1.0).unwrap()
    }

    fn res(n: usize) -> GridResolution {
        GridResolution::new(n).unwrap()
    }

    #[test]
    fn ellipsoid_samples_satisfy_canonical_equation() {
        let p = SurfaceParameters::new(2.0, 1.5, 1.0, 0.5, -1.0, 2.0, 1.0).unwrap();
        let sample = ellipsoid(&p, res(21));
        assert!(sample.primary().fully_valid());
        for pt in sample.primary().valid_points() {
            let lhs = ((pt.x - 0.5) / 2.0).powi(2)
                + ((pt.y + 1.0) / 1.5).powi(2)
                + ((pt.z - 2.0) / 1.0).powi(2);
            assert_relative_eq!(lhs, 1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn cone_branches_meet_at_vertex_height() {
        let p = params(1.0, 1.0, 2.0);
        let sample = elliptic_cone(&p, Axis::Z, res(11), SampleDomain::default());
        // Domain center (row 5, col 5) is (0, 0): both branches give z = 0.
        let top = sample.primary().get(5, 5).unwrap();
        let bottom = sample.secondary().unwrap().get(5, 5).unwrap();
        assert_relative_eq!(top.z, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(bottom.z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn cone_samples_satisfy_canonical_equation() {
        let p = params(2.0, 1.5, 1.0);
        let sample = elliptic_cone(&p, Axis::Z, res(15), SampleDomain::default());
        for branch in sample.branches() {
            assert!(branch.fully_valid());
            for pt in branch.valid_points() {
                let lhs = (pt.x / 2.0).powi(2) + (pt.y / 1.5).powi(2);
                let rhs = (pt.z / 1.0).powi(2);
                assert_relative_eq!(lhs, rhs, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn one_sheet_masks_exactly_inside_waist() {
        let p = params(2.0, 1.5, 1.0);
        let n = 25;
        let domain = SampleDomain::default();
        let sample = hyperboloid_one_sheet(&p, Axis::Z, res(n), domain);
        let us = linspace(domain.min(), domain.max(), n);
        for row in 0..n {
            for col in 0..n {
                let (x, y) = (us[col], us[row]);
                let radicand = (x / 2.0).powi(2) + (y / 1.5).powi(2) - 1.0;
                assert_eq!(
                    sample.primary().is_valid(row, col),
                    radicand >= 0.0,
                    "mask mismatch at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn one_sheet_unmasked_samples_satisfy_equation() {
        let p = params(2.0, 1.5, 1.0);
        let sample = hyperboloid_one_sheet(&p, Axis::Z, res(25), SampleDomain::default());
        for branch in sample.branches() {
            for pt in branch.valid_points() {
                let lhs = (pt.x / 2.0).powi(2) + (pt.y / 1.5).powi(2) - pt.z.powi(2);
                assert_relative_eq!(lhs, 1.0, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn one_sheet_oriented_x_masks_on_yz_waist() {
        let p = params(2.0, 1.5, 1.0);
        let sample = hyperboloid_one_sheet(&p, Axis::X, res(25), SampleDomain::default());
        for branch in sample.branches() {
            for pt in branch.valid_points() {
                let lhs = (pt.y / 1.5).powi(2) + pt.z.powi(2) - (pt.x / 2.0).powi(2);
                assert_relative_eq!(lhs, 1.0, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn two_sheets_are_never_masked_and_separated() {
        let p = params(1.0, 1.0, 2.0);
        let sample = hyperboloid_two_sheets(&p, Axis::Z, res(11), SampleDomain::default());
        assert!(sample.primary().fully_valid());
        assert!(sample.secondary().unwrap().fully_valid());
        // At the domain center the separation along z is exactly 2c.
        let top = sample.primary().get(5, 5).unwrap();
        let bottom = sample.secondary().unwrap().get(5, 5).unwrap();
        assert_relative_eq!(top.z - bottom.z, 4.0, epsilon = TOLERANCE);
    }

    #[test]
    fn two_sheets_separation_follows_principal_axis() {
        let p = params(3.0, 1.0, 1.0);
        let sample = hyperboloid_two_sheets(&p, Axis::X, res(11), SampleDomain::default());
        let right = sample.primary().get(5, 5).unwrap();
        let left = sample.secondary().unwrap().get(5, 5).unwrap();
        assert_relative_eq!(right.x - left.x, 6.0, epsilon = TOLERANCE);
    }

    #[test]
    fn elliptic_paraboloid_vertex_and_growth() {
        let p = SurfaceParameters::new(1.0, 1.0, 2.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        let sample = elliptic_paraboloid(&p, Axis::Z, res(11), SampleDomain::default());
        let vertex = sample.primary().get(5, 5).unwrap();
        assert_relative_eq!(vertex.z, 1.0, epsilon = TOLERANCE);
        for pt in sample.primary().valid_points() {
            let expected = 2.0 * (pt.x.powi(2) + pt.y.powi(2)) + 1.0;
            assert_relative_eq!(pt.z, expected, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn hyperbolic_paraboloid_matches_saddle_equation() {
        let p = params(2.0, 1.5, 1.0);
        let sample = hyperbolic_paraboloid(&p, Axis::Z, res(15), SampleDomain::default());
        for pt in sample.primary().valid_points() {
            let expected = (pt.y / 1.5).powi(2) - (pt.x / 2.0).powi(2);
            assert_relative_eq!(pt.z, expected, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn hyperbolic_paraboloid_x_orientation_term_order() {
        // Principal axis x: positive term is y, negative term is z.
        let p = params(1.0, 2.0, 4.0);
        let sample = hyperbolic_paraboloid(&p, Axis::X, res(15), SampleDomain::default());
        for pt in sample.primary().valid_points() {
            let expected = (pt.y / 2.0).powi(2) - (pt.z / 4.0).powi(2);
            assert_relative_eq!(pt.x, expected, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn elliptic_cylinder_cross_section_is_constant() {
        let p = SurfaceParameters::new(2.0, 1.5, 1.0, 1.0, -1.0, 0.0, 1.0).unwrap();
        let sample = elliptic_cylinder(&p, Axis::Z, res(17));
        for pt in sample.primary().valid_points() {
            let lhs = ((pt.x - 1.0) / 2.0).powi(2) + ((pt.y + 1.0) / 1.5).powi(2);
            assert_relative_eq!(lhs, 1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn elliptic_cylinder_free_axis_spans_fixed_extent() {
        let p = params(1.0, 1.0, 1.0);
        let sample = elliptic_cylinder(&p, Axis::Y, res(9));
        let ys: Vec<f64> = sample.primary().valid_points().map(|pt| pt.y).collect();
        let min = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min, -10.0, epsilon = TOLERANCE);
        assert_relative_eq!(max, 10.0, epsilon = TOLERANCE);
    }

    #[test]
    fn hyperbolic_cylinder_branches_satisfy_equation() {
        let p = params(2.0, 1.5, 1.0);
        let sample = hyperbolic_cylinder(&p, Axis::Z, res(13));
        assert!(sample.secondary().is_some());
        for branch in sample.branches() {
            for pt in branch.valid_points() {
                let lhs = (pt.x / 2.0).powi(2) - (pt.y / 1.5).powi(2);
                assert_relative_eq!(lhs, 1.0, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn parabolic_cylinder_solves_transverse_coordinate() {
        let p = SurfaceParameters::new(1.0, 1.0, 1.0, 0.5, 0.0, 0.0, 2.0).unwrap();
        let sample = parabolic_cylinder(&p, Axis::Z, res(13), SampleDomain::default());
        for pt in sample.primary().valid_points() {
            assert_relative_eq!(
                pt.y.powi(2),
                4.0 * 2.0 * (pt.x - 0.5),
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn parabolic_cylinder_oriented_x_solves_y_from_z() {
        let p = params(1.0, 1.0, 1.0);
        let sample = parabolic_cylinder(&p, Axis::X, res(13), SampleDomain::default());
        for pt in sample.primary().valid_points() {
            assert_relative_eq!(
                pt.z.powi(2),
                4.0 * pt.y,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }
}
