use crate::params::SurfaceParameters;
use crate::surface::frame::{saddle_terms, AxisFrame};
use crate::surface::{Axis, CylinderKind, SurfaceKind};

/// Symbolic squared term for one coordinate: `(x-h)²/a²`.
fn sym_term(axis: Axis) -> String {
    format!(
        "({}-{})²/{}²",
        axis.letter(),
        axis.offset_symbol(),
        axis.semi_axis_symbol()
    )
}

/// Squared term with the parameter values substituted: `(x-0.5)²/2²`.
fn num_term(axis: Axis, params: &SurfaceParameters) -> String {
    format!(
        "({}-{})²/{}²",
        axis.letter(),
        params.offset(axis),
        params.semi_axis(axis)
    )
}

/// Canonical (symbolic) equation of the family in `(x-h), (y-k), (z-l)`
/// form, specific to the orientation.
pub(crate) fn canonical(kind: SurfaceKind, axis: Axis) -> String {
    let f = AxisFrame::for_axis(axis);
    match kind {
        SurfaceKind::Ellipsoid => format!(
            "{} + {} + {} = 1",
            sym_term(Axis::X),
            sym_term(Axis::Y),
            sym_term(Axis::Z)
        ),
        SurfaceKind::EllipticCone => format!(
            "{} + {} = {}",
            sym_term(f.u),
            sym_term(f.v),
            sym_term(f.solved)
        ),
        SurfaceKind::HyperboloidOneSheet => format!(
            "{} + {} - {} = 1",
            sym_term(f.u),
            sym_term(f.v),
            sym_term(f.solved)
        ),
        SurfaceKind::HyperboloidTwoSheets => format!(
            "{} - {} - {} = 1",
            sym_term(f.solved),
            sym_term(f.u),
            sym_term(f.v)
        ),
        SurfaceKind::EllipticParaboloid => format!(
            "{} - {} = {}[{} + {}]",
            f.solved.letter(),
            f.solved.offset_symbol(),
            f.solved.semi_axis_symbol(),
            sym_term(f.u),
            sym_term(f.v)
        ),
        SurfaceKind::HyperbolicParaboloid => {
            let (pos, neg) = saddle_terms(axis);
            format!(
                "{} - {} = {}[{} - {}]",
                f.solved.letter(),
                f.solved.offset_symbol(),
                f.solved.semi_axis_symbol(),
                sym_term(pos),
                sym_term(neg)
            )
        }
        SurfaceKind::Cylinder(CylinderKind::Elliptic) => format!(
            "{} + {} = 1, {} extends infinitely",
            sym_term(f.u),
            sym_term(f.v),
            f.solved.letter()
        ),
        SurfaceKind::Cylinder(CylinderKind::Hyperbolic) => format!(
            "{} - {} = 1, {} extends infinitely",
            sym_term(f.u),
            sym_term(f.v),
            f.solved.letter()
        ),
        SurfaceKind::Cylinder(CylinderKind::Parabolic) => format!(
            "({}-{})² = 4p·({}-{}), {} extends infinitely",
            f.v.letter(),
            f.v.offset_symbol(),
            f.u.letter(),
            f.u.offset_symbol(),
            f.solved.letter()
        ),
    }
}

/// The canonical equation with the parameter values substituted.
///
/// Values render in minimal decimal form (`2²`, `1.5²`, `(x-0)`), matching
/// the application's equation readout.
pub(crate) fn substituted(kind: SurfaceKind, axis: Axis, params: &SurfaceParameters) -> String {
    let f = AxisFrame::for_axis(axis);
    let s = params.semi_axis(f.solved);
    let o = params.offset(f.solved);
    match kind {
        SurfaceKind::Ellipsoid => format!(
            "{} + {} + {} = 1",
            num_term(Axis::X, params),
            num_term(Axis::Y, params),
            num_term(Axis::Z, params)
        ),
        SurfaceKind::EllipticCone => format!(
            "{} + {} = {}",
            num_term(f.u, params),
            num_term(f.v, params),
            num_term(f.solved, params)
        ),
        SurfaceKind::HyperboloidOneSheet => format!(
            "{} + {} - {} = 1",
            num_term(f.u, params),
            num_term(f.v, params),
            num_term(f.solved, params)
        ),
        SurfaceKind::HyperboloidTwoSheets => format!(
            "{} - {} - {} = 1",
            num_term(f.solved, params),
            num_term(f.u, params),
            num_term(f.v, params)
        ),
        SurfaceKind::EllipticParaboloid => format!(
            "{} = {s}[{} + {}] + {o}",
            f.solved.letter(),
            num_term(f.u, params),
            num_term(f.v, params)
        ),
        SurfaceKind::HyperbolicParaboloid => {
            let (pos, neg) = saddle_terms(axis);
            format!(
                "{} = {s}[{} - {}] + {o}",
                f.solved.letter(),
                num_term(pos, params),
                num_term(neg, params)
            )
        }
        SurfaceKind::Cylinder(CylinderKind::Elliptic) => format!(
            "{} + {} = 1",
            num_term(f.u, params),
            num_term(f.v, params)
        ),
        SurfaceKind::Cylinder(CylinderKind::Hyperbolic) => format!(
            "{} - {} = 1",
            num_term(f.u, params),
            num_term(f.v, params)
        ),
        SurfaceKind::Cylinder(CylinderKind::Parabolic) => format!(
            "({}-{})² = 4·{}·({}-{})",
            f.v.letter(),
            params.offset(f.v),
            params.p(),
            f.u.letter(),
            params.offset(f.u)
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn centered(a: f64, b: f64, c: f64) -> SurfaceParameters {
        SurfaceParameters::new(a, b, c, 0.0, 0.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn ellipsoid_substitution_renders_minimal_decimals() {
        let p = centered(2.0, 1.5, 1.0);
        assert_eq!(
            substituted(SurfaceKind::Ellipsoid, Axis::Z, &p),
            "(x-0)²/2² + (y-0)²/1.5² + (z-0)²/1² = 1"
        );
    }

    #[test]
    fn ellipsoid_canonical_form() {
        assert_eq!(
            canonical(SurfaceKind::Ellipsoid, Axis::Z),
            "(x-h)²/a² + (y-k)²/b² + (z-l)²/c² = 1"
        );
    }

    #[test]
    fn cone_canonical_per_orientation() {
        assert_eq!(
            canonical(SurfaceKind::EllipticCone, Axis::Z),
            "(x-h)²/a² + (y-k)²/b² = (z-l)²/c²"
        );
        assert_eq!(
            canonical(SurfaceKind::EllipticCone, Axis::Y),
            "(x-h)²/a² + (z-l)²/c² = (y-k)²/b²"
        );
        assert_eq!(
            canonical(SurfaceKind::EllipticCone, Axis::X),
            "(y-k)²/b² + (z-l)²/c² = (x-h)²/a²"
        );
    }

    #[test]
    fn hyperboloid_canonical_forms() {
        assert_eq!(
            canonical(SurfaceKind::HyperboloidOneSheet, Axis::Z),
            "(x-h)²/a² + (y-k)²/b² - (z-l)²/c² = 1"
        );
        assert_eq!(
            canonical(SurfaceKind::HyperboloidTwoSheets, Axis::Z),
            "(z-l)²/c² - (x-h)²/a² - (y-k)²/b² = 1"
        );
        assert_eq!(
            canonical(SurfaceKind::HyperboloidTwoSheets, Axis::X),
            "(x-h)²/a² - (y-k)²/b² - (z-l)²/c² = 1"
        );
    }

    #[test]
    fn paraboloid_canonical_forms() {
        assert_eq!(
            canonical(SurfaceKind::EllipticParaboloid, Axis::Z),
            "z - l = c[(x-h)²/a² + (y-k)²/b²]"
        );
        assert_eq!(
            canonical(SurfaceKind::HyperbolicParaboloid, Axis::Z),
            "z - l = c[(y-k)²/b² - (x-h)²/a²]"
        );
        assert_eq!(
            canonical(SurfaceKind::HyperbolicParaboloid, Axis::X),
            "x - h = a[(y-k)²/b² - (z-l)²/c²]"
        );
    }

    #[test]
    fn cylinder_canonical_forms() {
        assert_eq!(
            canonical(SurfaceKind::Cylinder(CylinderKind::Elliptic), Axis::Z),
            "(x-h)²/a² + (y-k)²/b² = 1, z extends infinitely"
        );
        assert_eq!(
            canonical(SurfaceKind::Cylinder(CylinderKind::Hyperbolic), Axis::Z),
            "(x-h)²/a² - (y-k)²/b² = 1, z extends infinitely"
        );
        assert_eq!(
            canonical(SurfaceKind::Cylinder(CylinderKind::Parabolic), Axis::Z),
            "(y-k)² = 4p·(x-h), z extends infinitely"
        );
    }

    #[test]
    fn parabolic_cylinder_substitution() {
        let p = SurfaceParameters::new(1.0, 1.0, 1.0, 0.5, -1.0, 0.0, 2.0).unwrap();
        assert_eq!(
            substituted(SurfaceKind::Cylinder(CylinderKind::Parabolic), Axis::Z, &p),
            "(y--1)² = 4·2·(x-0.5)"
        );
    }

    #[test]
    fn offset_center_substitution() {
        let p = SurfaceParameters::new(2.0, 1.0, 1.0, 1.5, 0.0, -2.0, 1.0).unwrap();
        assert_eq!(
            substituted(SurfaceKind::HyperboloidOneSheet, Axis::Z, &p),
            "(x-1.5)²/2² + (y-0)²/1² - (z--2)²/1² = 1"
        );
    }

    #[test]
    fn elliptic_paraboloid_substitution() {
        let p = centered(1.0, 1.0, 2.0);
        assert_eq!(
            substituted(SurfaceKind::EllipticParaboloid, Axis::Z, &p),
            "z = 2[(x-0)²/1² + (y-0)²/1²] + 0"
        );
    }

    #[test]
    fn every_combination_has_both_forms() {
        let p = SurfaceParameters::default();
        let kinds = [
            SurfaceKind::Ellipsoid,
            SurfaceKind::EllipticCone,
            SurfaceKind::HyperboloidOneSheet,
            SurfaceKind::HyperboloidTwoSheets,
            SurfaceKind::EllipticParaboloid,
            SurfaceKind::HyperbolicParaboloid,
            SurfaceKind::Cylinder(CylinderKind::Elliptic),
            SurfaceKind::Cylinder(CylinderKind::Hyperbolic),
            SurfaceKind::Cylinder(CylinderKind::Parabolic),
        ];
        for kind in kinds {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                assert!(!canonical(kind, axis).is_empty());
                assert!(!substituted(kind, axis, &p).is_empty());
            }
        }
    }
}
