use crate::params::SurfaceParameters;
use crate::surface::frame::{saddle_terms, AxisFrame};
use crate::surface::{Axis, CylinderKind, SurfaceKind};

/// Step-by-step narrative of how the surface coordinates are computed.
///
/// This mirrors the generator exactly: any change to the sampling logic
/// needs a matching change here.
pub(crate) fn computation_steps(
    kind: SurfaceKind,
    axis: Axis,
    params: &SurfaceParameters,
) -> Vec<String> {
    let f = AxisFrame::for_axis(axis);
    match kind {
        SurfaceKind::Ellipsoid => vec![
            "Method: Parametric representation using spherical coordinates".into(),
            "Steps:".into(),
            "  1. Set φ ∈ [0, 2π] (azimuthal angle)".into(),
            "  2. Set θ ∈ [0, π] (polar angle)".into(),
            format!(
                "  3. Compute: x = {:.3}·sin(θ)·cos(φ) + {:.3}",
                params.a(),
                params.h()
            ),
            format!(
                "  4. Compute: y = {:.3}·sin(θ)·sin(φ) + {:.3}",
                params.b(),
                params.k()
            ),
            format!(
                "  5. Compute: z = {:.3}·cos(θ) + {:.3}",
                params.c(),
                params.l()
            ),
            "  6. Evaluate over the (φ, θ) grid".into(),
        ],
        SurfaceKind::EllipticCone => {
            let mut steps = solved_prelude("the cone equation", f, params, "");
            steps.extend(solved_branch_steps(f, params, ""));
            steps.push("  5. Emit both branches (they meet at the vertex)".into());
            steps
        }
        SurfaceKind::HyperboloidOneSheet => {
            let mut steps = solved_prelude("the hyperboloid equation", f, params, " - 1");
            steps.extend(solved_branch_steps(f, params, "  (valid when r² ≥ 0)"));
            steps.push("  5. Emit both branches; samples with r² < 0 are masked".into());
            steps
        }
        SurfaceKind::HyperboloidTwoSheets => {
            let mut steps = vec![
                format!(
                    "Method: Solve for {} from the two-sheet hyperboloid equation",
                    f.solved.letter()
                ),
                "Steps:".into(),
                format!(
                    "  1. Sample a grid over {} and {}",
                    f.u.letter(),
                    f.v.letter()
                ),
                format!(
                    "  2. Calculate: r² = 1 + {} + {}",
                    numeric_term(f.u, params),
                    numeric_term(f.v, params)
                ),
            ];
            steps.extend(solved_branch_steps(f, params, ""));
            steps.push("  5. Emit both disconnected sheets".into());
            steps
        }
        SurfaceKind::EllipticParaboloid => vec![
            "Method: Direct computation from the paraboloid equation".into(),
            "Steps:".into(),
            format!(
                "  1. Sample a grid over {} and {}",
                f.u.letter(),
                f.v.letter()
            ),
            format!("  2. Calculate: u = {}", numeric_term(f.u, params)),
            format!("  3. Calculate: v = {}", numeric_term(f.v, params)),
            format!(
                "  4. Compute: {} = {:.3}·(u + v) + {:.3}",
                f.solved.letter(),
                params.semi_axis(f.solved),
                params.offset(f.solved)
            ),
            format!(
                "  5. Evaluate over the grid (opens along the {}-axis)",
                f.solved.letter()
            ),
        ],
        SurfaceKind::HyperbolicParaboloid => {
            let (pos, neg) = saddle_terms(axis);
            vec![
                "Method: Direct computation (saddle surface)".into(),
                "Steps:".into(),
                format!(
                    "  1. Sample a grid over {} and {}",
                    f.u.letter(),
                    f.v.letter()
                ),
                format!("  2. Calculate: u = {}", numeric_term(pos, params)),
                format!("  3. Calculate: v = {}", numeric_term(neg, params)),
                format!(
                    "  4. Compute: {} = {:.3}·(u - v) + {:.3}",
                    f.solved.letter(),
                    params.semi_axis(f.solved),
                    params.offset(f.solved)
                ),
                "  5. Evaluate over the grid (saddle-shaped surface)".into(),
            ]
        }
        SurfaceKind::Cylinder(CylinderKind::Elliptic) => vec![
            "Method: Parametric cylindrical representation".into(),
            "Steps:".into(),
            "  1. Set θ ∈ [0, 2π] (angular parameter)".into(),
            format!(
                "  2. Sample {} over [-10, 10] (free axis)",
                f.solved.letter()
            ),
            format!(
                "  3. Compute: {} = {:.3}·cos(θ) + {:.3}",
                f.u.letter(),
                params.semi_axis(f.u),
                params.offset(f.u)
            ),
            format!(
                "  4. Compute: {} = {:.3}·sin(θ) + {:.3}",
                f.v.letter(),
                params.semi_axis(f.v),
                params.offset(f.v)
            ),
            format!(
                "  5. {} varies freely (extends infinitely)",
                f.solved.letter()
            ),
            format!("  6. Evaluate over the (θ, {}) grid", f.solved.letter()),
        ],
        SurfaceKind::Cylinder(CylinderKind::Hyperbolic) => vec![
            "Method: Hyperbolic parametrization (cosh/sinh)".into(),
            "Steps:".into(),
            "  1. Set t ∈ [-2, 2] (hyperbolic parameter)".into(),
            format!(
                "  2. Sample {} over [-10, 10] (free axis)",
                f.solved.letter()
            ),
            format!(
                "  3. Compute: {} = ±{:.3}·cosh(t) + {:.3}",
                f.u.letter(),
                params.semi_axis(f.u),
                params.offset(f.u)
            ),
            format!(
                "  4. Compute: {} = ±{:.3}·sinh(t) + {:.3}",
                f.v.letter(),
                params.semi_axis(f.v),
                params.offset(f.v)
            ),
            "  5. Emit both branches (two separate sheets)".into(),
        ],
        SurfaceKind::Cylinder(CylinderKind::Parabolic) => vec![
            format!(
                "Method: Solve for {} from the parabola equation",
                f.u.letter()
            ),
            "Steps:".into(),
            format!("  1. Sample {} over the display range", f.v.letter()),
            format!(
                "  2. Sample {} over [-10, 10] (free axis)",
                f.solved.letter()
            ),
            format!(
                "  3. Compute: {} = ({}-{:.3})²/(4·{:.3}) + {:.3}",
                f.u.letter(),
                f.v.letter(),
                params.offset(f.v),
                params.p(),
                params.offset(f.u)
            ),
            format!(
                "  4. {} varies freely (extends infinitely)",
                f.solved.letter()
            ),
        ],
    }
}

/// `(x-0.000)²/2.000²` style term used inside the narrative.
fn numeric_term(axis: Axis, params: &SurfaceParameters) -> String {
    format!(
        "({}-{:.3})²/{:.3}²",
        axis.letter(),
        params.offset(axis),
        params.semi_axis(axis)
    )
}

/// Common opening of the solved radical families.
fn solved_prelude(
    equation: &str,
    f: AxisFrame,
    params: &SurfaceParameters,
    shift_suffix: &str,
) -> Vec<String> {
    vec![
        format!("Method: Solve for {} from {equation}", f.solved.letter()),
        "Steps:".into(),
        format!(
            "  1. Sample a grid over {} and {}",
            f.u.letter(),
            f.v.letter()
        ),
        format!(
            "  2. Calculate: r² = {} + {}{shift_suffix}",
            numeric_term(f.u, params),
            numeric_term(f.v, params)
        ),
    ]
}

/// The `±s·√(r²) + offset` step pair shared by the radical families.
fn solved_branch_steps(f: AxisFrame, params: &SurfaceParameters, note: &str) -> Vec<String> {
    let w = f.solved.letter();
    let s = params.semi_axis(f.solved);
    let o = params.offset(f.solved);
    vec![
        format!("  3. Compute: {w}₊ = {s:.3}·√(r²) + {o:.3}{note}"),
        format!("  4. Compute: {w}₋ = -{s:.3}·√(r²) + {o:.3}"),
    ]
}
