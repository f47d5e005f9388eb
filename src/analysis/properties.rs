use std::f64::consts::PI;

use crate::params::SurfaceParameters;
use crate::surface::frame::AxisFrame;
use crate::surface::{Axis, CylinderKind, SurfaceKind};

/// Invariant geometric properties of the surface, one bullet per line.
pub(crate) fn key_properties(
    kind: SurfaceKind,
    axis: Axis,
    params: &SurfaceParameters,
) -> Vec<String> {
    let f = AxisFrame::for_axis(axis);
    let center = format!(
        "({:.3}, {:.3}, {:.3})",
        params.h(),
        params.k(),
        params.l()
    );
    match kind {
        SurfaceKind::Ellipsoid => vec![
            "• Type: Closed, bounded surface".into(),
            "• Symmetry: Symmetric about all three coordinate planes".into(),
            format!(
                "• Volume: V = (4/3)π·a·b·c = {:.3}",
                (4.0 / 3.0) * PI * params.a() * params.b() * params.c()
            ),
            format!(
                "• Intercepts: x-axis ±{:.3}, y-axis ±{:.3}, z-axis ±{:.3} about the center",
                params.a(),
                params.b(),
                params.c()
            ),
            "• All cross-sections are ellipses".into(),
            "• Not a ruled surface".into(),
        ],
        SurfaceKind::EllipticCone => vec![
            "• Type: Unbounded surface (extends to infinity)".into(),
            format!("• Vertex: {center}"),
            format!("• Axis: {axis}-axis"),
            "• Ruled surface (contains straight lines)".into(),
            format!("• Cross-sections perpendicular to {axis}: ellipses"),
        ],
        SurfaceKind::HyperboloidOneSheet => vec![
            "• Type: Unbounded, connected (single sheet)".into(),
            format!("• Waist: perpendicular to the {axis}-axis at the center"),
            "• Doubly ruled surface".into(),
            format!("• Cross-sections perpendicular to {axis}: ellipses"),
            format!("• Cross-sections parallel to {axis}: hyperbolas"),
        ],
        SurfaceKind::HyperboloidTwoSheets => vec![
            "• Type: Unbounded, disconnected (two sheets)".into(),
            format!("• Gap between sheets along the {axis}-axis"),
            "• Not a ruled surface".into(),
            format!(
                "• Minimum distance between sheets: {:.3}",
                2.0 * params.semi_axis(f.solved)
            ),
            format!("• Opens along the {axis}-axis"),
        ],
        SurfaceKind::EllipticParaboloid => vec![
            "• Type: Unbounded, bowl-shaped".into(),
            format!("• Vertex: {center}"),
            format!("• Opens along the {axis}-axis"),
            "• Not a ruled surface".into(),
            format!("• Cross-sections perpendicular to {axis}: ellipses"),
            format!("• Cross-sections parallel to {axis}: parabolas"),
        ],
        SurfaceKind::HyperbolicParaboloid => vec![
            "• Type: Saddle-shaped surface (unbounded)".into(),
            format!("• Saddle point: {center}"),
            format!("• Principal axis: {axis}-axis"),
            "• Doubly ruled surface".into(),
            "• Contains hyperbolic and parabolic cross-sections".into(),
        ],
        SurfaceKind::Cylinder(CylinderKind::Elliptic) => vec![
            "• Type: Unbounded (extends infinitely)".into(),
            format!("• Extension: along the {axis}-axis"),
            "• Ruled surface (parallel lines)".into(),
            format!("• Cross-section perpendicular to {axis}: ellipse"),
            "• Constant cross-section along the length".into(),
        ],
        SurfaceKind::Cylinder(CylinderKind::Hyperbolic) => vec![
            "• Type: Unbounded, two separate sheets".into(),
            format!("• Extension: along the {axis}-axis"),
            "• Ruled surface (parallel lines)".into(),
            format!("• Cross-section perpendicular to {axis}: hyperbola"),
            "• Constant cross-section along the length".into(),
        ],
        SurfaceKind::Cylinder(CylinderKind::Parabolic) => vec![
            "• Type: Unbounded (extends infinitely)".into(),
            format!("• Extension: along the {axis}-axis"),
            format!("• Focal scale: p = {:.3}", params.p()),
            "• Ruled surface (parallel lines)".into(),
            format!("• Cross-section perpendicular to {axis}: parabola"),
        ],
    }
}

/// Canonical cross-section shapes for planes perpendicular and parallel to
/// the principal axis.
pub(crate) fn cross_sections(kind: SurfaceKind, axis: Axis) -> Vec<String> {
    match kind {
        SurfaceKind::Ellipsoid => vec![
            "• XY-plane (z = l): Ellipse".into(),
            "• XZ-plane (y = k): Ellipse".into(),
            "• YZ-plane (x = h): Ellipse".into(),
            "• All cross-sections parallel to the coordinate planes: Ellipses".into(),
        ],
        SurfaceKind::EllipticCone => vec![
            format!("• Perpendicular to {axis}-axis: Ellipses (growing from the vertex)"),
            format!("• Parallel to {axis}-axis: Hyperbolas or lines"),
            format!("• At the vertex ({axis} at center): Single point"),
        ],
        SurfaceKind::HyperboloidOneSheet => vec![
            format!("• Perpendicular to {axis}-axis: Ellipses"),
            "• At the center: Smallest ellipse (waist)".into(),
            format!("• Parallel to {axis}-axis: Hyperbolas"),
        ],
        SurfaceKind::HyperboloidTwoSheets => vec![
            format!("• Perpendicular to {axis}-axis: Ellipses (two separate)"),
            "• Near the center: No intersection (gap)".into(),
            format!("• Parallel to {axis}-axis: Hyperbolas"),
        ],
        SurfaceKind::EllipticParaboloid => vec![
            format!("• Perpendicular to {axis}-axis: Ellipses"),
            "• At the vertex: Single point".into(),
            format!("• Parallel to {axis}-axis: Parabolas"),
        ],
        SurfaceKind::HyperbolicParaboloid => vec![
            format!("• Along the {axis}-axis: Parabolas"),
            "• Perpendicular to the principal axis: Hyperbolas".into(),
            "• At the saddle point: Two intersecting lines".into(),
        ],
        SurfaceKind::Cylinder(sub) => {
            let section = match sub {
                CylinderKind::Elliptic => "Ellipse",
                CylinderKind::Hyperbolic => "Hyperbola",
                CylinderKind::Parabolic => "Parabola",
            };
            vec![
                format!("• Perpendicular to {axis}-axis: {section} (constant)"),
                format!("• Parallel to {axis}-axis: Parallel lines"),
                format!("• The surface is a translation of the {} along the axis", section.to_lowercase()),
            ]
        }
    }
}
