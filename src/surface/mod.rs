pub(crate) mod frame;
mod grid;
mod sample;
mod trace;

pub use grid::{SampleGrid, SurfaceSample};
pub use trace::{Trace, TracePlane};

use std::fmt;

use crate::analysis::{self, Report};
use crate::params::{GridResolution, SampleDomain, SurfaceParameters};

/// A coordinate axis: the axis of symmetry for most families, or the axis
/// along which a cylinder is infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into an `[x, y, z]` coordinate triple.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The coordinate letter: `x`, `y` or `z`.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// The symbol of the semi-axis tied to this coordinate: `a`, `b` or `c`.
    #[must_use]
    pub fn semi_axis_symbol(self) -> &'static str {
        match self {
            Self::X => "a",
            Self::Y => "b",
            Self::Z => "c",
        }
    }

    /// The symbol of the center offset along this coordinate: `h`, `k` or
    /// `l`.
    #[must_use]
    pub fn offset_symbol(self) -> &'static str {
        match self {
            Self::X => "h",
            Self::Y => "k",
            Self::Z => "l",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Sub-kind of the cylinder family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CylinderKind {
    Elliptic,
    Hyperbolic,
    Parabolic,
}

impl CylinderKind {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Elliptic => "Elliptic",
            Self::Hyperbolic => "Hyperbolic",
            Self::Parabolic => "Parabolic",
        }
    }
}

/// The seven quadric surface families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Ellipsoid,
    EllipticCone,
    HyperboloidOneSheet,
    HyperboloidTwoSheets,
    EllipticParaboloid,
    HyperbolicParaboloid,
    Cylinder(CylinderKind),
}

impl SurfaceKind {
    /// Human-readable family name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ellipsoid => "Ellipsoid",
            Self::EllipticCone => "Elliptic Cone",
            Self::HyperboloidOneSheet => "Hyperboloid of One Sheet",
            Self::HyperboloidTwoSheets => "Hyperboloid of Two Sheets",
            Self::EllipticParaboloid => "Elliptic Paraboloid",
            Self::HyperbolicParaboloid => "Hyperbolic Paraboloid",
            Self::Cylinder(_) => "Cylinder",
        }
    }

    /// Whether sampling yields a `±` branch pair.
    #[must_use]
    pub fn is_two_valued(self) -> bool {
        matches!(
            self,
            Self::EllipticCone
                | Self::HyperboloidOneSheet
                | Self::HyperboloidTwoSheets
                | Self::Cylinder(CylinderKind::Hyperbolic)
        )
    }
}

/// A quadric surface: family, principal axis, and validated parameters.
///
/// The ellipsoid is symmetric in all three axes and ignores the axis field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadric {
    kind: SurfaceKind,
    axis: Axis,
    params: SurfaceParameters,
}

impl Quadric {
    /// Creates a quadric from a family, principal axis and parameters.
    #[must_use]
    pub fn new(kind: SurfaceKind, axis: Axis, params: SurfaceParameters) -> Self {
        Self { kind, axis, params }
    }

    /// The surface family.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// The principal axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The geometric parameters.
    #[must_use]
    pub fn params(&self) -> &SurfaceParameters {
        &self.params
    }

    /// Samples the surface over a structured grid.
    ///
    /// `domain` is the Cartesian window for the families sampled over free
    /// coordinates; the ellipsoid (angular parametrization) and the
    /// cylinder free axis (fixed extent) do not use it.
    #[must_use]
    pub fn sample(&self, resolution: GridResolution, domain: SampleDomain) -> SurfaceSample {
        match self.kind {
            SurfaceKind::Ellipsoid => sample::ellipsoid(&self.params, resolution),
            SurfaceKind::EllipticCone => {
                sample::elliptic_cone(&self.params, self.axis, resolution, domain)
            }
            SurfaceKind::HyperboloidOneSheet => {
                sample::hyperboloid_one_sheet(&self.params, self.axis, resolution, domain)
            }
            SurfaceKind::HyperboloidTwoSheets => {
                sample::hyperboloid_two_sheets(&self.params, self.axis, resolution, domain)
            }
            SurfaceKind::EllipticParaboloid => {
                sample::elliptic_paraboloid(&self.params, self.axis, resolution, domain)
            }
            SurfaceKind::HyperbolicParaboloid => {
                sample::hyperbolic_paraboloid(&self.params, self.axis, resolution, domain)
            }
            SurfaceKind::Cylinder(CylinderKind::Elliptic) => {
                sample::elliptic_cylinder(&self.params, self.axis, resolution)
            }
            SurfaceKind::Cylinder(CylinderKind::Hyperbolic) => {
                sample::hyperbolic_cylinder(&self.params, self.axis, resolution)
            }
            SurfaceKind::Cylinder(CylinderKind::Parabolic) => {
                sample::parabolic_cylinder(&self.params, self.axis, resolution, domain)
            }
        }
    }

    /// Generates the textual mathematical analysis of the surface.
    #[must_use]
    pub fn report(&self) -> Report {
        analysis::report(self)
    }

    /// Center-plane cross-section polylines.
    ///
    /// Non-empty only for the ellipsoid, whose three principal ellipses are
    /// returned as closed traces.
    #[must_use]
    pub fn traces(&self, resolution: GridResolution) -> Vec<Trace> {
        match self.kind {
            SurfaceKind::Ellipsoid => trace::ellipsoid_traces(&self.params, resolution),
            _ => Vec::new(),
        }
    }
}
