use crate::error::{ParameterError, Result};
use crate::surface::Axis;

/// Geometric parameters of a quadric surface.
///
/// `a`, `b`, `c` are the semi-axis lengths tied to the x, y and z
/// coordinates; `(h, k, l)` is the center offset; `p` is the focal scale of
/// the parabolic cylinder and is ignored by every other family.
///
/// Values are validated at construction. Sampling and analysis accept this
/// type as-is and never re-validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParameters {
    a: f64,
    b: f64,
    c: f64,
    h: f64,
    k: f64,
    l: f64,
    p: f64,
}

impl SurfaceParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c` - Semi-axis lengths (must be positive)
    /// * `h`, `k`, `l` - Center offset (any finite value)
    /// * `p` - Focal scale for the parabolic cylinder (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if any of `a`, `b`, `c`,
    /// `p` is non-positive, or if any field is not a finite number.
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn new(a: f64, b: f64, c: f64, h: f64, k: f64, l: f64, p: f64) -> Result<Self> {
        for (name, value) in [
            ("a", a),
            ("b", b),
            ("c", c),
            ("h", h),
            ("k", k),
            ("l", l),
            ("p", p),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite {
                    parameter: name,
                    value,
                }
                .into());
            }
        }
        for (name, value) in [("a", a), ("b", b), ("c", c), ("p", p)] {
            if value <= 0.0 {
                return Err(ParameterError::NonPositive {
                    parameter: name,
                    value,
                }
                .into());
            }
        }
        Ok(Self {
            a,
            b,
            c,
            h,
            k,
            l,
            p,
        })
    }

    /// Semi-axis length tied to the x coordinate.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-axis length tied to the y coordinate.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Semi-axis length tied to the z coordinate.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Center offset along x.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Center offset along y.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Center offset along z.
    #[must_use]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Focal scale of the parabolic cylinder.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Semi-axis length tied to the given coordinate axis.
    #[must_use]
    pub fn semi_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.a,
            Axis::Y => self.b,
            Axis::Z => self.c,
        }
    }

    /// Center offset along the given coordinate axis.
    #[must_use]
    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.h,
            Axis::Y => self.k,
            Axis::Z => self.l,
        }
    }
}

impl Default for SurfaceParameters {
    /// A mid-size ellipsoid-friendly parameter set centered at the origin.
    fn default() -> Self {
        Self {
            a: 2.0,
            b: 1.5,
            c: 1.0,
            h: 0.0,
            k: 0.0,
            l: 0.0,
            p: 1.0,
        }
    }
}

/// Cartesian sampling window for families sampled over free coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDomain {
    min: f64,
    max: f64,
}

impl SampleDomain {
    /// Creates a validated sampling window.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        for (name, value) in [("range min", min), ("range max", max)] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite {
                    parameter: name,
                    value,
                }
                .into());
            }
        }
        if min >= max {
            return Err(ParameterError::EmptyDomain { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Lower bound of the window.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the window.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}

/// Number of samples per parametric dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResolution(usize);

impl GridResolution {
    /// Smallest usable resolution (one grid cell).
    pub const MIN: usize = 2;

    /// Creates a validated resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is below [`GridResolution::MIN`].
    pub fn new(samples: usize) -> Result<Self> {
        if samples < Self::MIN {
            return Err(ParameterError::ResolutionTooSmall {
                resolution: samples,
                min: Self::MIN,
            }
            .into());
        }
        Ok(Self(samples))
    }

    /// Number of samples per parametric dimension.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for GridResolution {
    /// Medium rendering quality.
    fn default() -> Self {
        Self(50)
    }
}
