use crate::math::Point3;

/// A structured `rows x cols` grid of sampled surface points.
///
/// Each sample carries an explicit validity flag. Invalid samples mark grid
/// points where the surface is undefined (a negative radicand when solving
/// for the principal coordinate); they hold a placeholder position and must
/// not be drawn.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    rows: usize,
    cols: usize,
    points: Vec<Point3>,
    valid: Vec<bool>,
}

impl SampleGrid {
    /// Builds a grid by evaluating `f` at every `(row, col)` cell.
    ///
    /// `f` returns `None` where the surface is undefined.
    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Option<Point3>,
    ) -> Self {
        let mut points = Vec::with_capacity(rows * cols);
        let mut valid = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                match f(row, col) {
                    Some(p) => {
                        points.push(p);
                        valid.push(true);
                    }
                    None => {
                        points.push(Point3::origin());
                        valid.push(false);
                    }
                }
            }
        }
        Self {
            rows,
            cols,
            points,
            valid,
        }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the sample at `(row, col)`, or `None` where the surface is
    /// undefined.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Point3> {
        assert!(row < self.rows && col < self.cols, "grid index out of range");
        let idx = row * self.cols + col;
        self.valid[idx].then(|| self.points[idx])
    }

    /// Whether the sample at `(row, col)` is part of the surface.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows && col < self.cols, "grid index out of range");
        self.valid[row * self.cols + col]
    }

    /// Iterates over all valid sample points in row-major order.
    pub fn valid_points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points
            .iter()
            .zip(&self.valid)
            .filter_map(|(p, &ok)| ok.then_some(*p))
    }

    /// Number of valid samples.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&ok| ok).count()
    }

    /// Whether every sample in the grid is valid.
    #[must_use]
    pub fn fully_valid(&self) -> bool {
        self.valid.iter().all(|&ok| ok)
    }
}

/// Sampled coordinates for one surface.
///
/// `secondary` is present exactly for the families solved as a `±` branch
/// pair: the elliptic cone, both hyperboloids, and the hyperbolic cylinder.
#[derive(Debug, Clone)]
pub struct SurfaceSample {
    primary: SampleGrid,
    secondary: Option<SampleGrid>,
}

impl SurfaceSample {
    pub(crate) fn single(primary: SampleGrid) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub(crate) fn pair(primary: SampleGrid, secondary: SampleGrid) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// The first (or only) branch.
    #[must_use]
    pub fn primary(&self) -> &SampleGrid {
        &self.primary
    }

    /// The second branch, for two-valued families.
    #[must_use]
    pub fn secondary(&self) -> Option<&SampleGrid> {
        self.secondary.as_ref()
    }

    /// Iterates over the one or two branches.
    pub fn branches(&self) -> impl Iterator<Item = &SampleGrid> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }
}
