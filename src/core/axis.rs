use std::fmt;

/// One binned dimension: bin count, bounds, fixed-range locks, title.
///
/// `set_min`/`set_max` always take effect. The fixed flags are not enforced
/// here; they are honored by the callers that auto-range display axes (and by
/// [`Axis::copy_range_from`]), which is how auto-ranging coexists with ranges
/// frozen by an operator.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    nbins: usize,
    min: f64,
    max: f64,
    fixed_min: bool,
    fixed_max: bool,
    title: String,
}

impl Axis {
    pub fn new(nbins: usize, min: f64, max: f64, title: &str) -> Axis {
        Axis {
            nbins,
            min,
            max,
            fixed_min: false,
            fixed_max: false,
            title: title.to_owned(),
        }
    }

    #[inline(always)]
    pub fn nbins(&self) -> usize {
        self.nbins
    }
    #[inline(always)]
    pub fn min(&self) -> f64 {
        self.min
    }
    #[inline(always)]
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn fixed_min(&self) -> bool {
        self.fixed_min
    }
    pub fn fixed_max(&self) -> bool {
        self.fixed_max
    }

    /// Width of one bin.
    #[inline(always)]
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.nbins as f64
    }

    /// Center of interior bin `k` (0-based).
    #[inline(always)]
    pub fn bin_center(&self, k: usize) -> f64 {
        self.min + (k as f64 + 0.5) * self.bin_width()
    }

    pub fn set_range(&mut self, nbins: usize, min: f64, max: f64) {
        self.nbins = nbins;
        self.min = min;
        self.max = max;
    }

    pub fn set_nbins(&mut self, nbins: usize) {
        self.nbins = nbins;
    }

    pub fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn fix_min(&mut self, fixed: bool) {
        self.fixed_min = fixed;
    }

    pub fn fix_max(&mut self, fixed: bool) {
        self.fixed_max = fixed;
    }

    /// Full overwrite, fixed flags included.
    pub fn copy_from(&mut self, other: &Axis) {
        self.nbins = other.nbins;
        self.min = other.min;
        self.max = other.max;
        self.fixed_min = other.fixed_min;
        self.fixed_max = other.fixed_max;
        self.title.clone_from(&other.title);
    }

    /// Copy the bin count unconditionally and each bound only when the
    /// corresponding fixed flag is clear.
    pub fn copy_range_from(&mut self, other: &Axis) {
        self.nbins = other.nbins;
        if !self.fixed_min {
            self.min = other.min;
        }
        if !self.fixed_max {
            self.max = other.max;
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<axis nbins=\"{}\" min=\"{}\" max=\"{}\" title=\"{}\" />",
            self.nbins, self.min, self.max, self.title
        )
    }
}
