use crate::array::{ElementType, NumberArray};
use crate::core::axis::Axis;
use crate::core::meta_data::MonMeta;

/// Parametric sample array, not a binned histogram.
///
/// `axis_x.nbins` is the point count; the data buffer holds the x values in
/// its first half and the y values in its second half. `axis_y` is the
/// auto-ranged display range over the y samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph1 {
    pub(crate) meta: MonMeta,
    pub(crate) title: String,
    pub(crate) axis_x: Axis,
    pub(crate) axis_y: Axis,
    pub(crate) data: NumberArray,
}

impl Graph1 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        element: ElementType,
        name: &str,
        title: &str,
        npoints: usize,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Graph1 {
        Graph1 {
            meta: MonMeta::new(name),
            title: title.to_owned(),
            axis_x: Axis::new(npoints, xmin, xmax, ""),
            axis_y: Axis::new(1, ymin, ymax, ""),
            data: NumberArray::new(element, 2 * npoints),
        }
    }

    /// Wire type tag, e.g. `g1D`.
    pub fn data_type(&self) -> String {
        format!("g1{}", self.data.element_type().letter())
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn meta(&self) -> &MonMeta {
        &self.meta
    }
    pub fn meta_mut(&mut self) -> &mut MonMeta {
        &mut self.meta
    }
    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }
    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }
    pub fn axis_y_mut(&mut self) -> &mut Axis {
        &mut self.axis_y
    }
    pub fn data(&self) -> &NumberArray {
        &self.data
    }

    pub fn npoints(&self) -> usize {
        self.axis_x.nbins()
    }

    /// Resize the point set and reallocate the data buffer to match.
    pub fn set_npoints(&mut self, npoints: usize) {
        self.axis_x.set_nbins(npoints);
        self.data.resize(2 * npoints);
    }

    pub fn get_point_x(&self, n: usize) -> f64 {
        if n >= self.npoints() {
            return -1.0;
        }
        self.data.get(n)
    }

    pub fn get_point_y(&self, n: usize) -> f64 {
        if n >= self.npoints() {
            return -1.0;
        }
        self.data.get(self.npoints() + n)
    }

    pub fn set_point_x(&mut self, n: usize, x: f64) {
        if n >= self.npoints() {
            return;
        }
        self.data.set(n, x);
        self.meta.updated = true;
    }

    pub fn set_point_y(&mut self, n: usize, y: f64) {
        if n >= self.npoints() {
            return;
        }
        let idx = self.npoints() + n;
        self.data.set(idx, y);
        self.meta.updated = true;
        self.auto_range_y();
    }

    pub fn set_point(&mut self, n: usize, x: f64, y: f64) {
        self.set_point_x(n, x);
        self.set_point_y(n, y);
    }

    /// Center the display range on the observed y samples with a 5% margin.
    /// Skipped entirely when both bounds are fixed; otherwise each bound
    /// respects its own fixed flag.
    pub fn auto_range_y(&mut self) {
        if self.axis_y.fixed_min() && self.axis_y.fixed_max() {
            return;
        }
        let n = self.npoints();
        if n == 0 {
            return;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for i in 0..n {
            let y = self.data.get(n + i);
            if y < lo {
                lo = y;
            }
            if y > hi {
                hi = y;
            }
        }
        let mid = (lo + hi) / 2.0;
        let half = (hi - lo) / 2.0;
        if !self.axis_y.fixed_min() {
            self.axis_y.set_min(mid - half * 1.05);
        }
        if !self.axis_y.fixed_max() {
            self.axis_y.set_max(mid + half * 1.05);
        }
    }

    /// Zero every sample and clear the dirty flag.
    pub fn reset(&mut self) {
        self.data.clear();
        self.meta.updated = false;
    }
}
