use crate::array::{ElementType, NumberArray};
use crate::core::axis::Axis;
use crate::core::meta_data::MonMeta;
use crate::histo::wire_slot;

/// 1-D binned histogram.
///
/// The data buffer holds `nbins + 2` slots: index 0 is the underflow bin,
/// `1..=nbins` the interior bins, `nbins + 1` the overflow bin. `axis_y` is a
/// display range only, auto-ranged by [`Histo1::set_bin_content`] unless an
/// operator has fixed it.
#[derive(Clone, Debug, PartialEq)]
pub struct Histo1 {
    pub(crate) meta: MonMeta,
    pub(crate) title: String,
    pub(crate) axis_x: Axis,
    pub(crate) axis_y: Axis,
    pub(crate) data: NumberArray,
}

impl Histo1 {
    pub fn new(
        element: ElementType,
        name: &str,
        title: &str,
        nbins: usize,
        min: f64,
        max: f64,
    ) -> Histo1 {
        Histo1 {
            meta: MonMeta::new(name),
            title: title.to_owned(),
            axis_x: Axis::new(nbins, min, max, ""),
            axis_y: Axis::new(1, 0.0, 1.0, ""),
            data: NumberArray::new(element, nbins + 2),
        }
    }

    pub fn char(name: &str, title: &str, nbins: usize, min: f64, max: f64) -> Histo1 {
        Histo1::new(ElementType::Char, name, title, nbins, min, max)
    }
    pub fn short(name: &str, title: &str, nbins: usize, min: f64, max: f64) -> Histo1 {
        Histo1::new(ElementType::Short, name, title, nbins, min, max)
    }
    pub fn int(name: &str, title: &str, nbins: usize, min: f64, max: f64) -> Histo1 {
        Histo1::new(ElementType::Int, name, title, nbins, min, max)
    }
    pub fn float(name: &str, title: &str, nbins: usize, min: f64, max: f64) -> Histo1 {
        Histo1::new(ElementType::Float, name, title, nbins, min, max)
    }
    pub fn double(name: &str, title: &str, nbins: usize, min: f64, max: f64) -> Histo1 {
        Histo1::new(ElementType::Double, name, title, nbins, min, max)
    }

    /// Wire type tag, e.g. `H1D`.
    pub fn data_type(&self) -> String {
        format!("H1{}", self.data.element_type().letter())
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

    pub fn nbins(&self) -> usize {
        self.axis_x.nbins()
    }

    /// Re-bin the x axis and reallocate the data buffer to match.
    pub fn set_axis_x(&mut self, nbins: usize, min: f64, max: f64) {
        self.axis_x.set_range(nbins, min, max);
        self.data.resize(nbins + 2);
    }

    /// Titles go through the axes directly.
    pub fn set_axis_x_title(&mut self, title: &str) {
        self.axis_x.set_title(title);
    }
    pub fn set_axis_y_title(&mut self, title: &str) {
        self.axis_y.set_title(title);
    }

    /// Route `x` to its slot and increment it. Values above the axis maximum
    /// are dropped; the overflow slot is only reachable through
    /// [`Histo1::set_over_flow`].
    pub fn fill(&mut self, x: f64) {
        if let Some(slot) = wire_slot(&self.axis_x, x) {
            let count = self.data.get(slot);
            self.data.set(slot, count + 1.0);
            self.meta.updated = true;
        }
    }

    /// Interior bin `k` (0-based), sentinel `-1` out of range.
    pub fn get_bin_content(&self, k: usize) -> f64 {
        if k >= self.nbins() {
            return -1.0;
        }
        self.data.get(k + 1)
    }

    /// Overwrite interior bin `k`, raising the display range to `1.1 * v`
    /// when that exceeds the current maximum and the axis is not fixed.
    pub fn set_bin_content(&mut self, k: usize, v: f64) {
        if k >= self.nbins() {
            return;
        }
        self.data.set(k + 1, v);
        if !self.axis_y.fixed_max() && v * 1.1 > self.axis_y.max() {
            self.axis_y.set_max(v * 1.1);
        }
        self.meta.updated = true;
    }

    pub fn get_under_flow(&self) -> f64 {
        self.data.get(0)
    }
    pub fn set_under_flow(&mut self, v: f64) {
        self.data.set(0, v);
    }
    pub fn get_over_flow(&self) -> f64 {
        self.data.get(self.nbins() + 1)
    }
    pub fn set_over_flow(&mut self, v: f64) {
        let slot = self.nbins() + 1;
        self.data.set(slot, v);
    }

    /// Sum of interior counts.
    pub fn get_entries(&self) -> f64 {
        (0..self.nbins()).map(|k| self.data.get(k + 1)).sum()
    }

    /// Bin-center mean over the interior bins; under/overflow excluded.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0;
        let mut weighted = 0.0;
        for k in 0..self.nbins() {
            let count = self.data.get(k + 1);
            sum += count;
            weighted += self.axis_x.bin_center(k) * count;
        }
        if sum == 0.0 {
            0.0
        } else {
            weighted / sum
        }
    }

    /// Zero every slot and clear the dirty flag.
    pub fn reset(&mut self) {
        self.data.clear();
        self.meta.updated = false;
    }
}
