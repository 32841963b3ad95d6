use crate::array::{ElementType, NumberArray};
use crate::core::axis::Axis;
use crate::core::meta_data::MonMeta;
use crate::histo::wire_slot;

/// 2-D binned histogram.
///
/// The data buffer is row-major over `(nbinsx + 2) * (nbinsy + 2)` slots with
/// the same under/overflow-slot convention per dimension as [`Histo1`];
/// flat index `(nx + 1) + (ny + 1) * (nbinsx + 2)` for interior bins
/// `(nx, ny)`. `axis_z` is the auto-ranged value range.
///
/// [`Histo1`]: crate::histo::Histo1
#[derive(Clone, Debug, PartialEq)]
pub struct Histo2 {
    pub(crate) meta: MonMeta,
    pub(crate) title: String,
    pub(crate) axis_x: Axis,
    pub(crate) axis_y: Axis,
    pub(crate) axis_z: Axis,
    pub(crate) data: NumberArray,
}

impl Histo2 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        element: ElementType,
        name: &str,
        title: &str,
        nbinsx: usize,
        xmin: f64,
        xmax: f64,
        nbinsy: usize,
        ymin: f64,
        ymax: f64,
    ) -> Histo2 {
        Histo2 {
            meta: MonMeta::new(name),
            title: title.to_owned(),
            axis_x: Axis::new(nbinsx, xmin, xmax, ""),
            axis_y: Axis::new(nbinsy, ymin, ymax, ""),
            axis_z: Axis::new(1, 0.0, 1.0, ""),
            data: NumberArray::new(element, (nbinsx + 2) * (nbinsy + 2)),
        }
    }

    /// Wire type tag, e.g. `H2D`.
    pub fn data_type(&self) -> String {
        format!("H2{}", self.data.element_type().letter())
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
    pub fn axis_z(&self) -> &Axis {
        &self.axis_z
    }
    pub fn axis_z_mut(&mut self) -> &mut Axis {
        &mut self.axis_z
    }
    pub fn data(&self) -> &NumberArray {
        &self.data
    }

    pub fn nbins_x(&self) -> usize {
        self.axis_x.nbins()
    }
    pub fn nbins_y(&self) -> usize {
        self.axis_y.nbins()
    }

    /// Flat data index from per-axis slot indices (0 = underflow).
    #[inline(always)]
    fn flat(&self, slot_x: usize, slot_y: usize) -> usize {
        slot_x + slot_y * (self.nbins_x() + 2)
    }

    /// Re-bin both axes and reallocate the data buffer to match.
    pub fn set_axes(
        &mut self,
        nbinsx: usize,
        xmin: f64,
        xmax: f64,
        nbinsy: usize,
        ymin: f64,
        ymax: f64,
    ) {
        self.axis_x.set_range(nbinsx, xmin, xmax);
        self.axis_y.set_range(nbinsy, ymin, ymax);
        self.data.resize((nbinsx + 2) * (nbinsy + 2));
    }

    /// The 1-D binning rule applied independently per axis; a coordinate
    /// above its axis maximum drops the whole fill.
    pub fn fill(&mut self, x: f64, y: f64) {
        let slot_x = wire_slot(&self.axis_x, x);
        let slot_y = wire_slot(&self.axis_y, y);
        if let (Some(sx), Some(sy)) = (slot_x, slot_y) {
            let idx = self.flat(sx, sy);
            let count = self.data.get(idx);
            self.data.set(idx, count + 1.0);
            self.meta.updated = true;
        }
    }

    /// Interior bin `(kx, ky)` (0-based), sentinel `-1` out of range.
    pub fn get_bin_content(&self, kx: usize, ky: usize) -> f64 {
        if kx >= self.nbins_x() || ky >= self.nbins_y() {
            return -1.0;
        }
        self.data.get(self.flat(kx + 1, ky + 1))
    }

    /// Overwrite interior bin `(kx, ky)`, raising the value range to
    /// `1.05 * v` when that exceeds the current maximum and `axis_z` is not
    /// fixed.
    pub fn set_bin_content(&mut self, kx: usize, ky: usize, v: f64) {
        if kx >= self.nbins_x() || ky >= self.nbins_y() {
            return;
        }
        let idx = self.flat(kx + 1, ky + 1);
        self.data.set(idx, v);
        if !self.axis_z.fixed_max() && v * 1.05 > self.axis_z.max() {
            self.axis_z.set_max(v * 1.05);
        }
        self.meta.updated = true;
    }

    /// Bin-center mean along x, marginalized over y; flows excluded.
    pub fn mean_x(&self) -> f64 {
        let mut sum = 0.0;
        let mut weighted = 0.0;
        for kx in 0..self.nbins_x() {
            let mut column = 0.0;
            for ky in 0..self.nbins_y() {
                column += self.data.get(self.flat(kx + 1, ky + 1));
            }
            sum += column;
            weighted += self.axis_x.bin_center(kx) * column;
        }
        if sum == 0.0 {
            0.0
        } else {
            weighted / sum
        }
    }

    /// Bin-center mean along y, marginalized over x; flows excluded.
    pub fn mean_y(&self) -> f64 {
        let mut sum = 0.0;
        let mut weighted = 0.0;
        for ky in 0..self.nbins_y() {
            let mut row = 0.0;
            for kx in 0..self.nbins_x() {
                row += self.data.get(self.flat(kx + 1, ky + 1));
            }
            sum += row;
            weighted += self.axis_y.bin_center(ky) * row;
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
