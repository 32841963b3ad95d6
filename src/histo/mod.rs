pub mod factory;
pub mod graph1;
pub mod histo1;
pub mod histo2;
pub mod mon_object;
pub mod timed_graph1;

pub use self::graph1::Graph1;
pub use self::histo1::Histo1;
pub use self::histo2::Histo2;
pub use self::mon_object::MonObject;
pub use self::timed_graph1::TimedGraph1;

use crate::core::axis::Axis;

/// Data-buffer slot for a coordinate on a binned axis: 0 for underflow,
/// `k+1` for interior bin `k`, `None` for NaN or a value above the axis
/// maximum (such fills are silently dropped, never routed to the overflow
/// slot).
pub(crate) fn wire_slot(axis: &Axis, value: f64) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    if value < axis.min() {
        return Some(0);
    }
    if value > axis.max() || axis.nbins() == 0 {
        return None;
    }
    let width = axis.bin_width();
    let mut k = ((value - axis.min()) / width) as usize;
    // value == max lands in the last interior bin
    if k >= axis.nbins() {
        k = axis.nbins() - 1;
    }
    Some(k + 1)
}
