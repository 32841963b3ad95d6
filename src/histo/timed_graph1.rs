use crate::array::{ElementType, NumberArray, TypedArray};
use crate::core::axis::Axis;
use crate::core::meta_data::MonMeta;
use crate::core::util::now_millis;

/// Circular time series.
///
/// `axis_x.nbins` is the ring capacity; `data` holds the values and `times`
/// the matching timestamps at second resolution, both of that length. The
/// cursor advances circularly on every point and never removes data, only
/// overwriting the oldest slot once the ring is full. It starts at `-1` so
/// the first point lands in slot 0.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedGraph1 {
    pub(crate) meta: MonMeta,
    pub(crate) title: String,
    pub(crate) axis_x: Axis,
    pub(crate) axis_y: Axis,
    pub(crate) iter: i32,
    pub(crate) times: TypedArray<i64>,
    pub(crate) data: NumberArray,
}

impl TimedGraph1 {
    pub fn new(
        element: ElementType,
        name: &str,
        title: &str,
        nbins: usize,
        min: f64,
        max: f64,
    ) -> TimedGraph1 {
        TimedGraph1 {
            meta: MonMeta::new(name),
            title: title.to_owned(),
            axis_x: Axis::new(nbins, min, max, ""),
            axis_y: Axis::new(1, 0.0, 1.0, ""),
            iter: -1,
            times: TypedArray::new(nbins),
            data: NumberArray::new(element, nbins),
        }
    }

    /// Wire type tag, e.g. `TGD`.
    pub fn data_type(&self) -> String {
        format!("TG{}", self.data.element_type().letter())
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
    pub fn times(&self) -> &TypedArray<i64> {
        &self.times
    }
    pub fn iter(&self) -> i32 {
        self.iter
    }

    pub fn capacity(&self) -> usize {
        self.axis_x.nbins()
    }

    /// Resize the ring and reallocate both buffers to match.
    pub fn set_capacity(&mut self, nbins: usize) {
        self.axis_x.set_nbins(nbins);
        self.times.resize(nbins);
        self.data.resize(nbins);
        self.iter = -1;
    }

    /// Value at ring slot `n`, sentinel `-1` out of range.
    pub fn get_value(&self, n: usize) -> f64 {
        self.data.get(n)
    }

    /// Timestamp (seconds) at ring slot `n`, sentinel `-1` out of range.
    pub fn get_time(&self, n: usize) -> i64 {
        self.times.get(n) as i64
    }

    /// Advance the cursor circularly and overwrite the slot it lands on with
    /// `value` and `time_ms / 1000`. Also stamps the object's update time
    /// with `time_ms`.
    pub fn add_point(&mut self, time_ms: i64, value: f64) {
        if self.capacity() == 0 {
            return;
        }
        let mut next = self.iter + 1;
        if next == self.data.length() as i32 || next == self.times.length() as i32 {
            next = 0;
        }
        self.iter = next;
        let slot = next as usize;
        self.data.set(slot, value);
        self.times.set(slot, (time_ms / 1000) as f64);
        self.meta.touch(time_ms);
    }

    /// [`TimedGraph1::add_point`] stamped with the current wall clock.
    pub fn add_point_now(&mut self, value: f64) {
        self.add_point(now_millis(), value);
    }

    /// Latest value, i.e. the slot the cursor points at.
    pub fn latest(&self) -> f64 {
        if self.iter < 0 {
            return 0.0;
        }
        self.data.get(self.iter as usize)
    }

    /// Zero the cursor and both buffers, and collapse the display range.
    ///
    /// Unlike a fresh ring (cursor `-1`), the cursor lands on slot 0, so the
    /// next point is written to slot 1 and slot 0 keeps the zero left here
    /// until the ring wraps.
    pub fn reset(&mut self) {
        self.iter = 0;
        self.data.clear();
        self.times.clear();
        self.axis_y.set_max(1.0);
        self.meta.updated = false;
    }
}
