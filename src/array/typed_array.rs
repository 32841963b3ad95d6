use bytes::{Buf, BufMut};

use crate::core::element::Element;
use crate::core::errors::DecodeError;

/// Sentinel returned by [`TypedArray::get`] for an out-of-range index.
pub const OUT_OF_RANGE: f64 = -1.0;

/// Owned, zero-filled buffer of homogeneous numeric elements.
///
/// Bounds violations on the tolerant accessors are silent: `get` returns the
/// `-1` sentinel and `set` is a no-op. This mirrors the tolerant behavior the
/// wire protocol and its historical clients depend on; [`TypedArray::try_get`]
/// is the checked path for code (and tests) that wants a miscomputed index to
/// surface instead.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray<T> {
    values: Vec<T>,
}

impl<T: Element> TypedArray<T> {
    /// Zero-filled array of `length` elements.
    pub fn new(length: usize) -> TypedArray<T> {
        TypedArray {
            values: vec![T::zero(); length],
        }
    }

    #[inline(always)]
    pub fn length(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or the `-1` sentinel out of range.
    #[inline(always)]
    pub fn get(&self, index: usize) -> f64 {
        match self.values.get(index) {
            Some(v) => v.as_f64(),
            None => OUT_OF_RANGE,
        }
    }

    /// Checked read; `None` out of range.
    #[inline(always)]
    pub fn try_get(&self, index: usize) -> Option<f64> {
        self.values.get(index).map(|v| v.as_f64())
    }

    /// Value-converting write; no-op out of range.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = T::from_f64(value);
        }
    }

    /// Reallocate to `length` elements, zero-filled. Contents are not
    /// preserved.
    pub fn resize(&mut self, length: usize) {
        self.values = vec![T::zero(); length];
    }

    /// Zero every element, keeping the length.
    pub fn clear(&mut self) {
        for v in self.values.iter_mut() {
            *v = T::zero();
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Write every element at the fixed wire width.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        for v in self.values.iter() {
            v.put(buf);
        }
    }

    /// Overwrite every element from the buffer, in place.
    pub fn read_from<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        for v in self.values.iter_mut() {
            *v = T::get(buf)?;
        }
        Ok(())
    }

    /// Write the single element at `index`; no-op out of range.
    pub fn write_single<B: BufMut>(&self, buf: &mut B, index: usize) {
        if let Some(v) = self.values.get(index) {
            v.put(buf);
        }
    }

    /// Read one element from the buffer into `index`; the byte is still
    /// consumed when the index is out of range.
    pub fn read_single<B: Buf>(&mut self, buf: &mut B, index: usize) -> Result<(), DecodeError> {
        let v = T::get(buf)?;
        if let Some(slot) = self.values.get_mut(index) {
            *slot = v;
        }
        Ok(())
    }
}
