//! Wire primitives shared by the config, contents and package records.
//!
//! Everything is big-endian; strings are an `i32` length prefix followed by
//! UTF-8 bytes. All reads are checked so a truncated stream surfaces as
//! [`DecodeError::Truncated`] instead of a panic.

use bytes::{Buf, BufMut, TryGetError};

use crate::core::axis::Axis;
use crate::core::errors::DecodeError;

/// Per-member framing byte of the delta (contents-only) record.
pub const DELTA_SENTINEL: u8 = 0xDC;

pub fn put_string<B: BufMut>(buf: &mut B, s: &str) {
    buf.put_i32(s.len() as i32);
    buf.put_slice(s.as_bytes());
}

pub fn get_string<B: Buf>(buf: &mut B) -> Result<String, DecodeError> {
    let len = buf.try_get_i32()?;
    if len < 0 {
        return Err(DecodeError::BadLength(len));
    }
    let len = len as usize;
    if buf.remaining() < len {
        return Err(DecodeError::Truncated(TryGetError {
            requested: len,
            available: buf.remaining(),
        }));
    }
    let raw = buf.copy_to_bytes(len);
    Ok(String::from_utf8(raw.to_vec())?)
}

/// Full axis block: title, bin count, bounds.
pub fn put_axis<B: BufMut>(buf: &mut B, axis: &Axis) {
    put_string(buf, axis.title());
    buf.put_i32(axis.nbins() as i32);
    buf.put_f64(axis.min());
    buf.put_f64(axis.max());
}

/// Decode a full axis block into `axis`. The decoded range always takes
/// effect; fixed flags only constrain auto-ranging, never the wire.
pub fn get_axis<B: Buf>(buf: &mut B, axis: &mut Axis) -> Result<(), DecodeError> {
    let title = get_string(buf)?;
    let nbins = buf.try_get_i32()?;
    if nbins < 0 {
        return Err(DecodeError::BadLength(nbins));
    }
    let min = buf.try_get_f64()?;
    let max = buf.try_get_f64()?;
    axis.set_title(&title);
    axis.set_range(nbins as usize, min, max);
    Ok(())
}
