use bytes::{Buf, BufMut};
use num_traits as num;

use crate::core::errors::DecodeError;

/// One numeric element of a monitoring-object buffer.
///
/// Fixes the wire width of the concrete variant and carries the silent value
/// conversions the buffer contract is built on: every element is read and
/// written through `f64`, truncating toward zero for integer targets and
/// falling back to zero when the value is not representable at the target
/// width.
pub trait Element: num::Num + num::NumCast + PartialOrd<Self> + Copy {
    /// Element as an f64.
    fn as_f64(&self) -> f64;
    /// Value-converted from an f64.
    fn from_f64(v: f64) -> Self;
    /// Wire width in bytes.
    fn word_size() -> u8;
    /// Write this element at its fixed width, big-endian.
    fn put<B: BufMut>(&self, buf: &mut B);
    /// Read one element at the fixed width, big-endian.
    fn get<B: Buf>(buf: &mut B) -> Result<Self, DecodeError>;
}

macro_rules! impl_element {
    ($t:ty, $size:expr, $put:ident, $get:ident) => {
        impl Element for $t {
            #[inline(always)]
            fn as_f64(&self) -> f64 {
                num::cast(*self).unwrap_or(0.0)
            }
            #[inline(always)]
            fn from_f64(v: f64) -> $t {
                num::cast(v).unwrap_or_else(<$t as num::Zero>::zero)
            }
            #[inline(always)]
            fn word_size() -> u8 {
                $size
            }
            #[inline(always)]
            fn put<B: BufMut>(&self, buf: &mut B) {
                buf.$put(*self);
            }
            #[inline(always)]
            fn get<B: Buf>(buf: &mut B) -> Result<$t, DecodeError> {
                Ok(buf.$get()?)
            }
        }
    };
}

impl_element!(u8, 1, put_u8, try_get_u8);
impl_element!(i16, 2, put_i16, try_get_i16);
impl_element!(i32, 4, put_i32, try_get_i32);
impl_element!(i64, 8, put_i64, try_get_i64);
impl_element!(f32, 4, put_f32, try_get_f32);
impl_element!(f64, 8, put_f64, try_get_f64);
