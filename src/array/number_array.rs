use bytes::{Buf, BufMut};

use crate::array::typed_array::TypedArray;
use crate::core::element::Element;
use crate::core::errors::DecodeError;

/// Element width class of a monitoring-object buffer.
///
/// The letter is the third character of every wire type tag (`H1F`, `TGD`,
/// ...), so the set is closed: adding a width means touching this enum, the
/// [`NumberArray`] variants and the factory, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Char,
    Short,
    Int,
    Float,
    Double,
}

impl ElementType {
    pub fn letter(self) -> char {
        match self {
            ElementType::Char => 'C',
            ElementType::Short => 'S',
            ElementType::Int => 'I',
            ElementType::Float => 'F',
            ElementType::Double => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<ElementType> {
        match letter {
            'C' => Some(ElementType::Char),
            'S' => Some(ElementType::Short),
            'I' => Some(ElementType::Int),
            'F' => Some(ElementType::Float),
            'D' => Some(ElementType::Double),
            _ => None,
        }
    }

    /// Wire width in bytes of one element.
    pub fn word_size(self) -> u8 {
        match self {
            ElementType::Char => 1,
            ElementType::Short => 2,
            ElementType::Int => 4,
            ElementType::Float => 4,
            ElementType::Double => 8,
        }
    }
}

/// A [`TypedArray`] behind the closed set of element widths.
///
/// All access goes through `f64`, so holders never depend on the concrete
/// width; the width only matters to the wire codec and to
/// [`NumberArray::copy_from`], which value-converts between widths silently.
#[derive(Clone, Debug, PartialEq)]
pub enum NumberArray {
    Char(TypedArray<u8>),
    Short(TypedArray<i16>),
    Int(TypedArray<i32>),
    Float(TypedArray<f32>),
    Double(TypedArray<f64>),
}

macro_rules! each_array {
    ($self:expr, $arr:ident => $body:expr) => {
        match $self {
            NumberArray::Char($arr) => $body,
            NumberArray::Short($arr) => $body,
            NumberArray::Int($arr) => $body,
            NumberArray::Float($arr) => $body,
            NumberArray::Double($arr) => $body,
        }
    };
}

impl NumberArray {
    /// Zero-filled array of `length` elements of the given width.
    pub fn new(element: ElementType, length: usize) -> NumberArray {
        match element {
            ElementType::Char => NumberArray::Char(TypedArray::new(length)),
            ElementType::Short => NumberArray::Short(TypedArray::new(length)),
            ElementType::Int => NumberArray::Int(TypedArray::new(length)),
            ElementType::Float => NumberArray::Float(TypedArray::new(length)),
            ElementType::Double => NumberArray::Double(TypedArray::new(length)),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            NumberArray::Char(_) => ElementType::Char,
            NumberArray::Short(_) => ElementType::Short,
            NumberArray::Int(_) => ElementType::Int,
            NumberArray::Float(_) => ElementType::Float,
            NumberArray::Double(_) => ElementType::Double,
        }
    }

    #[inline(always)]
    pub fn length(&self) -> usize {
        each_array!(self, a => a.length())
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Element at `index`, or the `-1` sentinel out of range.
    #[inline(always)]
    pub fn get(&self, index: usize) -> f64 {
        each_array!(self, a => a.get(index))
    }

    /// Checked read; `None` out of range.
    pub fn try_get(&self, index: usize) -> Option<f64> {
        each_array!(self, a => a.try_get(index))
    }

    /// Value-converting write; no-op out of range.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: f64) {
        each_array!(self, a => a.set(index, value))
    }

    /// Reallocate to `length` zero-filled elements.
    pub fn resize(&mut self, length: usize) {
        each_array!(self, a => a.resize(length))
    }

    /// Zero every element, keeping the length.
    pub fn clear(&mut self) {
        each_array!(self, a => a.clear())
    }

    /// Resize to the source length and copy element-wise, value-converting
    /// between widths. The receiver keeps its own element type.
    pub fn copy_from(&mut self, other: &NumberArray) {
        self.resize(other.length());
        for i in 0..other.length() {
            self.set(i, other.get(i));
        }
    }

    /// Write every element at the fixed wire width.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        each_array!(self, a => a.write_to(buf))
    }

    /// Overwrite every element from the buffer, in place.
    pub fn read_from<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        each_array!(self, a => a.read_from(buf))
    }

    /// Write the single element at `index`; no-op out of range.
    pub fn write_single<B: BufMut>(&self, buf: &mut B, index: usize) {
        each_array!(self, a => a.write_single(buf, index))
    }

    /// Read one element from the buffer into `index`.
    pub fn read_single<B: Buf>(&mut self, buf: &mut B, index: usize) -> Result<(), DecodeError> {
        each_array!(self, a => a.read_single(buf, index))
    }
}
