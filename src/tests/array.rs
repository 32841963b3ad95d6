use bytes::BytesMut;

use crate::array::{ElementType, NumberArray, TypedArray};

#[test]
fn out_of_range_get_returns_sentinel() {
    let a = NumberArray::new(ElementType::Int, 4);
    assert_eq!(a.get(3), 0.0);
    assert_eq!(a.get(4), -1.0);
    assert_eq!(a.get(1000), -1.0);
    assert_eq!(a.try_get(4), None);
}

#[test]
fn out_of_range_set_is_noop() {
    let mut a = NumberArray::new(ElementType::Double, 2);
    a.set(2, 42.0);
    assert_eq!(a.length(), 2);
    assert_eq!(a.get(0), 0.0);
    assert_eq!(a.get(1), 0.0);
}

#[test]
fn resize_reallocates_zero_filled() {
    let mut a = NumberArray::new(ElementType::Short, 3);
    a.set(1, 7.0);
    a.resize(5);
    assert_eq!(a.length(), 5);
    for i in 0..5 {
        assert_eq!(a.get(i), 0.0);
    }
}

#[test]
fn integer_narrowing_truncates_toward_zero() {
    let mut a = NumberArray::new(ElementType::Int, 2);
    a.set(0, 5.9);
    a.set(1, -2.7);
    assert_eq!(a.get(0), 5.0);
    assert_eq!(a.get(1), -2.0);
}

#[test]
fn copy_converts_between_widths_and_resizes() {
    let mut src = NumberArray::new(ElementType::Double, 3);
    src.set(0, 1.5);
    src.set(1, 2.0);
    src.set(2, -3.0);

    let mut dst = NumberArray::new(ElementType::Int, 1);
    dst.copy_from(&src);
    assert_eq!(dst.element_type(), ElementType::Int);
    assert_eq!(dst.length(), 3);
    assert_eq!(dst.get(0), 1.0); // truncated
    assert_eq!(dst.get(1), 2.0);
    assert_eq!(dst.get(2), -3.0);

    let mut widened = NumberArray::new(ElementType::Double, 0);
    widened.copy_from(&dst);
    assert_eq!(widened.length(), 3);
    assert_eq!(widened.get(0), 1.0);
}

#[test]
fn wire_width_per_variant() {
    let cases = [
        (ElementType::Char, 1usize),
        (ElementType::Short, 2),
        (ElementType::Int, 4),
        (ElementType::Float, 4),
        (ElementType::Double, 8),
    ];
    for (elem, width) in cases {
        let mut a = NumberArray::new(elem, 3);
        a.set(0, 1.0);
        let mut buf = BytesMut::new();
        a.write_to(&mut buf);
        assert_eq!(buf.len(), 3 * width, "{:?}", elem);
    }
}

#[test]
fn round_trip_preserves_values() {
    let mut a = NumberArray::new(ElementType::Float, 4);
    a.set(0, 1.25);
    a.set(1, -2.5);
    a.set(3, 1e6);

    let mut buf = BytesMut::new();
    a.write_to(&mut buf);

    let mut b = NumberArray::new(ElementType::Float, 4);
    b.read_from(&mut buf.freeze()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_element_codec() {
    let mut a = TypedArray::<i16>::new(3);
    a.set(1, 300.0);

    let mut buf = BytesMut::new();
    a.write_single(&mut buf, 1);
    assert_eq!(buf.len(), 2);

    let mut b = TypedArray::<i16>::new(3);
    b.read_single(&mut buf.freeze(), 1).unwrap();
    assert_eq!(b.get(1), 300.0);
}

#[test]
fn read_from_truncated_stream_fails() {
    let mut a = NumberArray::new(ElementType::Double, 2);
    a.set(0, 1.0);
    a.set(1, 2.0);
    let mut buf = BytesMut::new();
    a.write_to(&mut buf);

    let mut short = buf.freeze();
    short.truncate(9); // one full element plus one byte

    let mut b = NumberArray::new(ElementType::Double, 2);
    assert!(b.read_from(&mut short).is_err());
}

#[test]
fn clear_keeps_length() {
    let mut a = NumberArray::new(ElementType::Char, 4);
    a.set(2, 9.0);
    a.clear();
    assert_eq!(a.length(), 4);
    assert_eq!(a.get(2), 0.0);
}
