use crate::core::axis::Axis;

#[test]
fn set_min_max_ignore_fixed_flags() {
    let mut axis = Axis::new(10, 0.0, 1.0, "x");
    axis.fix_min(true);
    axis.fix_max(true);
    axis.set_min(-5.0);
    axis.set_max(5.0);
    assert_eq!(axis.min(), -5.0);
    assert_eq!(axis.max(), 5.0);
}

#[test]
fn copy_range_respects_fixed_flags() {
    let src = Axis::new(20, -1.0, 1.0, "src");

    let mut free = Axis::new(10, 0.0, 10.0, "dst");
    free.copy_range_from(&src);
    assert_eq!(free.nbins(), 20);
    assert_eq!(free.min(), -1.0);
    assert_eq!(free.max(), 1.0);

    let mut frozen = Axis::new(10, 0.0, 10.0, "dst");
    frozen.fix_min(true);
    frozen.copy_range_from(&src);
    assert_eq!(frozen.nbins(), 20);
    assert_eq!(frozen.min(), 0.0); // kept
    assert_eq!(frozen.max(), 1.0);

    let mut locked = Axis::new(10, 0.0, 10.0, "dst");
    locked.fix_min(true);
    locked.fix_max(true);
    locked.copy_range_from(&src);
    assert_eq!(locked.min(), 0.0);
    assert_eq!(locked.max(), 10.0);
}

#[test]
fn copy_overwrites_everything() {
    let mut src = Axis::new(20, -1.0, 1.0, "src");
    src.fix_max(true);

    let mut dst = Axis::new(10, 0.0, 10.0, "dst");
    dst.fix_min(true);
    dst.copy_from(&src);
    assert_eq!(dst, src);
}

#[test]
fn bin_geometry() {
    let axis = Axis::new(10, 0.0, 10.0, "");
    assert_approx_eq!(axis.bin_width(), 1.0, 1e-12);
    assert_approx_eq!(axis.bin_center(0), 0.5, 1e-12);
    assert_approx_eq!(axis.bin_center(9), 9.5, 1e-12);
}

#[test]
fn descriptor_is_one_line_xml() {
    let axis = Axis::new(4, 0.0, 2.0, "energy");
    assert_eq!(
        axis.to_string(),
        "<axis nbins=\"4\" min=\"0\" max=\"2\" title=\"energy\" />"
    );
}
