use crate::array::ElementType;
use crate::histo::Graph1;

fn graph(npoints: usize) -> Graph1 {
    Graph1::new(ElementType::Double, "g", "t", npoints, 0.0, 100.0, 0.0, 1.0)
}

#[test]
fn samples_split_the_buffer_in_halves() {
    let mut g = graph(4);
    assert_eq!(g.data().length(), 8);
    g.set_point(2, 30.0, 7.0);
    assert_eq!(g.get_point_x(2), 30.0);
    assert_eq!(g.get_point_y(2), 7.0);
    assert_eq!(g.data().get(2), 30.0);
    assert_eq!(g.data().get(6), 7.0);
}

#[test]
fn out_of_range_points_are_tolerant() {
    let mut g = graph(4);
    g.set_point(4, 1.0, 1.0);
    assert_eq!(g.get_point_x(4), -1.0);
    assert_eq!(g.get_point_y(4), -1.0);
}

#[test]
fn auto_range_centers_with_five_percent_margin() {
    let mut g = graph(2);
    g.set_point_y(0, 1.0);
    g.set_point_y(1, 3.0);
    // lo 1, hi 3, mid 2, half 1
    assert_approx_eq!(g.axis_y().min(), 2.0 - 1.05, 1e-9);
    assert_approx_eq!(g.axis_y().max(), 2.0 + 1.05, 1e-9);
}

#[test]
fn fully_fixed_display_range_is_untouched() {
    let mut g = graph(2);
    g.axis_y_mut().set_min(-10.0);
    g.axis_y_mut().set_max(10.0);
    g.axis_y_mut().fix_min(true);
    g.axis_y_mut().fix_max(true);
    g.set_point_y(0, 100.0);
    assert_eq!(g.axis_y().min(), -10.0);
    assert_eq!(g.axis_y().max(), 10.0);
}

#[test]
fn half_fixed_display_range_moves_the_free_bound() {
    let mut g = graph(2);
    g.axis_y_mut().set_min(0.0);
    g.axis_y_mut().fix_min(true);
    g.set_point_y(0, 2.0);
    g.set_point_y(1, 4.0);
    assert_eq!(g.axis_y().min(), 0.0);
    assert_approx_eq!(g.axis_y().max(), 3.0 + 1.05, 1e-9);
}

#[test]
fn resize_reallocates_samples() {
    let mut g = graph(2);
    g.set_point(0, 1.0, 2.0);
    g.set_npoints(5);
    assert_eq!(g.data().length(), 10);
    assert_eq!(g.get_point_x(0), 0.0);
}
