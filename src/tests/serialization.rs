use bytes::{Buf, BytesMut};
use rand::{Rng, SeedableRng};

use crate::array::ElementType;
use crate::core::axis::Axis;
use crate::histo::{factory, Graph1, Histo1, Histo2, MonObject, TimedGraph1};
use crate::serialization::codec::MonObjectCodec;
use crate::serialization::wire;

fn round_trip(mut object: MonObject) -> MonObject {
    let mut buf = BytesMut::new();
    object.write_full(&mut buf);
    let mut bytes = buf.freeze();
    let tag = wire::get_string(&mut bytes).unwrap();
    let mut decoded = factory::create(&tag).unwrap();
    decoded.read_full(&mut bytes).unwrap();
    assert!(!bytes.has_remaining(), "decode must consume the full record");
    decoded
}

#[test]
fn string_round_trip() {
    let mut buf = BytesMut::new();
    wire::put_string(&mut buf, "côté μ");
    wire::put_string(&mut buf, "");
    let mut bytes = buf.freeze();
    assert_eq!(wire::get_string(&mut bytes).unwrap(), "côté μ");
    assert_eq!(wire::get_string(&mut bytes).unwrap(), "");
}

#[test]
fn string_with_negative_length_is_rejected() {
    let mut buf = BytesMut::new();
    buf.extend_from_slice(&(-4_i32).to_be_bytes());
    assert!(wire::get_string(&mut buf.freeze()).is_err());
}

#[test]
fn axis_block_round_trip() {
    let mut src = Axis::new(16, -2.5, 2.5, "drift time");
    src.fix_max(true); // flags are not part of the wire
    let mut buf = BytesMut::new();
    wire::put_axis(&mut buf, &src);

    let mut dst = Axis::new(1, 0.0, 1.0, "");
    wire::get_axis(&mut buf.freeze(), &mut dst).unwrap();
    assert_eq!(dst.nbins(), 16);
    assert_eq!(dst.min(), -2.5);
    assert_eq!(dst.max(), 2.5);
    assert_eq!(dst.title(), "drift time");
    assert!(!dst.fixed_max());
}

#[test]
fn histo1_full_round_trip() {
    let mut h = Histo1::float("occupancy", "PXD occupancy", 16, 0.0, 16.0);
    h.meta_mut().tab_id = 2;
    h.meta_mut().position_id = 5;
    h.set_axis_x_title("module id");
    h.set_axis_y_title("hits");
    h.fill(-1.0);
    h.fill(3.5);
    h.fill(16.0);

    let decoded = round_trip(h.clone().into());
    let MonObject::Histo1(d) = decoded else {
        panic!("wrong variant")
    };
    assert_eq!(d.data_type(), "H1F");
    assert_eq!(d.name(), "occupancy");
    assert_eq!(d.title(), "PXD occupancy");
    assert_eq!(d.meta().tab_id, 2);
    assert_eq!(d.meta().position_id, 5);
    assert_eq!(d.axis_x(), h.axis_x());
    assert_eq!(d.axis_y().title(), "hits");
    assert_eq!(d.data(), h.data());
    assert!(d.meta().updated);
}

#[test]
fn histo2_full_round_trip() {
    let mut h = Histo2::new(ElementType::Int, "corr", "u vs v", 8, 0.0, 8.0, 6, -3.0, 3.0);
    h.fill(4.5, 0.5);
    h.fill(-1.0, 2.0);
    h.set_bin_content(1, 1, 9.0);

    let decoded = round_trip(h.clone().into());
    let MonObject::Histo2(d) = decoded else {
        panic!("wrong variant")
    };
    assert_eq!(d.data_type(), "H2I");
    assert_eq!(d.axis_x(), h.axis_x());
    assert_eq!(d.axis_y(), h.axis_y());
    assert_eq!(d.data(), h.data());
}

#[test]
fn graph1_full_round_trip() {
    let mut g = Graph1::new(ElementType::Double, "ped", "pedestals", 5, 0.0, 5.0, 0.0, 1.0);
    for n in 0..5 {
        g.set_point(n, n as f64, (n * n) as f64);
    }

    let decoded = round_trip(g.clone().into());
    let MonObject::Graph1(d) = decoded else {
        panic!("wrong variant")
    };
    assert_eq!(d.data_type(), "g1D");
    assert_eq!(d.npoints(), 5);
    assert_eq!(d.data(), g.data());
    // decoded range reflects the encoder's auto-ranged axis
    assert_eq!(d.axis_y(), g.axis_y());
}

#[test]
fn timed_graph1_full_round_trip() {
    let mut g = TimedGraph1::new(ElementType::Double, "hv", "HV monitor", 4, 0.0, 3600.0);
    g.add_point(1000, 1.0);
    g.add_point(2000, 2.0);
    g.add_point(3000, 3.0);

    let decoded = round_trip(g.clone().into());
    let MonObject::TimedGraph1(d) = decoded else {
        panic!("wrong variant")
    };
    assert_eq!(d.data_type(), "TGD");
    assert_eq!(d.iter(), 2);
    assert_eq!(d.data(), g.data());
    assert_eq!(d.times(), g.times());
}

#[test]
fn randomized_fills_round_trip() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDC);
    let mut h = Histo1::double("rnd", "random", 50, 0.0, 1.0);
    for _ in 0..10_000 {
        h.fill(rng.gen_range(-0.1..1.1));
    }
    let decoded = round_trip(h.clone().into());
    let MonObject::Histo1(d) = decoded else {
        panic!("wrong variant")
    };
    assert_eq!(d.data(), h.data());
}

#[test]
fn config_precedes_contents_in_full_records() {
    let mut h = Histo1::double("h", "t", 4, 0.0, 4.0);
    h.fill(1.5);

    let mut full = BytesMut::new();
    h.write_full(&mut full);

    let mut config = BytesMut::new();
    h.write_config(&mut config);
    assert_eq!(&full[..config.len()], &config[..]);
}

#[test]
fn truncated_config_fails_instead_of_panicking() {
    let mut h = Histo1::double("h", "t", 4, 0.0, 4.0);
    let mut buf = BytesMut::new();
    h.write_full(&mut buf);

    for cut in [1, 5, 10, buf.len() - 1] {
        let mut bytes = buf.clone().freeze();
        bytes.truncate(cut);
        let tag = wire::get_string(&mut bytes);
        if let Ok(tag) = tag {
            let mut decoded = factory::create(&tag).unwrap();
            assert!(decoded.read_full(&mut bytes).is_err(), "cut at {}", cut);
        }
    }
}
