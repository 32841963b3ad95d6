use crate::histo::Histo1;

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(
            ($e as f64 - $v as f64).abs() <= $t as f64,
            "{} !~= {} within {}",
            $e,
            $v,
            $t
        )
    };
}

/// The 10-bin unit histogram most scenarios start from.
pub fn ten_bin_histo() -> Histo1 {
    Histo1::double("h", "t", 10, 0.0, 10.0)
}
