use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn out_cubic_is_monotonic_on_unit_interval() {
    let mut prev = ease_out_cubic(0.0);
    for i in 1..=1000 {
        let v = ease_out_cubic(f64::from(i) / 1000.0);
        assert!(v >= prev, "dropped at step {i}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn out_cubic_flattens_at_the_end() {
    let h = 1e-4;
    let slope_end = (ease_out_cubic(1.0) - ease_out_cubic(1.0 - h)) / h;
    let slope_start = (ease_out_cubic(h) - ease_out_cubic(0.0)) / h;
    assert!(slope_end < 1e-3);
    assert!(slope_start > 2.9);
}

#[test]
fn inputs_outside_unit_interval_are_clamped() {
    assert_eq!(ease_out_cubic(-3.0), 0.0);
    assert_eq!(ease_out_cubic(7.0), 1.0);
}
