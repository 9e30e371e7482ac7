use super::*;

#[test]
fn clamp_and_lerp_basics() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    assert_eq!(clamp(3.0, 2.0, 1.0), 2.0);

    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
}

#[test]
fn parabola_endpoints_are_exact() {
    let pairs = [
        (Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        (Point::new(12.3, 45.6), Point::new(-78.9, 0.1)),
        (Point::new(1e-7, 3.3e5), Point::new(0.3, 0.7)),
    ];
    for (s, e) in pairs {
        for h in [0.0, 60.0, 1234.5] {
            assert_eq!(parabola_at(0.0, s, e, h), s);
            assert_eq!(parabola_at(1.0, s, e, h), e);
        }
    }
}

#[test]
fn parabola_peaks_above_the_chord() {
    let s = Point::new(0.0, 100.0);
    let e = Point::new(200.0, 100.0);
    let mid = parabola_at(0.5, s, e, 60.0);
    assert_eq!(mid.x, 100.0);
    // Quadratic Bezier reaches half the control point's rise at t = 0.5.
    assert_eq!(mid.y, 70.0);
    for i in 1..20 {
        let p = parabola_at(f64::from(i) / 20.0, s, e, 60.0);
        assert!(p.y < 100.0);
    }
}

#[test]
fn control_point_sits_over_the_midpoint() {
    let c = arc_control(Point::new(0.0, 10.0), Point::new(40.0, 30.0), 15.0);
    assert_eq!(c, Point::new(20.0, 5.0));
}

#[test]
fn shake_starts_and_ends_at_rest() {
    assert_eq!(damped_shake(0.0, 6.0, 3.0), 0.0);
    assert_eq!(damped_shake(1.0, 6.0, 3.0), 0.0);
    assert_eq!(damped_shake(2.0, 6.0, 3.0), 0.0);
    let early = damped_shake(1.0 / 12.0, 6.0, 3.0).abs();
    let late = damped_shake(11.0 / 12.0, 6.0, 3.0).abs();
    assert!(early > late);
    assert!(early <= 6.0);
}
