use crate::route::bearing_diff;

use approx::assert_relative_eq;

#[test]
fn known_turns() {
    assert_eq!(bearing_diff(10.0, 350.0), 20.0);
    assert_eq!(bearing_diff(0.0, 180.0), 180.0);
    assert_eq!(bearing_diff(90.0, 0.0), 90.0);
    assert_eq!(bearing_diff(0.0, 170.0), 170.0);
    assert_eq!(bearing_diff(0.0, 190.0), 170.0);
}

#[test]
fn same_bearing_is_no_turn() {
    for bearing in [-720.0, -45.0, 0.0, 37.5, 359.9, 1_080.0] {
        assert_eq!(bearing_diff(bearing, bearing), 0.0);
    }
}

#[test]
fn unnormalised_bearings() {
    assert_relative_eq!(bearing_diff(-10.0, 10.0), 20.0);
    assert_relative_eq!(bearing_diff(725.0, 5.0), 0.0);
    assert_relative_eq!(bearing_diff(-90.0, 450.0), 180.0);
}

#[test]
fn symmetric_and_bounded() {
    let bearings = (-24..=24).map(|step| step as f64 * 37.0).collect::<Vec<_>>();

    for &a in &bearings {
        for &b in &bearings {
            let diff = bearing_diff(a, b);
            assert_eq!(diff, bearing_diff(b, a), "asymmetric for {a}, {b}");
            assert!((0.0..=180.0).contains(&diff), "{diff} out of range for {a}, {b}");
        }
    }
}
