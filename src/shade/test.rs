use crate::shade::{shade_given_time, Colour};

#[test]
fn first_step_is_red() {
    for n in [1, 2, 7, 1_000] {
        assert_eq!(shade_given_time(0, n), "#ff0000");
    }
}

#[test]
fn zero_total_does_not_divide_by_zero() {
    assert_eq!(shade_given_time(0, 0), "#ff0000");
    // Treated as step 1 of 1: a full turn of the wheel, back to red
    assert_eq!(shade_given_time(1, 0), "#ff0000");
}

#[test]
fn hue_sweeps_the_wheel() {
    assert_eq!(shade_given_time(1, 4), "#7fff00");
    assert_eq!(shade_given_time(1, 2), "#00ffff");
    assert_eq!(shade_given_time(3, 4), "#7f00ff");
    assert_eq!(shade_given_time(4, 4), "#ff0000");
}

#[test]
fn greyscale_without_saturation() {
    assert_eq!(Colour::from_hsv(0.3, 0.0, 0.5), Colour::new(127, 127, 127));
}
