/// The unsigned turn, in degrees, between two compass bearings.
///
/// Bearings may be negative or exceed a full turn. The result is always
/// within `[0, 180]`, since a left turn of `x` is a right turn of `360 - x`.
///
/// ```rust
/// use trailfinder::route::bearing_diff;
///
/// assert_eq!(bearing_diff(10.0, 350.0), 20.0);
/// assert_eq!(bearing_diff(0.0, 180.0), 180.0);
/// ```
#[inline]
pub fn bearing_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}
