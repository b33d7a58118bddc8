//! Colours a route by traversal order, for display.
//!
//! The hue sweeps once around the colour wheel over the length of a
//! route, from red back to red, at full saturation and brightness.

use std::fmt::{Display, Formatter};

#[cfg(test)]
mod test;

/// An 8-bit-per-channel RGB colour, displayed as `#rrggbb`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts from hue, saturation and value, each nominally in `[0, 1]`.
    /// Hues outside that range wrap around. Channels are truncated.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let (r, g, b) = if saturation == 0.0 {
            (value, value, value)
        } else {
            let sector = (hue * 6.0).floor();
            let f = hue * 6.0 - sector;
            let p = value * (1.0 - saturation);
            let q = value * (1.0 - saturation * f);
            let t = value * (1.0 - saturation * (1.0 - f));

            match (sector as i64).rem_euclid(6) {
                0 => (value, t, p),
                1 => (q, value, p),
                2 => (p, value, t),
                3 => (p, q, value),
                4 => (t, p, value),
                _ => (value, p, q),
            }
        };

        Self::new(channel(r), channel(g), channel(b))
    }

    /// The colour of step `k` of `n`. An `n` of zero is treated as one.
    pub fn given_time(k: usize, n: usize) -> Self {
        let n = n.max(1);
        Self::from_hsv(k as f64 / n as f64, 1.0, 1.0)
    }
}

#[inline]
fn channel(component: f64) -> u8 {
    (component * 255.0) as u8
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The hex colour code of step `k` of `n`, e.g. `#ff0000` for the first.
pub fn shade_given_time(k: usize, n: usize) -> String {
    Colour::given_time(k, n).to_string()
}
