//! HSV color type

use super::rgb::Rgb;

/// A color in HSV coordinates: hue in degrees `0..360`, saturation and
/// value in percent `0..=100`. Construction wraps hue and clamps the
/// percentages, same as [`Hsl`](super::hsl::Hsl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    h: u16,
    s: u8,
    v: u8,
}

impl Hsv {
    /// Create an Hsv color, wrapping hue modulo 360 and clamping
    /// saturation and value into `0..=100`.
    #[inline]
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            v: v.clamp(0, 100) as u8,
        }
    }

    /// Hue in degrees, `0..360`.
    #[inline]
    pub fn h(self) -> u16 {
        self.h
    }

    /// Saturation in percent, `0..=100`.
    #[inline]
    pub fn s(self) -> u8 {
        self.s
    }

    /// Value (brightness) in percent, `0..=100`.
    #[inline]
    pub fn v(self) -> u8 {
        self.v
    }

    /// Convert to RGB via the sextant algorithm, truncating on the way
    /// back to `0..=255` (same drift caveat as HSL).
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.v) / 100.0;

        if s == 0.0 {
            let gray = (v * 255.0) as i32;
            return Rgb::new(gray, gray, gray);
        }

        let sextant = (h * 6.0) as i32;
        let f = h * 6.0 - f64::from(sextant);
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sextant.rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new((r * 255.0) as i32, (g * 255.0) as i32, (b * 255.0) as i32)
    }

    /// Convenience: convert to RGB, then render as hex.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}
