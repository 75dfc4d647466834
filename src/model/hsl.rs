//! HSL color type
//!
//! Hue/saturation/lightness is the working space for the perceptual
//! manipulations: shifting lightness or rotating hue is a single field
//! adjustment here where it would be a three-channel computation in RGB.

use std::fmt;

use super::rgb::Rgb;

/// A color in HSL coordinates.
///
/// Hue is degrees in `0..360` (construction wraps with Euclidean modulo,
/// so `-10` becomes `350`); saturation and lightness are whole percent in
/// `0..=100` (construction clamps). Fields stay private so a constructed
/// value can never hold an out-of-range coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Create an Hsl color, wrapping hue modulo 360 and clamping
    /// saturation and lightness into `0..=100`.
    ///
    /// # Example
    /// ```
    /// use colorkit::Hsl;
    /// let c = Hsl::new(-10, 120, 50);
    /// assert_eq!((c.h(), c.s(), c.l()), (350, 100, 50));
    /// ```
    #[inline]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
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

    /// Lightness in percent, `0..=100`.
    #[inline]
    pub fn l(self) -> u8 {
        self.l
    }

    /// Convert to RGB.
    ///
    /// Standard HLS->RGB algorithm in `f64`, scaled back to `0..=255` by
    /// truncation. Because hue/saturation/lightness were themselves
    /// truncated to integers, RGB->HSL->RGB round-trips can drift by a few
    /// units per channel; callers that need the original channels must
    /// keep the original [`Rgb`].
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        if s == 0.0 {
            let gray = (l * 255.0) as i32;
            return Rgb::new(gray, gray, gray);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        let r = hue_component(m1, m2, h + 1.0 / 3.0);
        let g = hue_component(m1, m2, h);
        let b = hue_component(m1, m2, h - 1.0 / 3.0);

        Rgb::new((r * 255.0) as i32, (g * 255.0) as i32, (b * 255.0) as i32)
    }

    /// Convenience: convert to RGB, then render as hex.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Render in CSS functional form, e.g. `hsl(210, 49%, 40%)`.
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// One channel of the piecewise HLS->RGB mapping. `hue` is in turns and
/// may sit outside `0..1`; it wraps here.
fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
