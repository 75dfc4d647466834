//! Color facade
//!
//! [`Color`] wraps exactly one [`Rgb`] value. Every accepted input
//! representation (string literal, `Rgb`, `Hsl`, `Hsv`, integer triple)
//! normalizes to RGB at construction, and every other representation is
//! a view computed on demand. All manipulations are pure: they return a
//! new `Color` and never mutate in place.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::model::{Hsl, Hsv, Rgb};
use crate::parse;

/// The closed set of constructor inputs.
///
/// [`Color::new`] matches exhaustively over this sum type; a shape
/// outside the set is unrepresentable, so the only fallible arm is text.
#[derive(Debug, Clone, Copy)]
pub enum ColorInput<'a> {
    /// A color literal: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, or a
    /// named color.
    Text(&'a str),
    /// An RGB value, used as-is.
    Rgb(Rgb),
    /// An HSL value, converted to RGB.
    Hsl(Hsl),
    /// An HSV value, converted to RGB.
    Hsv(Hsv),
    /// A bare integer triple, clamped like [`Rgb::new`].
    Triple(i32, i32, i32),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<Hsv> for ColorInput<'_> {
    fn from(hsv: Hsv) -> Self {
        Self::Hsv(hsv)
    }
}

impl From<(i32, i32, i32)> for ColorInput<'_> {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::Triple(r, g, b)
    }
}

/// A color, normalized to RGB.
///
/// # Example
///
/// ```
/// use colorkit::Color;
///
/// let coral = Color::new("#ff6b6b")?;
/// assert_eq!(coral.lighten(20).hex(), "#fecccc");
/// assert_eq!(coral.complement().hex(), "#65feff");
/// # Ok::<(), colorkit::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    /// Conventional step for [`lighten`](Self::lighten) /
    /// [`darken`](Self::darken) / [`saturate`](Self::saturate) /
    /// [`desaturate`](Self::desaturate) when a caller has no opinion.
    pub const DEFAULT_ADJUSTMENT: i32 = 10;

    /// Conventional even-mix ratio for [`blend`](Self::blend).
    pub const DEFAULT_BLEND_RATIO: f64 = 0.5;

    /// Construct a color from any accepted input representation.
    ///
    /// Only the text arm can fail; the direct value arms always succeed
    /// because their types already carry the range invariants.
    ///
    /// # Errors
    ///
    /// [`ColorError`] when a text input matches no recognized grammar.
    pub fn new<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self, ColorError> {
        match input.into() {
            ColorInput::Text(s) => parse::parse(s).map(|rgb| Self { rgb }),
            ColorInput::Rgb(rgb) => Ok(Self { rgb }),
            ColorInput::Hsl(hsl) => Ok(Self { rgb: hsl.to_rgb() }),
            ColorInput::Hsv(hsv) => Ok(Self { rgb: hsv.to_rgb() }),
            ColorInput::Triple(r, g, b) => Ok(Self { rgb: Rgb::new(r, g, b) }),
        }
    }

    /// The underlying RGB value.
    #[inline]
    pub fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Lowercase hex literal, `#rrggbb`.
    pub fn hex(self) -> String {
        self.rgb.to_hex()
    }

    /// HSL view (computed, not stored).
    pub fn hsl(self) -> Hsl {
        self.rgb.to_hsl()
    }

    /// HSV view (computed, not stored).
    pub fn hsv(self) -> Hsv {
        self.rgb.to_hsv()
    }

    /// Raise HSL lightness by `amount` percent, clamped at 100.
    ///
    /// Routes through HSL, so a zero `amount` is identity only modulo
    /// the usual truncation drift.
    pub fn lighten(self, amount: i32) -> Self {
        let hsl = self.hsl();
        Self::from(Hsl::new(
            i32::from(hsl.h()),
            i32::from(hsl.s()),
            i32::from(hsl.l()) + amount,
        ))
    }

    /// Lower HSL lightness by `amount` percent, clamped at 0.
    pub fn darken(self, amount: i32) -> Self {
        self.lighten(-amount)
    }

    /// Raise HSL saturation by `amount` percent, clamped at 100.
    pub fn saturate(self, amount: i32) -> Self {
        let hsl = self.hsl();
        Self::from(Hsl::new(
            i32::from(hsl.h()),
            i32::from(hsl.s()) + amount,
            i32::from(hsl.l()),
        ))
    }

    /// Lower HSL saturation by `amount` percent, clamped at 0.
    pub fn desaturate(self, amount: i32) -> Self {
        self.saturate(-amount)
    }

    /// Channel-wise negative: each channel becomes `255 - value`.
    pub fn invert(self) -> Self {
        Self::from(Rgb::from_u8(
            255 - self.rgb.r,
            255 - self.rgb.g,
            255 - self.rgb.b,
        ))
    }

    /// Replace all channels with the truncated luminance.
    pub fn grayscale(self) -> Self {
        let gray = (self.rgb.luminance() * 255.0) as i32;
        Self::from(Rgb::new(gray, gray, gray))
    }

    /// Rotate hue by 180 degrees.
    pub fn complement(self) -> Self {
        let hsl = self.hsl();
        Self::from(Hsl::new(
            i32::from(hsl.h()) + 180,
            i32::from(hsl.s()),
            i32::from(hsl.l()),
        ))
    }

    /// Per-channel linear interpolation toward `other`.
    ///
    /// `ratio` 0.0 keeps `self`, 1.0 yields `other`. The ratio is
    /// deliberately not validated: extrapolation outside `0..=1` is
    /// allowed, and the channel clamp at RGB construction absorbs any
    /// out-of-range result.
    pub fn blend(self, other: Self, ratio: f64) -> Self {
        let lerp =
            |a: u8, b: u8| (f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio) as i32;
        Self::from(Rgb::new(
            lerp(self.rgb.r, other.rgb.r),
            lerp(self.rgb.g, other.rgb.g),
            lerp(self.rgb.b, other.rgb.b),
        ))
    }

    /// WCAG-style contrast ratio between the two colors' luminances:
    /// `(lighter + 0.05) / (darker + 0.05)`. Ranges from 1.0 (identical)
    /// to 21.0 (black on white). Symmetric in its arguments.
    pub fn contrast_ratio(self, other: Self) -> f64 {
        let l1 = self.rgb.luminance() + 0.05;
        let l2 = other.rgb.luminance() + 0.05;
        l1.max(l2) / l1.min(l2)
    }

    /// True when luminance exceeds 0.5.
    #[inline]
    pub fn is_light(self) -> bool {
        self.rgb.is_light()
    }

    /// True when luminance is at most 0.5.
    #[inline]
    pub fn is_dark(self) -> bool {
        self.rgb.is_dark()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { rgb }
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self { rgb: hsl.to_rgb() }
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self { rgb: hsv.to_rgb() }
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self { rgb: Rgb::new(r, g, b) }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s).map(|rgb| Self { rgb })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb)
    }
}
