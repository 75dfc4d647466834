//! colorkit: color parsing, conversion, and palette generation
//!
//! This library parses color literals, converts between RGB/HSL/HSV
//! models, performs perceptual manipulations, and derives color schemes
//! from seed colors. Everything is a plain value computation: no I/O, no
//! shared state, no threads.
//!
//! # Quick Start
//!
//! [`Color`] is the primary entry point. It accepts any supported input
//! representation and normalizes it to RGB:
//!
//! ```
//! use colorkit::Color;
//!
//! let coral = Color::new("#ff6b6b")?;
//! assert_eq!(coral.hex(), "#ff6b6b");
//! assert_eq!(coral.hsl().to_css(), "hsl(0, 100%, 70%)");
//! assert!(coral.is_light());
//!
//! let softer = coral.lighten(20);
//! assert_eq!(softer.hex(), "#fecccc");
//! # Ok::<(), colorkit::ColorError>(())
//! ```
//!
//! Accepted literals are hex (`#rgb`, `#rrggbb`), functional notation
//! (`rgb()`/`rgba()` and `hsl()`/`hsla()`, with any alpha component
//! ignored), and a small fixed set of [named colors](named::NAMED_COLORS):
//!
//! ```
//! use colorkit::Color;
//!
//! assert_eq!(Color::new("red")?, Color::new("rgb(255, 0, 0)")?);
//! assert_eq!(Color::new("#abc")?.hex(), "#aabbcc");
//! # Ok::<(), colorkit::ColorError>(())
//! ```
//!
//! # Color Schemes
//!
//! The [`palette`] module derives ordered sequences of colors:
//!
//! ```
//! use colorkit::{palette, Color};
//!
//! let base = Color::new("#336699")?;
//! let scheme = palette::triadic(base);
//! assert_eq!(scheme.len(), 3);
//!
//! let ramp = palette::gradient(Color::new("red")?, Color::new("blue")?, 5);
//! assert_eq!(ramp[2].hex(), "#7f007f");
//! # Ok::<(), colorkit::ColorError>(())
//! ```
//!
//! # Numeric Policy
//!
//! Out-of-range numeric input never errors: RGB channels and
//! saturation/lightness/value percentages clamp, hue wraps modulo 360.
//! Only malformed *strings* fail, with a [`ColorError`] naming the
//! offending input. Conversions truncate (never round) when scaling back
//! to integer coordinates, so cylindrical round-trips may drift by a few
//! channel units; outputs are stable and deterministic, and the test
//! suite pins them exactly.

pub mod color;
pub mod error;
pub mod model;
pub mod named;
pub mod palette;

mod parse;

pub use color::{Color, ColorInput};
pub use error::{ColorError, PaletteError};
pub use model::{Hsl, Hsv, Rgb};
