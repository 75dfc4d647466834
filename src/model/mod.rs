//! Color value types and conversions
//!
//! Three fixed-range integer representations of the same color point:
//!
//! - [`Rgb`]: 8-bit channel triple; the canonical form everything
//!   normalizes to.
//! - [`Hsl`]: hue/saturation/lightness view; the working space for
//!   lightness and hue manipulation.
//! - [`Hsv`]: hue/saturation/value view.
//!
//! Construction never fails: channels clamp into range and hue wraps
//! modulo 360. Conversions truncate when scaling back to integers, so
//! cylindrical round-trips are close but not bit-exact.
//!
//! # Example
//!
//! ```
//! use colorkit::{Hsl, Rgb};
//!
//! let rgb = Rgb::new(51, 102, 153);
//! let hsl = rgb.to_hsl();
//! assert_eq!(hsl.to_css(), "hsl(210, 49%, 40%)");
//! ```

mod hsl;
mod hsv;
mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
