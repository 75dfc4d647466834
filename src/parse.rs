//! Color string grammar
//!
//! One entry point, [`parse`], turns any accepted color literal into an
//! [`Rgb`] value. Inputs are trimmed and lowercased, then dispatched on
//! prefix:
//!
//! - `#...`: hex, 3-digit shorthand or 6-digit form
//! - `rgb(...)` / `rgba(...)`: integer channels, alpha ignored
//! - `hsl(...)` / `hsla(...)`: percent signs optional, alpha ignored
//! - a name from the fixed table (resolved to hex, then hex-parsed)
//!
//! Nothing else is recognized: no `hwb()`, no CSS level-4
//! space-separated syntax, no alpha hex digits. Functional notation is
//! scanned by hand; the grammar is three comma-separated integers with
//! optional surrounding whitespace, and anything after the third integer
//! (an alpha component, the closing paren, trailing text) is ignored.

use tracing::{debug, trace};

use crate::error::ColorError;
use crate::model::{Hsl, Rgb};
use crate::named;

/// Parse a color literal into RGB.
///
/// Matching is case-insensitive and whitespace-tolerant at the edges.
/// Out-of-range *values* never fail here; they clamp or wrap at
/// construction. Only unrecognized *shapes* produce an error.
pub(crate) fn parse(input: &str) -> Result<Rgb, ColorError> {
    let normalized = input.trim().to_lowercase();
    trace!(input = %normalized, "parsing color string");

    if normalized.starts_with('#') {
        return normalized.parse();
    }
    if normalized.starts_with("rgb") {
        return parse_rgb_function(&normalized);
    }
    if normalized.starts_with("hsl") {
        return parse_hsl_function(&normalized);
    }
    if let Some(hex) = named::lookup(&normalized) {
        return hex.parse();
    }

    debug!(input = %normalized, "color string matched no known grammar");
    Err(ColorError::UnknownFormat(normalized))
}

/// `rgb(R, G, B)` / `rgba(R, G, B, A)`, alpha ignored.
fn parse_rgb_function(s: &str) -> Result<Rgb, ColorError> {
    rgb_components(s).ok_or_else(|| ColorError::InvalidRgbFunction(s.to_string()))
}

fn rgb_components(s: &str) -> Option<Rgb> {
    let args = function_args(s, "rgba", "rgb")?;
    let mut fields = args.splitn(3, ',');
    let r = whole_field(fields.next()?)?;
    let g = whole_field(fields.next()?)?;
    let b = leading_int(fields.next()?)?;
    Some(Rgb::new(r, g, b))
}

/// `hsl(H, S%, L%)` / `hsla(H, S%, L%, A)`, percent signs optional,
/// alpha ignored. Builds the HSL value and converts to RGB.
fn parse_hsl_function(s: &str) -> Result<Rgb, ColorError> {
    hsl_components(s).ok_or_else(|| ColorError::InvalidHslFunction(s.to_string()))
}

fn hsl_components(s: &str) -> Option<Rgb> {
    let args = function_args(s, "hsla", "hsl")?;
    let mut fields = args.splitn(3, ',');
    let h = whole_field(fields.next()?)?;
    let sat = percent_field(fields.next()?)?;
    let l = leading_int(fields.next()?)?;
    Some(Hsl::new(h, sat, l).to_rgb())
}

/// Strip `long(` or `short(`; the longer prefix must be tried first so
/// `rgba(` is not consumed as `rgb` + `a(`.
fn function_args<'a>(s: &'a str, long: &str, short: &str) -> Option<&'a str> {
    s.strip_prefix(long)
        .or_else(|| s.strip_prefix(short))?
        .strip_prefix('(')
}

/// A field that must be entirely one nonnegative integer (modulo
/// surrounding whitespace).
fn whole_field(field: &str) -> Option<i32> {
    let digits = field.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Same as [`whole_field`] but tolerating one trailing percent sign.
fn percent_field(field: &str) -> Option<i32> {
    let digits = field.trim();
    whole_field(digits.strip_suffix('%').unwrap_or(digits))
}

/// The final component: leading digits are the value, the rest of the
/// string (percent sign, alpha, closing paren, trailing text) is ignored.
fn leading_int(field: &str) -> Option<i32> {
    let trimmed = field.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_dispatch() {
        assert_eq!(parse("#ff0000").unwrap(), Rgb::from_u8(255, 0, 0));
        assert_eq!(parse("#abc").unwrap(), Rgb::from_u8(0xaa, 0xbb, 0xcc));
        assert_eq!(parse("  #FFFFFF  ").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse("rgb(0, 128, 255)").unwrap(), Rgb::from_u8(0, 128, 255));
        assert_eq!(parse("rgb(0,128,255)").unwrap(), Rgb::from_u8(0, 128, 255));
        assert_eq!(parse("RGB(10, 20, 30)").unwrap(), Rgb::from_u8(10, 20, 30));
    }

    #[test]
    fn test_rgba_alpha_ignored() {
        assert_eq!(parse("rgba(12,34,56,0.5)").unwrap(), Rgb::from_u8(12, 34, 56));
        assert_eq!(parse("rgba(12, 34, 56, 1)").unwrap(), Rgb::from_u8(12, 34, 56));
    }

    /// The grammar only anchors up to the third integer; trailing text is
    /// not validated.
    #[test]
    fn test_rgb_trailing_text_ignored() {
        assert_eq!(parse("rgb(1,2,3junk").unwrap(), Rgb::from_u8(1, 2, 3));
        assert_eq!(parse("rgb(1,2,3").unwrap(), Rgb::from_u8(1, 2, 3));
    }

    #[test]
    fn test_rgb_out_of_range_clamps() {
        // Range policy is clamp-at-construction, not a parse error.
        assert_eq!(parse("rgb(300, 0, 999)").unwrap(), Rgb::from_u8(255, 0, 255));
    }

    #[test]
    fn test_rgb_function_errors() {
        for bad in ["rgb()", "rgb(1,2)", "rgb(a,b,c)", "rgb(1,,3)", "rgb(-1,2,3)", "rgb 1,2,3"] {
            assert!(
                matches!(parse(bad), Err(ColorError::InvalidRgbFunction(_))),
                "expected InvalidRgbFunction for {bad:?}"
            );
        }
    }

    #[test]
    fn test_hsl_function() {
        assert_eq!(parse("hsl(120, 50%, 50%)").unwrap(), Rgb::from_u8(63, 191, 63));
        // Percent signs are optional.
        assert_eq!(parse("hsl(210,49,40)").unwrap(), Rgb::from_u8(52, 101, 151));
        assert_eq!(
            parse("hsla(300, 100, 25, 0.5)").unwrap(),
            Rgb::from_u8(127, 0, 127)
        );
    }

    #[test]
    fn test_hsl_hue_wraps_and_percent_clamps() {
        assert_eq!(parse("hsl(480, 100%, 50%)").unwrap(), parse("hsl(120, 100%, 50%)").unwrap());
        assert_eq!(parse("hsl(0, 200%, 50%)").unwrap(), Rgb::from_u8(255, 0, 0));
    }

    #[test]
    fn test_hsl_function_errors() {
        for bad in ["hsl()", "hsl(1,2)", "hsl(x,50%,50%)", "hsl(120, 50 %, 50%)"] {
            assert!(
                matches!(parse(bad), Err(ColorError::InvalidHslFunction(_))),
                "expected InvalidHslFunction for {bad:?}"
            );
        }
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse("red").unwrap(), Rgb::from_u8(255, 0, 0));
        assert_eq!(parse(" TEAL ").unwrap(), Rgb::from_u8(0, 128, 128));
        assert_eq!(parse("grey").unwrap(), parse("gray").unwrap());
    }

    #[test]
    fn test_unknown_format() {
        let err = parse("not-a-color").unwrap_err();
        assert_eq!(err, ColorError::UnknownFormat("not-a-color".to_string()));
        assert!(matches!(parse(""), Err(ColorError::UnknownFormat(_))));
        // Names are matched after trim/lowercase, but nothing fuzzier.
        assert!(matches!(parse("reddish"), Err(ColorError::UnknownFormat(_))));
    }
}
