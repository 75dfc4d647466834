use std::num::ParseIntError;

use thiserror::Error;

/// Error type for color parsing.
///
/// Returned when an input string matches none of the recognized color
/// grammars, or matches a grammar but carries malformed components.
/// Parsing is pure and deterministic, so these errors are never worth
/// retrying with the same input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidHexLength,

    /// Invalid hexadecimal digit encountered
    #[error("invalid hex digit: {0}")]
    InvalidHexDigit(#[from] ParseIntError),

    /// String started with `rgb` but did not match `rgb(r, g, b[, a])`
    #[error("invalid rgb() color: {0}")]
    InvalidRgbFunction(String),

    /// String started with `hsl` but did not match `hsl(h, s%, l%[, a])`
    #[error("invalid hsl() color: {0}")]
    InvalidHslFunction(String),

    /// String matched no recognized grammar and no named color
    #[error("unknown color format: {0}")]
    UnknownFormat(String),
}

/// Error type for palette generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A monochromatic palette needs at least one color to size its
    /// lightness steps
    #[error("monochromatic palette requires a count of at least 1")]
    ZeroCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_messages() {
        assert_eq!(
            ColorError::InvalidHexLength.to_string(),
            "invalid hex color length (expected 3 or 6 digits)"
        );
        assert_eq!(
            ColorError::InvalidRgbFunction("rgb(1,2)".to_string()).to_string(),
            "invalid rgb() color: rgb(1,2)"
        );
        assert_eq!(
            ColorError::InvalidHslFunction("hsl(1)".to_string()).to_string(),
            "invalid hsl() color: hsl(1)"
        );
        assert_eq!(
            ColorError::UnknownFormat("not-a-color".to_string()).to_string(),
            "unknown color format: not-a-color"
        );
    }

    #[test]
    fn test_color_error_from_parse_int_error() {
        let parse_err = u8::from_str_radix("zz", 16).unwrap_err();
        let err: ColorError = parse_err.into();
        assert!(matches!(err, ColorError::InvalidHexDigit(_)));
        assert!(err.to_string().starts_with("invalid hex digit:"));
    }

    #[test]
    fn test_palette_error_message() {
        assert_eq!(
            PaletteError::ZeroCount.to_string(),
            "monochromatic palette requires a count of at least 1"
        );
    }
}
