//! Palette generation
//!
//! Pure functions deriving ordered color sequences from one or two seed
//! colors. Order is meaningful: each scheme emits its colors along a hue
//! or lightness progression. Nothing here holds state; callers may
//! invoke these from any number of threads without coordination.
//!
//! The hue schemes read the seed's HSL coordinates, place new hues
//! around the wheel, and keep saturation/lightness fixed; since those
//! coordinates are whole-percent truncations, derived colors inherit the
//! usual round-trip drift relative to the seed's exact channels.

use crate::color::Color;
use crate::error::PaletteError;
use crate::model::Hsl;

/// Conventional number of colors for [`analogous`] and [`monochromatic`].
pub const DEFAULT_COUNT: usize = 5;

/// Conventional hue spread in degrees for [`analogous`] and
/// [`split_complementary`].
pub const DEFAULT_SPREAD: i32 = 30;

/// Conventional sample count for [`gradient`].
pub const DEFAULT_STEPS: usize = 5;

/// Hues spaced `spread` degrees apart, centered on the seed's hue.
///
/// The first hue sits at `base.h - spread * (count - 1) / 2` (floor division),
/// so the seed's own hue is the middle entry for odd `count`. Hues wrap
/// modulo 360; saturation and lightness stay fixed.
pub fn analogous(base: Color, count: usize, spread: i32) -> Vec<Color> {
    let hsl = base.hsl();
    let start = i32::from(hsl.h()) - (spread * (count as i32 - 1)).div_euclid(2);
    (0..count as i32)
        .map(|i| {
            Color::from(Hsl::new(
                start + spread * i,
                i32::from(hsl.s()),
                i32::from(hsl.l()),
            ))
        })
        .collect()
}

/// The seed and its 180-degree complement. Always length 2.
pub fn complementary(base: Color) -> Vec<Color> {
    vec![base, base.complement()]
}

/// The seed plus the two hues 120 and 240 degrees away. Always length 3.
pub fn triadic(base: Color) -> Vec<Color> {
    let hsl = base.hsl();
    let rotated = |degrees: i32| {
        Color::from(Hsl::new(
            i32::from(hsl.h()) + degrees,
            i32::from(hsl.s()),
            i32::from(hsl.l()),
        ))
    };
    vec![base, rotated(120), rotated(240)]
}

/// The seed plus the two hues flanking its complement by `spread`
/// degrees. Always length 3.
pub fn split_complementary(base: Color, spread: i32) -> Vec<Color> {
    let hsl = base.hsl();
    let rotated = |degrees: i32| {
        Color::from(Hsl::new(
            i32::from(hsl.h()) + degrees,
            i32::from(hsl.s()),
            i32::from(hsl.l()),
        ))
    };
    vec![base, rotated(180 - spread), rotated(180 + spread)]
}

/// `count` colors varying lightness only, dark to light.
///
/// Steps of `80 / count` percent (floor division), starting no lower
/// than 10% and capping at 90%, with hue and saturation fixed. The
/// extremes are avoided because lightness 0 and 100 collapse every hue
/// to black or white.
///
/// # Errors
///
/// [`PaletteError::ZeroCount`] when `count` is zero, which would make
/// the step width undefined.
pub fn monochromatic(base: Color, count: usize) -> Result<Vec<Color>, PaletteError> {
    if count == 0 {
        return Err(PaletteError::ZeroCount);
    }

    let hsl = base.hsl();
    let count = count as i32;
    let step = 80_i32.div_euclid(count);
    let start = (i32::from(hsl.l()) - (step * count).div_euclid(2)).max(10);

    Ok((0..count)
        .map(|i| {
            Color::from(Hsl::new(
                i32::from(hsl.h()),
                i32::from(hsl.s()),
                (start + step * i).min(90),
            ))
        })
        .collect())
}

/// Linear blend from `start` to `end` in `steps` samples.
///
/// For `steps > 1` the samples include both endpoints
/// (`ratio = i / (steps - 1)`). For `steps <= 1` every sample uses ratio
/// zero, so the result is `steps` copies of `start`: a degenerate
/// request, not an error.
pub fn gradient(start: Color, end: Color, steps: usize) -> Vec<Color> {
    (0..steps)
        .map(|i| {
            let ratio = if steps > 1 {
                i as f64 / (steps - 1) as f64
            } else {
                0.0
            };
            start.blend(end, ratio)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        Color::new(s).unwrap()
    }

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.hex()).collect()
    }

    #[test]
    fn test_analogous_centers_on_seed() {
        let result = analogous(color("#ff6b6b"), DEFAULT_COUNT, DEFAULT_SPREAD);
        assert_eq!(
            hexes(&result),
            ["#ff65fe", "#ff65b2", "#ff6565", "#ffb265", "#feff65"]
        );
        // Seed hue 0 sits in the middle; neighbors step 30 degrees,
        // wrapping below zero.
        let hues: Vec<u16> = result.iter().map(|c| c.hsl().h()).collect();
        assert_eq!(hues, [300, 330, 0, 30, 60]);
    }

    #[test]
    fn test_analogous_even_count() {
        let result = analogous(color("#ff6b6b"), 4, 20);
        assert_eq!(hexes(&result), ["#ff65b2", "#ff657f", "#ff7f65", "#ffb265"]);
    }

    #[test]
    fn test_analogous_degenerate_counts() {
        assert!(analogous(color("red"), 0, DEFAULT_SPREAD).is_empty());
        assert_eq!(hexes(&analogous(color("#336699"), 1, DEFAULT_SPREAD)), ["#346597"]);
    }

    #[test]
    fn test_complementary_pair() {
        let result = complementary(color("#ff6b6b"));
        assert_eq!(hexes(&result), ["#ff6b6b", "#65feff"]);
        let hues: Vec<u16> = result.iter().map(|c| c.hsl().h()).collect();
        assert_eq!(hues, [0, 180]);
    }

    #[test]
    fn test_triadic_exact_thirds() {
        // A seed whose HSL coordinates are exact keeps the measured hues
        // exactly 120 degrees apart.
        let result = triadic(color("red"));
        assert_eq!(result.len(), 3);
        let hues: Vec<u16> = result.iter().map(|c| c.hsl().h()).collect();
        assert_eq!(hues, [0, 120, 240]);
    }

    #[test]
    fn test_triadic_golden_values() {
        assert_eq!(hexes(&triadic(color("#ff6b6b"))), ["#ff6b6b", "#65ff65", "#6565ff"]);
        assert_eq!(hexes(&triadic(color("#336699"))), ["#336699", "#973466", "#669734"]);
    }

    #[test]
    fn test_split_complementary_flanks() {
        let result = split_complementary(color("#ff6b6b"), DEFAULT_SPREAD);
        assert_eq!(hexes(&result), ["#ff6b6b", "#65ffb2", "#65b2ff"]);
        let hues: Vec<u16> = result.iter().map(|c| c.hsl().h()).collect();
        assert_eq!(hues, [0, 150, 210]);

        let wide = split_complementary(color("#336699"), 45);
        assert_eq!(hexes(&wide), ["#336699", "#97344d", "#7e9734"]);
    }

    #[test]
    fn test_monochromatic_lightness_ramp() {
        let result = monochromatic(color("#ff6b6b"), DEFAULT_COUNT).unwrap();
        assert_eq!(
            hexes(&result),
            ["#990000", "#ea0000", "#ff3d3d", "#ff8e8e", "#fecccc"]
        );
        assert_eq!(
            hexes(&monochromatic(color("#ff6b6b"), 3).unwrap()),
            ["#9e0000", "#fe2323", "#ffa8a8"]
        );

        // Lightness never leaves the working band.
        for c in &result {
            let l = c.hsl().l();
            assert!((10..=90).contains(&i32::from(l)), "lightness {l} out of band");
        }
    }

    #[test]
    fn test_monochromatic_dark_seed_floors_at_10() {
        // Seed lightness 12 would start negative; the floor kicks in.
        let seed = Color::from(Hsl::new(210, 60, 12));
        assert_eq!(
            hexes(&monochromatic(seed, 4).unwrap()),
            ["#0a1928", "#1e4c7a", "#327fcc", "#84b2e0"]
        );
    }

    #[test]
    fn test_monochromatic_single() {
        assert_eq!(hexes(&monochromatic(color("#336699"), 1).unwrap()), ["#0d1925"]);
    }

    #[test]
    fn test_monochromatic_zero_count_fails() {
        assert_eq!(
            monochromatic(color("red"), 0),
            Err(PaletteError::ZeroCount)
        );
    }

    #[test]
    fn test_gradient_endpoints_inclusive() {
        let result = gradient(color("red"), color("blue"), DEFAULT_STEPS);
        assert_eq!(
            hexes(&result),
            ["#ff0000", "#bf003f", "#7f007f", "#3f00bf", "#0000ff"]
        );

        assert_eq!(
            hexes(&gradient(color("black"), color("white"), 3)),
            ["#000000", "#7f7f7f", "#ffffff"]
        );
        assert_eq!(
            hexes(&gradient(color("black"), color("white"), 2)),
            ["#000000", "#ffffff"]
        );
        assert_eq!(
            hexes(&gradient(color("#336699"), color("orange"), 4)),
            ["#336699", "#777b66", "#bb9033", "#ffa500"]
        );
    }

    #[test]
    fn test_gradient_degenerate_steps() {
        let a = color("red");
        let b = color("blue");
        assert_eq!(gradient(a, b, 1), vec![a]);
        assert!(gradient(a, b, 0).is_empty());
    }

    #[test]
    fn test_gradient_identical_endpoints_is_noop() {
        let a = color("#abc");
        assert_eq!(gradient(a, a, 4), vec![a; 4]);
        assert_eq!(gradient(a, a, DEFAULT_STEPS), vec![a; DEFAULT_STEPS]);
    }
}
