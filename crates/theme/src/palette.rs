//! Tonal palette generation.
//!
//! A palette holds the seed's hue and saturation fixed and moves only its
//! lightness. The two halves use different curves:
//! - lighter stops move a fraction of the remaining distance to white,
//!   `L' = L + (100 - L) * factor`
//! - darker stops scale the seed's own lightness down,
//!   `L' = L - L * factor`
//!
//! The contrast battery and its acceptance threshold are tuned against exactly
//! these curves, so they must stay asymmetric.

use crate::color::{hsl_to_rgb, HexColor, Hsl};
use crate::error::Result;
use crate::types::{Palette, Stop};

/// Fraction of the way to white for stops 50..400.
const LIGHTEN_FACTORS: [(Stop, f64); 5] = [
    (Stop::S50, 0.9),
    (Stop::S100, 0.8),
    (Stop::S200, 0.7),
    (Stop::S300, 0.6),
    (Stop::S400, 0.5),
];

/// Fraction of the seed's lightness removed for stops 600..950.
const DARKEN_FACTORS: [(Stop, f64); 5] = [
    (Stop::S600, 0.2),
    (Stop::S700, 0.4),
    (Stop::S800, 0.6),
    (Stop::S900, 0.8),
    (Stop::S950, 0.9),
];

fn lightened(l: f64, factor: f64) -> f64 {
    (l + (100.0 - l) * factor).min(100.0)
}

fn darkened(l: f64, factor: f64) -> f64 {
    (l - l * factor).max(0.0)
}

fn interpolate_to_white(hsl: Hsl, factor: f64) -> HexColor {
    HexColor::from_rgb(hsl_to_rgb(hsl.with_lightness(lightened(hsl.l, factor))))
}

fn interpolate_to_black(hsl: Hsl, factor: f64) -> HexColor {
    HexColor::from_rgb(hsl_to_rgb(hsl.with_lightness(darkened(hsl.l, factor))))
}

fn factor_for(table: &[(Stop, f64)], stop: Stop) -> Option<f64> {
    table
        .iter()
        .find(|(s, _)| *s == stop)
        .map(|(_, factor)| *factor)
}

/// Expand a 6-digit hex seed into its 11-stop tonal scale.
///
/// Stop 500 is the normalized seed itself, never a recomputed value. The seed
/// is not validated beyond what parsing requires: a malformed color fails with
/// [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat).
pub fn generate_color_variations(base: &str) -> Result<Palette> {
    HexColor::parse(base).map(|seed| generate_palette(&seed))
}

/// Same as [`generate_color_variations`] for a seed that is already parsed.
pub fn generate_palette(seed: &HexColor) -> Palette {
    let hsl = seed.hsl();

    let stops = Stop::ALL.map(|stop| {
        if let Some(factor) = factor_for(&LIGHTEN_FACTORS, stop) {
            interpolate_to_white(hsl, factor)
        } else if let Some(factor) = factor_for(&DARKEN_FACTORS, stop) {
            interpolate_to_black(hsl, factor)
        } else {
            seed.normalized()
        }
    });

    tracing::trace!(seed = %seed, "generated tonal palette");
    Palette::new(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_hsl;
    use crate::error::ColorError;
    use pretty_assertions::assert_eq;

    fn lightness(hex: &str) -> f64 {
        hex_to_hsl(hex).unwrap().l
    }

    #[test]
    fn test_primary_blue_scale() {
        let palette = generate_color_variations("#3B82F6").unwrap();
        let stops: Vec<&str> = palette.iter().map(|(_, color)| color).collect();
        assert_eq!(
            stops,
            vec![
                "#ebf3fe", "#d8e6fd", "#c4dafc", "#b1cdfb", "#9dc1fb", "#3B82F6", "#0b5fe9",
                "#0847af", "#053075", "#03183a", "#010c1d",
            ]
        );
    }

    #[test]
    fn test_base_stop_is_normalized_seed() {
        assert_eq!(generate_color_variations("#3b82f6").unwrap().base(), "#3B82F6");
        assert_eq!(generate_color_variations("10b981").unwrap().base(), "#10B981");
    }

    #[test]
    fn test_hue_and_saturation_are_held() {
        let seed = hex_to_hsl("#10B981").unwrap();
        let palette = generate_color_variations("#10B981").unwrap();
        for stop in [Stop::S200, Stop::S400, Stop::S700] {
            let hsl = hex_to_hsl(palette.get(stop)).unwrap();
            assert!((hsl.h - seed.h).abs() < 2.0, "{stop} hue drifted: {}", hsl.h);
            assert!((hsl.s - seed.s).abs() < 3.0, "{stop} saturation drifted: {}", hsl.s);
        }
    }

    #[test]
    fn test_darkening_is_multiplicative() {
        // Seed lightness is ~50: 600 lands near 40 and 950 near 5.
        let palette = generate_color_variations("#808080").unwrap();
        assert!((lightness(palette.get(Stop::S600)) - 40.0).abs() < 0.5);
        assert!((lightness(palette.get(Stop::S950)) - 5.1).abs() < 0.5);
        assert!((lightness(palette.get(Stop::S50)) - 95.0).abs() < 0.5);
    }

    #[test]
    fn test_black_seed_collapses_dark_half() {
        let palette = generate_color_variations("#000000").unwrap();
        for stop in [Stop::S600, Stop::S700, Stop::S800, Stop::S900, Stop::S950] {
            assert_eq!(palette.get(stop), "#000000");
        }
        assert_eq!(palette.get(Stop::S50), "#e6e6e6");
    }

    #[test]
    fn test_white_seed_collapses_light_half() {
        let palette = generate_color_variations("#FFFFFF").unwrap();
        for stop in [Stop::S50, Stop::S100, Stop::S200, Stop::S300, Stop::S400] {
            assert_eq!(palette.get(stop), "#ffffff");
        }
        assert_eq!(palette.get(Stop::S600), "#cccccc");
    }

    #[test]
    fn test_interpolation_helpers() {
        let hsl = hex_to_hsl("#808080").unwrap();
        assert_eq!(interpolate_to_white(hsl, 1.0).as_str(), "#ffffff");
        assert_eq!(interpolate_to_black(hsl, 1.0).as_str(), "#000000");
        assert_eq!(interpolate_to_white(hsl, 0.0).as_str(), "#808080");
    }

    #[test]
    fn test_invalid_seed_fails() {
        assert_eq!(
            generate_color_variations("#abc"),
            Err(ColorError::InvalidColorFormat("#abc".to_string()))
        );
        assert!(generate_color_variations("blue").is_err());
    }
}
