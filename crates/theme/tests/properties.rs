use pretty_assertions::assert_eq;

use tinta_theme::*;

const SAMPLES: [&str; 12] = [
    "#000000", "#FFFFFF", "#3B82F6", "#10b981", "#EF4444", "#F59E0B", "#808080", "#7C3AED",
    "#0f172a", "#fef3c7", "#00ff00", "#123456",
];

fn lightness(hex: &str) -> f64 {
    hex_to_hsl(hex).unwrap().l
}

#[test]
fn hex_round_trips_through_rgb() {
    for hex in SAMPLES {
        let round = rgb_to_hex(hex_to_rgb(hex).unwrap());
        assert_eq!(round.to_uppercase(), normalize_hex(hex), "{hex}");
    }
}

#[test]
fn palette_keeps_seed_at_500() {
    for hex in SAMPLES {
        let palette = generate_color_variations(hex).unwrap();
        assert_eq!(palette.get(Stop::S500), normalize_hex(hex), "{hex}");
    }
}

#[test]
fn palette_lightness_never_increases() {
    for hex in SAMPLES {
        let palette = generate_color_variations(hex).unwrap();
        let levels: Vec<f64> = palette.iter().map(|(_, color)| lightness(color)).collect();
        for pair in levels.windows(2) {
            // 8-bit rounding can wobble a collapsed end by a fraction of a point
            assert!(pair[0] + 0.5 >= pair[1], "{hex}: {levels:?}");
        }
    }
}

#[test]
fn contrast_is_commutative_and_bounded() {
    for a in SAMPLES {
        for b in SAMPLES {
            let ab = check_contrast(a, b).unwrap();
            let ba = check_contrast(b, a).unwrap();
            assert_eq!(ab.ratio, ba.ratio, "{a} / {b}");
            assert!((1.0..=21.0).contains(&ab.ratio), "{a} / {b}: {}", ab.ratio);
        }
    }
}

#[test]
fn summary_counts_add_up() {
    for primary in SAMPLES {
        for secondary in ["#FFFFFF", "#10B981", "#0f172a"] {
            let tokens = build_theme_tokens(&ThemeColors::new(primary, secondary));
            let summary = tokens.summary;
            assert_eq!(summary.passing + summary.failing, summary.total);
            assert!(summary.pass_rate <= 100);
            assert_eq!(summary.total, CRITICAL_CHECKS.len());
        }
    }
}

#[test]
fn blue_scale_ordering() {
    let palette = generate_color_variations("#3B82F6").unwrap();
    assert_eq!(palette.get(Stop::S500), "#3B82F6");

    let l = |stop| lightness(palette.get(stop));
    assert!(l(Stop::S950) < l(Stop::S900));
    assert!(l(Stop::S900) < l(Stop::S500));
    assert!(l(Stop::S50) > l(Stop::S100));
    assert!(l(Stop::S100) > l(Stop::S500));
}

#[test]
fn white_on_black() {
    let result = check_contrast("#FFFFFF", "#000000").unwrap();
    assert_eq!(result.ratio, 21.0);
    assert_eq!(result.level, WcagLevel::Aaa);
    assert!(result.passes);
}

#[test]
fn near_grays() {
    let result = check_contrast("#808080", "#888888").unwrap();
    assert!(result.ratio < 1.5);
    assert_eq!(result.level, WcagLevel::Fail);
    assert!(!result.passes);
}

#[test]
fn black_and_white_pair_is_accepted() {
    let result = validate_color_pair("#000000", "#FFFFFF");
    assert!(result.is_valid);
    // 11 of 14 checks pass: the destructive, warning and white success
    // buttons fail against their own 50 stop.
    assert_eq!(result.level, PairLevel::Good);
}

#[test]
fn unspecified_roles_get_defaults() {
    let tokens = build_theme_tokens(&ThemeColors::new("#3B82F6", "#10B981"));
    assert_eq!(tokens.colors.destructive.get(Stop::S500), "#EF4444");
    assert_eq!(tokens.colors.warning.get(Stop::S500), "#F59E0B");
}

#[test]
fn malformed_primary_falls_back() {
    let colors = validate_theme_colors(&ThemeColors::new("not-a-color", "#10B981"));
    assert_eq!(colors.primary.as_str(), "#3B82F6");
    assert_eq!(colors.secondary.as_str(), "#10B981");
}

#[test]
fn tokens_serialize_for_the_api() {
    let tokens = get_default_theme();
    let value = serde_json::to_value(&tokens).unwrap();

    assert_eq!(value["colors"]["warning"]["500"], "#F59E0B");
    assert_eq!(value["css"]["--radius"], "0.5rem");
    assert_eq!(value["css"]["dark---ring"], tokens.colors.primary.get(Stop::S400));
    assert_eq!(value["contrast"]["Muted Text"]["passes"], false);
    assert_eq!(value["summary"]["passRate"], 64);

    let back: ThemeTokens = serde_json::from_value(value).unwrap();
    assert_eq!(back.colors, tokens.colors);
    assert_eq!(back.css, tokens.css);
    assert_eq!(back.summary, tokens.summary);
}
