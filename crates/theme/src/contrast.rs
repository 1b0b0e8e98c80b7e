//! WCAG contrast checks.
//!
//! Luminance and contrast ratio follow WCAG 2.1. The audit runs a fixed battery
//! of critical UI pairings (buttons, text on backgrounds, alerts) against a set
//! of palettes and reports each pairing by name.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{hex_to_rgb, Rgb};
use crate::error::{ColorError, Result};
use crate::types::{ColorPalettes, Role, Stop};

use Role::{Destructive, Primary, Secondary, Warning};
use TextSize::{Large, Normal};

const AAA_NORMAL: f64 = 7.0;
const AA_NORMAL: f64 = 4.5;
const AA_LARGE: f64 = 3.0;

/// Conformance level of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "fail")]
    Fail,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
            WcagLevel::Fail => "fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio rounded to two decimals, 1.0 to 21.0.
    pub ratio: f64,
    pub passes: bool,
    pub level: WcagLevel,
    pub description: String,
}

impl ContrastResult {
    /// Body-text classification: AAA from 7:1, AA from 4.5:1.
    pub fn between(a: Rgb, b: Rgb) -> Self {
        let ratio = contrast_ratio(a, b);

        let (level, passes, description) = if ratio >= AAA_NORMAL {
            (WcagLevel::Aaa, true, "Excellent contrast - meets AAA (7:1)")
        } else if ratio >= AA_NORMAL {
            (WcagLevel::Aa, true, "Good contrast - meets AA (4.5:1)")
        } else if ratio >= AA_LARGE {
            (
                WcagLevel::Fail,
                false,
                "Insufficient contrast - only large text might pass",
            )
        } else {
            (WcagLevel::Fail, false, "Contrast too low - not recommended")
        };

        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            passes,
            level,
            description: description.to_string(),
        }
    }

    /// Large-text classification: the body-text result relabelled, AAA from
    /// 4.5:1 and AA (passing) from 3:1.
    pub fn between_large_text(a: Rgb, b: Rgb) -> Self {
        let result = Self::between(a, b);

        if result.ratio >= AA_NORMAL {
            Self {
                level: WcagLevel::Aaa,
                description: "Excellent contrast for large text".to_string(),
                ..result
            }
        } else if result.ratio >= AA_LARGE {
            Self {
                passes: true,
                level: WcagLevel::Aa,
                description: "Good contrast for large text - meets AA (3:1)".to_string(),
                ..result
            }
        } else {
            result
        }
    }

    pub fn for_size(a: Rgb, b: Rgb, size: TextSize) -> Self {
        match size {
            TextSize::Normal => Self::between(a, b),
            TextSize::Large => Self::between_large_text(a, b),
        }
    }
}

/// Convert sRGB channel to linear for luminance calculation.
fn linearize(val: u8) -> f64 {
    let v = f64::from(val) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance (0.0 = black, 1.0 = white).
pub fn luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two colors (1:1 to 21:1), unrounded.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = luminance(a);
    let l2 = luminance(b);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn get_luminance(hex: &str) -> Result<f64> {
    hex_to_rgb(hex).map(luminance)
}

/// Check two hex colors for body text. Argument order does not matter.
pub fn check_contrast(a: &str, b: &str) -> Result<ContrastResult> {
    Ok(ContrastResult::between(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

pub fn check_contrast_large_text(a: &str, b: &str) -> Result<ContrastResult> {
    Ok(ContrastResult::between_large_text(
        hex_to_rgb(a)?,
        hex_to_rgb(b)?,
    ))
}

/// Semantic names that resolve to a fixed primary swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    Background,
    Foreground,
    Card,
    CardForeground,
    Muted,
    MutedForeground,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 6] = [
        SemanticColor::Background,
        SemanticColor::Foreground,
        SemanticColor::Card,
        SemanticColor::CardForeground,
        SemanticColor::Muted,
        SemanticColor::MutedForeground,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticColor::Background => "background",
            SemanticColor::Foreground => "foreground",
            SemanticColor::Card => "card",
            SemanticColor::CardForeground => "card-foreground",
            SemanticColor::Muted => "muted",
            SemanticColor::MutedForeground => "muted-foreground",
        }
    }

    pub fn swatch(&self) -> (Role, Stop) {
        match self {
            SemanticColor::Background | SemanticColor::Card => (Role::Primary, Stop::S50),
            SemanticColor::Foreground | SemanticColor::CardForeground => {
                (Role::Primary, Stop::S950)
            }
            SemanticColor::Muted => (Role::Primary, Stop::S100),
            SemanticColor::MutedForeground => (Role::Primary, Stop::S600),
        }
    }
}

/// A reference to one palette color: either a `role-stop` pair or a semantic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRef {
    Swatch { role: Role, stop: Stop },
    Semantic(SemanticColor),
}

impl ColorRef {
    pub const fn swatch(role: Role, stop: Stop) -> Self {
        ColorRef::Swatch { role, stop }
    }

    pub fn resolve(&self) -> (Role, Stop) {
        match self {
            ColorRef::Swatch { role, stop } => (*role, *stop),
            ColorRef::Semantic(name) => name.swatch(),
        }
    }

    pub fn rgb(&self, palettes: &ColorPalettes) -> Rgb {
        let (role, stop) = self.resolve();
        palettes.get(role).rgb(stop)
    }

    pub fn hex<'a>(&self, palettes: &'a ColorPalettes) -> &'a str {
        let (role, stop) = self.resolve();
        palettes.color(role, stop)
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRef::Swatch { role, stop } => write!(f, "{}-{}", role, stop),
            ColorRef::Semantic(name) => f.write_str(name.as_str()),
        }
    }
}

impl FromStr for ColorRef {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some((role, stop)) = s.split_once('-') {
            if let (Ok(role), Ok(stop)) = (role.parse::<Role>(), stop.parse::<Stop>()) {
                return Ok(ColorRef::Swatch { role, stop });
            }
        }

        SemanticColor::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .map(ColorRef::Semantic)
            .ok_or_else(|| ColorError::UnknownColorKey(s.to_string()))
    }
}

/// One named pairing of the audit battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastCheck {
    pub name: &'static str,
    pub background: ColorRef,
    pub foreground: ColorRef,
    pub text: TextSize,
}

impl ContrastCheck {
    const fn new(
        name: &'static str,
        background: (Role, Stop),
        foreground: (Role, Stop),
        text: TextSize,
    ) -> Self {
        Self {
            name,
            background: ColorRef::swatch(background.0, background.1),
            foreground: ColorRef::swatch(foreground.0, foreground.1),
            text,
        }
    }

    pub fn run(&self, palettes: &ColorPalettes) -> ContrastResult {
        ContrastResult::for_size(
            self.background.rgb(palettes),
            self.foreground.rgb(palettes),
            self.text,
        )
    }
}

/// Critical pairings every generated theme is audited against.
pub const CRITICAL_CHECKS: [ContrastCheck; 14] = [
    // Primary buttons
    ContrastCheck::new(
        "Primary Button",
        (Primary, Stop::S500),
        (Primary, Stop::S50),
        Normal,
    ),
    ContrastCheck::new(
        "Primary Button (Hover)",
        (Primary, Stop::S600),
        (Primary, Stop::S50),
        Normal,
    ),
    // Secondary buttons
    ContrastCheck::new(
        "Secondary Button",
        (Primary, Stop::S100),
        (Primary, Stop::S700),
        Normal,
    ),
    ContrastCheck::new(
        "Secondary Button (Hover)",
        (Primary, Stop::S200),
        (Primary, Stop::S700),
        Normal,
    ),
    // Text on backgrounds
    ContrastCheck::new(
        "Primary Text",
        (Primary, Stop::S50),
        (Primary, Stop::S950),
        Normal,
    ),
    ContrastCheck::new(
        "Secondary Text",
        (Primary, Stop::S50),
        (Primary, Stop::S900),
        Normal,
    ),
    ContrastCheck::new(
        "Muted Text",
        (Primary, Stop::S100),
        (Primary, Stop::S600),
        Normal,
    ),
    // Titles and large text
    ContrastCheck::new(
        "Main Title",
        (Primary, Stop::S50),
        (Primary, Stop::S800),
        Large,
    ),
    // Error states
    ContrastCheck::new(
        "Error Button",
        (Destructive, Stop::S500),
        (Destructive, Stop::S50),
        Normal,
    ),
    ContrastCheck::new(
        "Error Alert",
        (Destructive, Stop::S100),
        (Destructive, Stop::S800),
        Normal,
    ),
    // Warning states
    ContrastCheck::new(
        "Warning Button",
        (Warning, Stop::S500),
        (Warning, Stop::S50),
        Normal,
    ),
    ContrastCheck::new(
        "Warning Alert",
        (Warning, Stop::S100),
        (Warning, Stop::S800),
        Normal,
    ),
    // Secondary / success states
    ContrastCheck::new(
        "Success Button",
        (Secondary, Stop::S500),
        (Secondary, Stop::S50),
        Normal,
    ),
    ContrastCheck::new(
        "Success Alert",
        (Secondary, Stop::S100),
        (Secondary, Stop::S800),
        Normal,
    ),
];

/// Audit results keyed by check name, in battery order.
pub type ContrastResults = IndexMap<String, ContrastResult>;

pub fn run_contrast_audit(palettes: &ColorPalettes) -> ContrastResults {
    run_checks(palettes, &CRITICAL_CHECKS)
}

pub fn run_checks(palettes: &ColorPalettes, checks: &[ContrastCheck]) -> ContrastResults {
    checks
        .iter()
        .map(|check| (check.name.to_string(), check.run(palettes)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastSummary {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
    pub aa_count: usize,
    pub aaa_count: usize,
    /// Percentage of passing checks, rounded, 0-100.
    pub pass_rate: u8,
}

impl ContrastSummary {
    /// Unrounded percentage of passing checks.
    pub fn exact_pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passing as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn get_contrast_summary(results: &ContrastResults) -> ContrastSummary {
    let total = results.len();
    let passing = results.values().filter(|r| r.passes).count();
    let with_level = |level: WcagLevel| results.values().filter(|r| r.level == level).count();

    let mut summary = ContrastSummary {
        total,
        passing,
        failing: total - passing,
        aa_count: with_level(WcagLevel::Aa),
        aaa_count: with_level(WcagLevel::Aaa),
        pass_rate: 0,
    };
    summary.pass_rate = summary.exact_pass_rate().round() as u8;
    summary
}
