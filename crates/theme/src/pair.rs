use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::contrast::{get_contrast_summary, run_contrast_audit};
use crate::tokens::{palettes_for, ThemeBuilder};

/// Minimum share of passing checks, in percent, for a pair to be usable.
pub const PAIR_ACCEPT_RATE: f64 = 70.0;
const PAIR_EXCELLENT_RATE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairLevel {
    Invalid,
    Poor,
    Good,
    Excellent,
}

impl PairLevel {
    pub fn from_pass_rate(rate: f64) -> Self {
        if rate >= PAIR_EXCELLENT_RATE {
            PairLevel::Excellent
        } else if rate >= PAIR_ACCEPT_RATE {
            PairLevel::Good
        } else {
            PairLevel::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PairLevel::Invalid => "invalid",
            PairLevel::Poor => "poor",
            PairLevel::Good => "good",
            PairLevel::Excellent => "excellent",
        }
    }
}

impl fmt::Display for PairLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acceptance score of a primary/secondary pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairValidation {
    pub is_valid: bool,
    /// Unrounded pass rate of the audit, 0-100. Not a luminance ratio.
    pub contrast: f64,
    pub level: PairLevel,
}

impl PairValidation {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            contrast: 0.0,
            level: PairLevel::Invalid,
        }
    }
}

impl ThemeBuilder {
    /// Audit `primary`/`secondary` against the configured destructive and
    /// warning fallbacks. Malformed input scores as [`PairLevel::Invalid`].
    pub fn validate_color_pair(&self, primary: &str, secondary: &str) -> PairValidation {
        let (Some(primary), Some(secondary)) =
            (HexColor::from_input(primary), HexColor::from_input(secondary))
        else {
            return PairValidation::invalid();
        };

        let mut colors = self.config().colors();
        colors.primary = primary;
        colors.secondary = secondary;

        let summary = get_contrast_summary(&run_contrast_audit(&palettes_for(&colors)));
        let rate = summary.exact_pass_rate();

        PairValidation {
            is_valid: rate >= PAIR_ACCEPT_RATE,
            contrast: rate,
            level: PairLevel::from_pass_rate(rate),
        }
    }
}

pub fn validate_color_pair(primary: &str, secondary: &str) -> PairValidation {
    ThemeBuilder::default().validate_color_pair(primary, secondary)
}
