use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tinta_theme::{ContrastSummary, PairLevel, PairValidation, ThemeColors, ThemeTokens};

use crate::version::API_VERSION;

/// Successful response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            version: API_VERSION,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The stored colors of a theme and the tokens built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTheme {
    pub colors: ThemeColors,
    pub tokens: ThemeTokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewContrast {
    pub is_valid: bool,
    pub contrast: f64,
    pub level: PairLevel,
    pub pass_rate: u8,
    pub passing: usize,
    pub failing: usize,
    pub total: usize,
}

impl PreviewContrast {
    pub fn new(pair: &PairValidation, summary: &ContrastSummary) -> Self {
        Self {
            is_valid: pair.is_valid,
            contrast: pair.contrast,
            level: pair.level,
            pass_rate: summary.pass_rate,
            passing: summary.passing,
            failing: summary.failing,
            total: summary.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accessibility {
    #[serde(rename = "Great")]
    Great,
    #[serde(rename = "Improve contrast")]
    ImproveContrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    #[serde(rename = "Ready to use")]
    Ready,
    #[serde(rename = "Adjustments needed")]
    NeedsAdjustments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub accessibility: Accessibility,
    pub contrast: PairLevel,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePreview {
    pub colors: ThemeColors,
    pub tokens: ThemeTokens,
    pub contrast: PreviewContrast,
    pub recommendations: Recommendations,
}

/// Acceptance summary of a saved theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedContrast {
    pub pass_rate: u8,
    pub level: PairLevel,
    pub passing: usize,
    pub failing: usize,
}

/// An accepted theme. Persisting `colors` and `updated_at` is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSaved {
    pub colors: ThemeColors,
    pub tokens: ThemeTokens,
    pub contrast: SavedContrast,
    pub updated_at: DateTime<Utc>,
}
