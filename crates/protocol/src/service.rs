//! The preview, save and current-theme flows.
//!
//! Every flow builds the full token bundle. Saving additionally gates on the
//! primary/secondary pair score and on the audit pass rate.

use chrono::Utc;
use tinta_theme::{Role, ThemeBuilder, ThemeColors, ThemeConfig, PAIR_ACCEPT_RATE};

use crate::error::Rejection;
use crate::request::ThemeRequest;
use crate::response::{
    Accessibility, CurrentTheme, PreviewContrast, Readiness, Recommendations, SavedContrast,
    ThemePreview, ThemeSaved,
};

#[derive(Debug, Clone, Default)]
pub struct ThemeService {
    builder: ThemeBuilder,
}

impl ThemeService {
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            builder: ThemeBuilder::new(config),
        }
    }

    pub fn builder(&self) -> &ThemeBuilder {
        &self.builder
    }

    /// Tokens for stored colors. Empty or absent roles take the configured fallback.
    pub fn current(&self, stored: &ThemeColors) -> CurrentTheme {
        let config = self.builder.config();
        let pick = |role: Role| {
            stored
                .get(role)
                .unwrap_or_else(|| config.color(role))
                .to_string()
        };

        let colors = ThemeColors {
            primary: pick(Role::Primary),
            secondary: pick(Role::Secondary),
            destructive: Some(pick(Role::Destructive)),
            warning: Some(pick(Role::Warning)),
        };
        let tokens = self.builder.build_theme_tokens(&colors);

        CurrentTheme { colors, tokens }
    }

    /// Build and score a theme without any gate.
    pub fn preview(&self, request: &ThemeRequest) -> Result<ThemePreview, Rejection> {
        let colors = request.validate()?;
        let tokens = self.builder.build_theme_tokens(&colors);
        let pair = self
            .builder
            .validate_color_pair(&colors.primary, &colors.secondary);

        let accessible = f64::from(tokens.summary.pass_rate) >= PAIR_ACCEPT_RATE;
        let recommendations = Recommendations {
            accessibility: if accessible {
                Accessibility::Great
            } else {
                Accessibility::ImproveContrast
            },
            contrast: pair.level,
            readiness: if accessible && pair.is_valid {
                Readiness::Ready
            } else {
                Readiness::NeedsAdjustments
            },
        };

        tracing::debug!(
            pass_rate = tokens.summary.pass_rate,
            pair = %pair.level,
            "previewed theme"
        );

        Ok(ThemePreview {
            contrast: PreviewContrast::new(&pair, &tokens.summary),
            colors,
            tokens,
            recommendations,
        })
    }

    /// Validate, gate on the pair score, build, then gate on the audit.
    pub fn save(&self, request: &ThemeRequest) -> Result<ThemeSaved, Rejection> {
        let colors = request.validate().inspect_err(|err| {
            tracing::info!(reason = %err, "theme save rejected");
        })?;

        let pair = self
            .builder
            .validate_color_pair(&colors.primary, &colors.secondary);
        if !pair.is_valid {
            tracing::info!(contrast = pair.contrast, level = %pair.level, "theme save rejected");
            return Err(Rejection::InsufficientPairContrast {
                contrast: pair.contrast,
                level: pair.level,
            });
        }

        let tokens = self.builder.build_theme_tokens(&colors);
        let summary = tokens.summary;
        if f64::from(summary.pass_rate) < PAIR_ACCEPT_RATE {
            tracing::info!(pass_rate = summary.pass_rate, "theme save rejected");
            return Err(Rejection::AccessibilityRequirements {
                pass_rate: summary.pass_rate,
                failing: summary.failing,
                total: summary.total,
            });
        }

        tracing::info!(
            primary = %colors.primary,
            secondary = %colors.secondary,
            pass_rate = summary.pass_rate,
            "theme save accepted"
        );

        Ok(ThemeSaved {
            colors,
            tokens,
            contrast: SavedContrast {
                pass_rate: summary.pass_rate,
                level: pair.level,
                passing: summary.passing,
                failing: summary.failing,
            },
            updated_at: Utc::now(),
        })
    }
}
