use serde::{Deserialize, Serialize};

use crate::color::{HexColor, Rgb};
use crate::types::{ResolvedColors, Role};

const DEFAULT_PRIMARY: Rgb = Rgb::new(0x3B, 0x82, 0xF6);
const DEFAULT_SECONDARY: Rgb = Rgb::new(0x10, 0xB9, 0x81);
const DEFAULT_DESTRUCTIVE: Rgb = Rgb::new(0xEF, 0x44, 0x44);
const DEFAULT_WARNING: Rgb = Rgb::new(0xF5, 0x9E, 0x0B);
const DEFAULT_RADIUS: &str = "0.5rem";

/// Builder configuration: the colors substituted for missing or malformed
/// input, and the fixed `--radius` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub destructive: String,
    pub warning: String,
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let hex = |rgb: Rgb| -> String { HexColor::from_rgb(rgb).normalized().into() };
        Self {
            primary: hex(DEFAULT_PRIMARY),
            secondary: hex(DEFAULT_SECONDARY),
            destructive: hex(DEFAULT_DESTRUCTIVE),
            warning: hex(DEFAULT_WARNING),
            radius: DEFAULT_RADIUS.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn color(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Destructive => &self.destructive,
            Role::Warning => &self.warning,
        }
    }

    /// The configured fallback for a role.
    ///
    /// A malformed configured value falls back to the built-in color, so the
    /// result is always usable.
    pub fn fallback(&self, role: Role) -> HexColor {
        HexColor::from_input(self.color(role)).unwrap_or_else(|| {
            tracing::warn!(
                role = %role,
                value = self.color(role),
                "configured fallback color is not a valid hex color, using built-in default"
            );
            builtin(role)
        })
    }

    /// Every fallback color, validated.
    pub fn colors(&self) -> ResolvedColors {
        ResolvedColors {
            primary: self.fallback(Role::Primary),
            secondary: self.fallback(Role::Secondary),
            destructive: self.fallback(Role::Destructive),
            warning: self.fallback(Role::Warning),
        }
    }
}

fn builtin(role: Role) -> HexColor {
    let rgb = match role {
        Role::Primary => DEFAULT_PRIMARY,
        Role::Secondary => DEFAULT_SECONDARY,
        Role::Destructive => DEFAULT_DESTRUCTIVE,
        Role::Warning => DEFAULT_WARNING,
    };
    HexColor::from_rgb(rgb).normalized()
}
