//! Theme token assembly.
//!
//! `ThemeBuilder` turns seed colors into a [`ThemeTokens`] bundle:
//! validate -> palettes -> light CSS -> dark CSS -> contrast audit -> summary.
//! Dark-mode aliases are stored next to the light ones under [`DARK_PREFIX`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::config::ThemeConfig;
use crate::contrast::{get_contrast_summary, run_contrast_audit, ContrastResults, ContrastSummary};
use crate::palette::generate_palette;
use crate::types::{ColorPalettes, ResolvedColors, Role, Stop, ThemeColors};

use Role::{Primary, Secondary};

/// Prefix that marks dark-mode entries in [`ThemeTokens::css`].
pub const DARK_PREFIX: &str = "dark-";

/// CSS custom property name -> value, in emission order.
pub type CssVariables = IndexMap<String, String>;

type Alias = (&'static str, Role, Stop);

const LIGHT_ALIASES: [Alias; 13] = [
    ("--background", Primary, Stop::S50),
    ("--foreground", Primary, Stop::S950),
    ("--card", Primary, Stop::S50),
    ("--card-foreground", Primary, Stop::S950),
    ("--popover", Primary, Stop::S50),
    ("--popover-foreground", Primary, Stop::S950),
    ("--muted", Primary, Stop::S100),
    ("--muted-foreground", Primary, Stop::S600),
    ("--accent", Secondary, Stop::S100),
    ("--accent-foreground", Secondary, Stop::S900),
    ("--border", Primary, Stop::S200),
    ("--input", Primary, Stop::S300),
    ("--ring", Primary, Stop::S600),
];

const DARK_ALIASES: [Alias; 13] = [
    ("--background", Primary, Stop::S950),
    ("--foreground", Primary, Stop::S50),
    ("--card", Primary, Stop::S900),
    ("--card-foreground", Primary, Stop::S50),
    ("--popover", Primary, Stop::S900),
    ("--popover-foreground", Primary, Stop::S50),
    ("--muted", Primary, Stop::S800),
    ("--muted-foreground", Primary, Stop::S400),
    ("--accent", Secondary, Stop::S800),
    ("--accent-foreground", Secondary, Stop::S50),
    ("--border", Primary, Stop::S700),
    ("--input", Primary, Stop::S700),
    ("--ring", Primary, Stop::S400),
];

fn aliases(palettes: &ColorPalettes, table: &[Alias]) -> CssVariables {
    table
        .iter()
        .map(|(name, role, stop)| (name.to_string(), palettes.color(*role, *stop).to_string()))
        .collect()
}

/// Everything a presentation layer needs to render a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ColorPalettes,
    /// Light variables followed by the dark aliases under [`DARK_PREFIX`].
    pub css: CssVariables,
    /// Audit of the light palettes, keyed by check name.
    pub contrast: ContrastResults,
    pub summary: ContrastSummary,
}

impl ThemeTokens {
    /// The stop-500 seed of every role.
    pub fn base_colors(&self) -> ThemeColors {
        ThemeColors::new(self.colors.primary.base(), self.colors.secondary.base())
            .with_destructive(self.colors.destructive.base())
            .with_warning(self.colors.warning.base())
    }

    pub fn light_variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.css
            .iter()
            .filter(|(name, _)| !name.starts_with(DARK_PREFIX))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Dark aliases with the prefix stripped.
    pub fn dark_variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.css.iter().filter_map(|(name, value)| {
            name.strip_prefix(DARK_PREFIX)
                .map(|name| (name, value.as_str()))
        })
    }
}

/// Builds theme tokens with an explicit fallback configuration.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    config: ThemeConfig,
}

impl ThemeBuilder {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Normalize every supplied color that passes [`is_valid_hex`](crate::is_valid_hex)
    /// and substitute the configured fallback for the rest. Never fails.
    pub fn validate_theme_colors(&self, input: &ThemeColors) -> ResolvedColors {
        let resolve = |role: Role| match input.get(role) {
            Some(value) => HexColor::from_input(value).unwrap_or_else(|| {
                tracing::warn!(role = %role, value, "invalid theme color, using default");
                self.config.fallback(role)
            }),
            None => self.config.fallback(role),
        };

        ResolvedColors {
            primary: resolve(Role::Primary),
            secondary: resolve(Role::Secondary),
            destructive: resolve(Role::Destructive),
            warning: resolve(Role::Warning),
        }
    }

    pub fn generate_color_palettes(&self, input: &ThemeColors) -> ColorPalettes {
        palettes_for(&self.validate_theme_colors(input))
    }

    /// Per-stop `--{role}-{stop}` variables, the light semantic aliases and `--radius`.
    pub fn generate_css_variables(&self, palettes: &ColorPalettes) -> CssVariables {
        let mut vars: CssVariables = palettes
            .iter()
            .flat_map(|(role, palette)| {
                palette
                    .iter()
                    .map(move |(stop, color)| (format!("--{role}-{stop}"), color.to_string()))
            })
            .collect();

        vars.extend(aliases(palettes, &LIGHT_ALIASES));
        vars.insert("--radius".to_string(), self.config.radius.clone());
        vars
    }

    pub fn build_theme_tokens(&self, input: &ThemeColors) -> ThemeTokens {
        let palettes = self.generate_color_palettes(input);

        let mut css = self.generate_css_variables(&palettes);
        css.extend(
            generate_dark_mode_css(&palettes)
                .into_iter()
                .map(|(name, value)| (format!("{DARK_PREFIX}{name}"), value)),
        );

        let contrast = run_contrast_audit(&palettes);
        let summary = get_contrast_summary(&contrast);

        tracing::debug!(
            primary = palettes.primary.base(),
            secondary = palettes.secondary.base(),
            pass_rate = summary.pass_rate,
            "built theme tokens"
        );

        ThemeTokens {
            colors: palettes,
            css,
            contrast,
            summary,
        }
    }

    /// Tokens for the configured fallback colors; the reset state.
    pub fn default_theme(&self) -> ThemeTokens {
        self.build_theme_tokens(&self.config.colors().into())
    }
}

/// Palettes for colors that are already validated.
pub fn palettes_for(colors: &ResolvedColors) -> ColorPalettes {
    ColorPalettes {
        primary: generate_palette(colors.get(Role::Primary)),
        secondary: generate_palette(colors.get(Role::Secondary)),
        destructive: generate_palette(colors.get(Role::Destructive)),
        warning: generate_palette(colors.get(Role::Warning)),
    }
}

/// Dark-mode semantic aliases. Per-stop variables are shared with light mode.
pub fn generate_dark_mode_css(palettes: &ColorPalettes) -> CssVariables {
    aliases(palettes, &DARK_ALIASES)
}

/// One `  --name: value;` line per variable.
pub fn css_variables_to_string<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    vars.into_iter()
        .map(|(name, value)| format!("  {name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A complete stylesheet: light variables on `:root`, dark aliases on `.dark`.
pub fn render_stylesheet(tokens: &ThemeTokens) -> String {
    format!(
        ":root {{\n{}\n}}\n\n.dark {{\n{}\n}}\n",
        css_variables_to_string(tokens.light_variables()),
        css_variables_to_string(tokens.dark_variables()),
    )
}

pub fn validate_theme_colors(input: &ThemeColors) -> ResolvedColors {
    ThemeBuilder::default().validate_theme_colors(input)
}

pub fn generate_color_palettes(input: &ThemeColors) -> ColorPalettes {
    ThemeBuilder::default().generate_color_palettes(input)
}

pub fn generate_css_variables(palettes: &ColorPalettes) -> CssVariables {
    ThemeBuilder::default().generate_css_variables(palettes)
}

pub fn build_theme_tokens(input: &ThemeColors) -> ThemeTokens {
    ThemeBuilder::default().build_theme_tokens(input)
}

pub fn get_default_theme() -> ThemeTokens {
    ThemeBuilder::default().default_theme()
}
