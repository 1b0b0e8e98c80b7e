//! Deterministic color theming.
//!
//! Seed colors expand into 11-stop tonal [`Palette`]s, which a
//! [`ThemeBuilder`] turns into light and dark CSS variables plus a WCAG
//! contrast audit of the pairings a UI actually renders. The whole pipeline
//! is pure: the same seeds and [`ThemeConfig`] always produce the same
//! [`ThemeTokens`].
//!
//! ```
//! let tokens = tinta_theme::get_default_theme();
//! assert_eq!(tokens.css["--primary-500"], "#3B82F6");
//! ```

mod apply;
pub mod color;
mod config;
pub mod contrast;
mod error;
pub mod palette;
mod pair;
pub mod tokens;
mod types;

pub use apply::{apply_theme, ComputedStyle, StyleTarget};
pub use color::{
    hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex,
    rgb_to_hsl, HexColor, Hsl, Rgb,
};
pub use config::ThemeConfig;
pub use contrast::{
    check_contrast, check_contrast_large_text, get_contrast_summary, get_luminance,
    run_contrast_audit, ColorRef, ContrastResult, ContrastResults, ContrastSummary, SemanticColor,
    TextSize, WcagLevel, CRITICAL_CHECKS,
};
pub use error::{ColorError, Result};
pub use palette::{generate_color_variations, generate_palette};
pub use pair::{validate_color_pair, PairLevel, PairValidation, PAIR_ACCEPT_RATE};
pub use tokens::{
    build_theme_tokens, css_variables_to_string, generate_color_palettes, generate_css_variables,
    generate_dark_mode_css, get_default_theme, render_stylesheet, validate_theme_colors,
    CssVariables, ThemeBuilder, ThemeTokens, DARK_PREFIX,
};
pub use types::{ColorPalettes, Palette, ResolvedColors, Role, Stop, ThemeColors};
