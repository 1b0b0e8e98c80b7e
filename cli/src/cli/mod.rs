use clap::{Args, Parser, Subcommand};
use tinta_protocol::ThemeRequest;
use tinta_theme::{ThemeColors, ThemeConfig};

use crate::config::{LogLevel, OutputFormat};

// Seed colors of a theme. Omitted colors come from the `[theme]` config table.
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Primary color (e.g. "#3B82F6")
    pub primary: Option<String>,

    /// Secondary color (e.g. "#10B981")
    pub secondary: Option<String>,

    /// Destructive color
    #[arg(short, long)]
    pub destructive: Option<String>,

    /// Warning color
    #[arg(short, long)]
    pub warning: Option<String>,
}

impl ThemeArgs {
    pub fn colors(&self, config: &ThemeConfig) -> ThemeColors {
        ThemeColors {
            primary: self.primary.clone().unwrap_or_else(|| config.primary.clone()),
            secondary: self
                .secondary
                .clone()
                .unwrap_or_else(|| config.secondary.clone()),
            destructive: self.destructive.clone(),
            warning: self.warning.clone(),
        }
    }

    pub fn request(&self, config: &ThemeConfig) -> ThemeRequest {
        let colors = self.colors(config);
        ThemeRequest {
            primary_color: colors.primary,
            secondary_color: colors.secondary,
            destructive_color: colors.destructive,
            warning_color: colors.warning,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the 11-stop tonal palette of a color
    #[command(alias = "p")]
    Palette {
        color: String,

        /// Print JSON instead of swatches
        #[arg(long)]
        json: bool,
    },

    /// Check the WCAG contrast of two colors
    #[command(alias = "c")]
    Contrast {
        background: String,

        foreground: String,

        /// Use large-text thresholds
        #[arg(short, long)]
        large: bool,
    },

    /// Build the full token bundle as JSON
    #[command(alias = "b")]
    Build {
        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Run the critical-pairing contrast audit
    #[command(alias = "a")]
    Audit {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Show passing checks too
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render the theme stylesheet
    Css {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Resolve the variables a page would see instead of printing the stylesheet
        #[arg(long)]
        apply: bool,

        /// With --apply, resolve in dark mode
        #[arg(long, requires = "apply")]
        dark: bool,
    },

    /// Score a primary/secondary pair
    Pair { primary: String, secondary: String },

    /// Preview a theme as the API would return it
    Preview {
        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Run the save flow: exits non-zero when the theme would be rejected
    Save {
        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,

        /// Open config in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },
}

#[derive(Debug, Parser)]
#[command(name = "tinta", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// JSON layout, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}
