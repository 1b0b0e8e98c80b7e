mod api;
mod audit;
mod config;
mod contrast;
mod palette;
mod tokens;

use color_eyre::eyre::Result;
use tinta_protocol::ThemeService;
use tinta_theme::{ColorError, HexColor, ThemeBuilder};

use crate::cli::Commands;
use crate::config::{OutputFormat, UserConfig};

pub fn run(command: Commands, config: &UserConfig, output: OutputFormat) -> Result<()> {
    let builder = ThemeBuilder::new(config.theme.clone());

    match command {
        Commands::Palette { color, json } => palette::run(&color, json, output),
        Commands::Contrast {
            background,
            foreground,
            large,
        } => contrast::run(&background, &foreground, large),
        Commands::Pair { primary, secondary } => contrast::run_pair(&builder, &primary, &secondary),
        Commands::Build { theme } => {
            tokens::run_build(&builder, &theme.colors(&config.theme), output)
        }
        Commands::Css { theme, apply, dark } => {
            tokens::run_css(&builder, &theme.colors(&config.theme), apply, dark)
        }
        Commands::Audit { theme, verbose } => {
            audit::run(&builder, &theme.colors(&config.theme), verbose)
        }
        Commands::Preview { theme } => {
            let service = ThemeService::new(config.theme.clone());
            api::run_preview(&service, &theme.request(&config.theme), output)
        }
        Commands::Save { theme } => {
            let service = ThemeService::new(config.theme.clone());
            api::run_save(&service, &theme.request(&config.theme), output)
        }
        Commands::Config { path, reset, edit } => config::run(path, reset, edit),
    }
}

/// Accept `#RGB`, `#RRGGBB` or bare `RRGGBB`.
fn parse_color(input: &str) -> Result<HexColor, ColorError> {
    match HexColor::from_input(input) {
        Some(color) => Ok(color),
        None => HexColor::parse(input).map(|color| color.normalized()),
    }
}
