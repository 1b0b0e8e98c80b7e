use std::process::Command;

use color_eyre::eyre::{bail, Result};
use tinta_theme::{HexColor, Role, ThemeConfig};

use crate::config::{config_path, UserConfig};
use crate::output::swatch;

/// One `[theme]` fallback as the builder will see it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fallback {
    role: Role,
    configured: String,
    resolved: HexColor,
}

impl Fallback {
    /// The configured value was rejected in favor of the built-in color.
    fn replaced(&self) -> bool {
        HexColor::from_input(&self.configured).is_none()
    }
}

fn fallbacks(theme: &ThemeConfig) -> Vec<Fallback> {
    let resolved = theme.colors();
    Role::ALL
        .into_iter()
        .map(|role| Fallback {
            role,
            configured: theme.color(role).to_string(),
            resolved: resolved.get(role).clone(),
        })
        .collect()
}

fn describe(fallback: &Fallback) -> String {
    let mut line = format!(
        "{:<12} {} {}",
        fallback.role.as_str(),
        swatch(fallback.resolved.rgb()),
        fallback.resolved
    );
    if fallback.replaced() {
        line.push_str(&format!("  (invalid {:?}, using built-in)", fallback.configured));
    }
    line
}

fn editor() -> String {
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

pub fn run(path: bool, reset: bool, edit: bool) -> Result<()> {
    let config_file = config_path();

    if path {
        println!("{}", config_file.display());
        return Ok(());
    }

    if reset {
        UserConfig::default().save()?;
        println!("Config reset to defaults at: {}", config_file.display());
        return Ok(());
    }

    if edit {
        if !config_file.exists() {
            UserConfig::default().save()?;
        }

        let editor = editor();
        let status = Command::new(&editor).arg(&config_file).status()?;
        if !status.success() {
            bail!("{editor} exited with {status}");
        }
    }

    let config = UserConfig::load();
    println!("Config file: {}", config_file.display());
    println!(
        "log_level: {:?}  log_to_file: {}  output: {:?}",
        config.log_level, config.log_to_file, config.output
    );
    println!();
    println!("Theme fallbacks:");
    for fallback in fallbacks(&config.theme) {
        println!("  {}", describe(&fallback));
    }
    println!("  {:<12} {}", "radius", config.theme.radius);

    Ok(())
}
