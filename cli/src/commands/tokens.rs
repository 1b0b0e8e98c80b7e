use color_eyre::eyre::Result;
use tinta_theme::{apply_theme, render_stylesheet, ComputedStyle, ThemeBuilder, ThemeColors};

use crate::config::OutputFormat;
use crate::output::print_json;

pub fn run_build(
    builder: &ThemeBuilder,
    colors: &ThemeColors,
    output: OutputFormat,
) -> Result<()> {
    let tokens = builder.build_theme_tokens(colors);
    print_json(&tokens, output)
}

pub fn run_css(
    builder: &ThemeBuilder,
    colors: &ThemeColors,
    apply: bool,
    dark: bool,
) -> Result<()> {
    let tokens = builder.build_theme_tokens(colors);

    if !apply {
        print!("{}", render_stylesheet(&tokens));
        return Ok(());
    }

    let mut style = ComputedStyle::new();
    apply_theme(&tokens, dark, &mut style);

    let mode = if style.is_dark() { "dark" } else { "light" };
    println!("/* {} mode, {} properties */", mode, style.len());
    for (name, value) in style.iter() {
        println!("{}: {};", name, value);
    }

    Ok(())
}
