use color_eyre::eyre::Result;
use tinta_theme::{generate_palette, Stop};

use super::parse_color;
use crate::config::OutputFormat;
use crate::output::{print_json, swatch};

pub fn run(color: &str, json: bool, output: OutputFormat) -> Result<()> {
    let seed = parse_color(color)?;
    let palette = generate_palette(&seed);

    if json {
        return print_json(&palette, output);
    }

    for (stop, hex) in palette.iter() {
        let marker = if stop == Stop::S500 { "  <- base" } else { "" };
        println!(
            "{:>4}  {} {}{}",
            stop,
            swatch(palette.rgb(stop)),
            hex,
            marker
        );
    }

    Ok(())
}
