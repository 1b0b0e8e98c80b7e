use color_eyre::eyre::Result;
use tinta_theme::{ContrastResult, ThemeBuilder};

use super::parse_color;
use crate::output::swatch;

pub fn run(background: &str, foreground: &str, large: bool) -> Result<()> {
    let bg = parse_color(background)?;
    let fg = parse_color(foreground)?;

    let result = if large {
        ContrastResult::between_large_text(bg.rgb(), fg.rgb())
    } else {
        ContrastResult::between(bg.rgb(), fg.rgb())
    };

    println!(
        "{} {} on {} {}",
        swatch(fg.rgb()),
        fg,
        swatch(bg.rgb()),
        bg
    );
    println!("Ratio: {:.2}:1", result.ratio);
    println!("Level: {}", result.level);
    println!("{}", result.description);

    if !result.passes {
        std::process::exit(1);
    }

    Ok(())
}

pub fn run_pair(builder: &ThemeBuilder, primary: &str, secondary: &str) -> Result<()> {
    let result = builder.validate_color_pair(primary, secondary);

    println!("Pair:  {} / {}", primary, secondary);
    println!("Score: {:.1}% of checks pass", result.contrast);
    println!("Level: {}", result.level);

    if result.is_valid {
        println!("\n✅ Usable as a theme pair");
    } else {
        println!("\n❌ Not usable as a theme pair");
        std::process::exit(1);
    }

    Ok(())
}
