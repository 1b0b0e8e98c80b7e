use color_eyre::eyre::Result;
use tinta_theme::{ThemeBuilder, ThemeColors, ThemeTokens, CRITICAL_CHECKS, PAIR_ACCEPT_RATE};

struct Row<'a> {
    name: &'a str,
    pair: String,
    bg: &'a str,
    fg: &'a str,
    ratio: f64,
    level: String,
    passes: bool,
}

fn rows(tokens: &ThemeTokens) -> Vec<Row<'_>> {
    CRITICAL_CHECKS
        .iter()
        .filter_map(|check| {
            let result = tokens.contrast.get(check.name)?;
            Some(Row {
                name: check.name,
                pair: format!("{} / {}", check.background, check.foreground),
                bg: check.background.hex(&tokens.colors),
                fg: check.foreground.hex(&tokens.colors),
                ratio: result.ratio,
                level: result.level.to_string(),
                passes: result.passes,
            })
        })
        .collect()
}

pub fn run(builder: &ThemeBuilder, colors: &ThemeColors, verbose: bool) -> Result<()> {
    let tokens = builder.build_theme_tokens(colors);
    let rows = rows(&tokens);
    let failures: Vec<_> = rows.iter().filter(|r| !r.passes).collect();
    let passes: Vec<_> = rows.iter().filter(|r| r.passes).collect();

    println!("{}", "=".repeat(80));
    println!("WCAG CONTRAST AUDIT");
    println!(
        "Theme: primary {}  secondary {}  destructive {}  warning {}",
        tokens.colors.primary.base(),
        tokens.colors.secondary.base(),
        tokens.colors.destructive.base(),
        tokens.colors.warning.base()
    );
    println!("{}", "=".repeat(80));

    if failures.is_empty() {
        println!("\n✅ All {} critical pairings pass!", rows.len());
    } else {
        println!("\n❌ FAILURES ({} issues)\n", failures.len());
        println!(
            "{:<26} {:<30} {:>8} {:<6}",
            "Check", "Pair", "Ratio", "Level"
        );
        println!("{}", "-".repeat(80));
        for r in &failures {
            println!(
                "{:<26} {:<30} {:>6.2}:1 {:<6}",
                r.name, r.pair, r.ratio, r.level
            );
            println!("{:26} bg: {}  fg: {}", "", r.bg, r.fg);
        }
    }

    if verbose && !passes.is_empty() {
        println!("\n✅ PASSING ({} checks)\n", passes.len());
        for r in &passes {
            println!(
                "{:<26} {:<30} {:>6.2}:1 {}",
                r.name, r.pair, r.ratio, r.level
            );
        }
    }

    let summary = tokens.summary;
    println!("\n{}", "=".repeat(80));
    println!("SUMMARY");
    println!("{}", "=".repeat(80));
    println!(
        "\nPassing: {}/{} ({}%)   AA: {}   AAA: {}",
        summary.passing, summary.total, summary.pass_rate, summary.aa_count, summary.aaa_count
    );

    if f64::from(summary.pass_rate) >= PAIR_ACCEPT_RATE {
        println!("Status:  ✅ meets the {}% acceptance threshold", PAIR_ACCEPT_RATE);
        Ok(())
    } else {
        println!("Status:  ❌ below the {}% acceptance threshold", PAIR_ACCEPT_RATE);
        std::process::exit(1);
    }
}
