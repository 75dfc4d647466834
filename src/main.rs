use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorkit::{palette, Color};

#[derive(Parser)]
#[command(name = "colorkit")]
#[command(about = "Color conversion and palette generation toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported representation
    Show {
        /// Color literal: hex, rgb()/rgba(), hsl()/hsla(), or a name
        color: String,
    },
    /// Derive a color scheme from a base color
    Palette {
        /// Base color literal
        color: String,

        /// Scheme to derive
        #[arg(short, long, value_enum, default_value = "analogous")]
        scheme: Scheme,

        /// Number of colors (analogous, monochromatic)
        #[arg(short, long, default_value_t = palette::DEFAULT_COUNT)]
        count: usize,

        /// Hue spread in degrees (analogous, split-complementary)
        #[arg(long, default_value_t = palette::DEFAULT_SPREAD)]
        spread: i32,
    },
    /// Blend two colors into a gradient
    Gradient {
        /// Start color literal
        from: String,

        /// End color literal
        to: String,

        /// Number of samples, endpoints included
        #[arg(short, long, default_value_t = palette::DEFAULT_STEPS)]
        steps: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scheme {
    Analogous,
    Complementary,
    Triadic,
    SplitComplementary,
    Monochromatic,
}

fn main() -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { color } => run_show(&color),
        Commands::Palette {
            color,
            scheme,
            count,
            spread,
        } => run_palette(&color, scheme, count, spread),
        Commands::Gradient { from, to, steps } => run_gradient(&from, &to, steps),
    }
}

fn run_show(literal: &str) -> anyhow::Result<()> {
    let color = Color::new(literal)?;
    let rgb = color.rgb();

    println!("hex:       {}", color.hex());
    println!("rgb:       rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("hsl:       {}", color.hsl().to_css());
    let hsv = color.hsv();
    println!("hsv:       hsv({}, {}%, {}%)", hsv.h(), hsv.s(), hsv.v());
    println!("luminance: {:.4}", rgb.luminance());
    println!(
        "appears:   {}",
        if color.is_light() { "light" } else { "dark" }
    );
    Ok(())
}

fn run_palette(literal: &str, scheme: Scheme, count: usize, spread: i32) -> anyhow::Result<()> {
    let base = Color::new(literal)?;

    let colors = match scheme {
        Scheme::Analogous => palette::analogous(base, count, spread),
        Scheme::Complementary => palette::complementary(base),
        Scheme::Triadic => palette::triadic(base),
        Scheme::SplitComplementary => palette::split_complementary(base, spread),
        Scheme::Monochromatic => palette::monochromatic(base, count)?,
    };

    for color in colors {
        println!("{}  {}", color.hex(), color.hsl().to_css());
    }
    Ok(())
}

fn run_gradient(from: &str, to: &str, steps: usize) -> anyhow::Result<()> {
    let start = Color::new(from)?;
    let end = Color::new(to)?;

    for color in palette::gradient(start, end, steps) {
        println!("{}", color.hex());
    }
    Ok(())
}
