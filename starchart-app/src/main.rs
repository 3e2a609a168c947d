use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use starchart::{HighlightPattern, MapOptions, Style, StyleConfig, WorldProfile};

#[derive(Parser)]
#[command(about = "Resolve star-map style configurations")]
struct StarchartCommand {
    #[command(subcommand)]
    subcommand: StarchartSubcommand,
}

#[derive(Args)]
struct ResolveArgs {
    /// Zoom scale; one parsec spans this many pixels.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Option bitmask, decimal or 0x-prefixed hex. Defaults to the standard view.
    #[arg(long)]
    options: Option<String>,
    /// One of poster, atlas, print, draft, fasa, candy, terminal.
    #[arg(long, default_value = "poster")]
    style: String,
    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,
    /// Only list the names of visible layers.
    #[arg(long)]
    layers: bool,
}

#[derive(Args)]
struct HighlightArgs {
    /// Filter such as P8+ or A4-9.
    pattern: String,
    /// World profile as a UWP, e.g. A788899-C.
    #[arg(long)]
    uwp: String,
    #[arg(long, default_value_t = 0)]
    importance: i32,
}

#[derive(Subcommand)]
enum StarchartSubcommand {
    #[command(about = "Print the resolved style configuration as JSON")]
    Resolve(ResolveArgs),
    #[command(about = "Check a highlight filter against one world")]
    Highlight(HighlightArgs),
    #[command(about = "List the available styles")]
    Styles,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = StarchartCommand::parse();
    match cmd.subcommand {
        StarchartSubcommand::Resolve(args) => resolve(args),
        StarchartSubcommand::Highlight(args) => highlight(args),
        StarchartSubcommand::Styles => {
            for style in Style::ALL {
                println!("{style}");
            }
            Ok(())
        }
    }
}

fn resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let options = match args.options.as_deref() {
        Some(text) => MapOptions::parse_raw(text)
            .with_context(|| format!("invalid options bitmask: {text}"))?,
        None => MapOptions::DEFAULT_VIEW,
    };
    let style: Style = args.style.parse()?;
    log::info!("resolving scale {} options {:#x} style {}", args.scale, options.bits(), style);

    let config = StyleConfig::resolve(args.scale, options, style)?;
    if args.layers {
        for (name, element) in config.elements() {
            if element.visible {
                println!("{name}");
            }
        }
        return Ok(());
    }
    println!("{}", config.to_json(!args.compact)?);
    Ok(())
}

fn highlight(args: HighlightArgs) -> anyhow::Result<()> {
    let Some(pattern) = HighlightPattern::parse(&args.pattern)? else {
        bail!("empty highlight filter");
    };
    let world = WorldProfile::from_uwp(&args.uwp)?.with_importance(args.importance);
    let matched = pattern.matches(&world);
    println!("{pattern} {} {}", if matched { "matches" } else { "does not match" }, args.uwp);
    Ok(())
}
