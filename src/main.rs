//! SignMotion CLI
//!
//! Usage:
//!   signmotion [OPTIONS] [TEXT]
//!
//! Options:
//!   -c, --config <FILE>      Settings file (TOML format)
//!   -p, --preset <NAME>      Animation preset
//!   -o, --output <DIR>       Save animated-text.html into DIR
//!   --copy                   Copy the markup to the clipboard
//!   --list-presets           Show available presets
//!   -h, --help               Print help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use signmotion::animation::{AnimationTiming, FillMode};
use signmotion::font::BUILTIN_FONTS;
use signmotion::{download, AnimationPreset, Configuration, Session, Settings, SvgConfig};

#[derive(Parser)]
#[command(name = "signmotion")]
#[command(about = "Generate self-drawing handwriting text as animated SVG")]
struct Cli {
    /// Text to draw (at most 25 characters)
    text: Option<String>,

    /// Settings file (TOML format); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in font family
    #[arg(short, long)]
    font: Option<String>,

    /// Custom font file (.otf, .ttf, .woff, .woff2); overrides --font
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Stroke width in pixels (1-10)
    #[arg(short = 'w', long)]
    stroke_width: Option<u32>,

    /// Font size in pixels (10-100)
    #[arg(short = 's', long)]
    font_size: Option<u32>,

    /// Stroke color (#rgb or #rrggbb)
    #[arg(long)]
    color: Option<String>,

    /// Animation duration in seconds (1-20)
    #[arg(short, long)]
    duration: Option<u32>,

    /// Timing function (linear, ease, ease-in, ease-out, ease-in-out, bounce)
    #[arg(short, long)]
    timing: Option<String>,

    /// Fill mode (none, forwards, backwards, both)
    #[arg(long)]
    fill_mode: Option<String>,

    /// Animation preset (see --list-presets)
    #[arg(short, long)]
    preset: Option<String>,

    /// Save animated-text.html into this directory instead of printing
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copy the markup to the system clipboard instead of printing
    #[arg(long)]
    copy: bool,

    /// Emit the markup on a single line
    #[arg(long)]
    compact: bool,

    /// XML-escape the text content
    #[arg(long)]
    escape: bool,

    /// Show available presets, timings, fill modes and fonts
    #[arg(long)]
    list_presets: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            text: self.text.clone(),
            font_family: self.font.clone(),
            font_file: self.font_file.clone(),
            stroke_width: self.stroke_width,
            font_size: self.font_size,
            stroke_color: self.color.clone(),
            duration: self.duration,
            timing: self.timing.clone(),
            fill_mode: self.fill_mode.clone(),
            preset: self.preset.clone(),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_presets {
        print_options();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let svg_config = SvgConfig::new()
        .with_pretty_print(!cli.compact)
        .with_escape_text(cli.escape);
    let mut session = Session::with_svg_config(Configuration::default(), svg_config);

    if let Some(path) = &cli.config {
        let settings = Settings::from_file(path)
            .map_err(|e| format!("loading settings '{}': {}", path.display(), e))?;
        settings.apply(&mut session).map_err(|e| e.to_string())?;
    }
    cli.overrides()
        .apply(&mut session)
        .map_err(|e| e.to_string())?;

    if cli.output.is_none() && !cli.copy {
        println!("{}", session.rendered());
        return Ok(());
    }

    if let Some(dir) = &cli.output {
        let path = download(&session, dir).map_err(|e| e.to_string())?;
        eprintln!("Saved {}", path.display());
    }

    if cli.copy {
        copy_to_clipboard(&mut session)?;
    }

    Ok(())
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(session: &mut Session) -> Result<(), String> {
    use std::time::Instant;

    use signmotion::export::{CopyMode, SystemClipboard};

    let mode = CopyMode::for_short_lived_process();
    let mut clipboard = SystemClipboard::with_mode(mode).map_err(|e| e.to_string())?;
    if mode == CopyMode::HoldUntilReplaced && session.exports_enabled() {
        eprintln!("Copied! Keeping the markup on the clipboard until something else is copied.");
    }
    signmotion::copy(session, &mut clipboard, Instant::now()).map_err(|e| e.to_string())?;
    if mode == CopyMode::Detached {
        eprintln!("Copied!");
    }
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard(_session: &mut Session) -> Result<(), String> {
    Err("clipboard support was not compiled in".to_string())
}

fn print_options() {
    println!("PRESETS");
    for preset in AnimationPreset::ALL {
        println!("  {:<16} {}", preset.name(), preset.label());
    }
    println!();
    println!("TIMINGS");
    for timing in AnimationTiming::ALL {
        println!("  {:<40} {}", timing.as_str(), timing.label());
    }
    println!();
    println!("FILL MODES");
    for mode in FillMode::ALL {
        println!("  {}", mode.as_str());
    }
    println!();
    println!("FONTS");
    for font in BUILTIN_FONTS {
        println!("  {}", font);
    }
}
