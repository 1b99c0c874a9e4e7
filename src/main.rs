use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use archsketch::export::{svg_to_pdf, svg_to_png};
use archsketch::{RecordingCanvas, Theme, draw_architecture_with, render_svg};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

/// Render the Hello World architecture diagram
#[derive(Parser, Debug)]
#[command(name = "archsketch")]
#[command(version)]
#[command(about = "Render the architecture diagram to SVG, PNG, PDF or a JSON call log", long_about = None)]
struct Args {
    /// Output file path (extension determines format: .svg, .png, .pdf or .json)
    #[arg(
        short,
        long,
        value_name = "OUTPUT",
        required_unless_present_any = ["list_themes", "completions"]
    )]
    output: Option<PathBuf>,

    /// Built-in theme name or path to a theme file (TOML or YAML)
    #[arg(short, long, value_name = "THEME")]
    theme: Option<String>,

    /// Raster scale multiplier for PNG output (e.g. 2.0 for sharper output)
    #[arg(long, default_value_t = 1.0)]
    png_scale: f32,

    /// List built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "archsketch", &mut std::io::stdout());
        return Ok(());
    }

    if args.list_themes {
        for name in Theme::list_builtins() {
            println!("{name}");
        }
        return Ok(());
    }

    let output = args.output.context("Missing --output")?;
    let theme = load_theme(args.theme.as_deref())?;

    let output_ext = output
        .extension()
        .and_then(|e| e.to_str())
        .context("Output file has no extension")?
        .to_ascii_lowercase();

    let (label, bytes) = match output_ext.as_str() {
        "svg" => ("SVG", render_svg(&theme).into_bytes()),
        "png" => ("PNG", svg_to_png(&render_svg(&theme), args.png_scale)?),
        "pdf" => ("PDF", svg_to_pdf(&render_svg(&theme))?),
        "json" => {
            let mut canvas = RecordingCanvas::new();
            draw_architecture_with(&mut canvas, &theme);
            ("Draw call log", canvas.to_json()?.into_bytes())
        }
        _ => bail!(
            "Unsupported output format: .{} (use .svg, .png, .pdf or .json)",
            output_ext
        ),
    };

    std::fs::write(&output, bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    eprintln!("{} saved to: {}", label, output.display());

    Ok(())
}

/// Resolve `--theme` as a file path first, then as a built-in name.
fn load_theme(theme: Option<&str>) -> Result<Theme> {
    let Some(theme) = theme else {
        return Ok(Theme::default());
    };

    let path = Path::new(theme);
    if !path.is_file() {
        return Ok(Theme::from_builtin(theme)?);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file: {}", path.display()))?;

    Theme::from_toml_or_yaml(&content)
        .with_context(|| format!("Failed to parse theme file: {}", path.display()))
}
