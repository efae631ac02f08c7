use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

use sketchpad::Config;
use sketchpad::draw::{CairoSurface, Recorder};
use sketchpad::input::InputState;
use sketchpad::replay;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand sketching surface with undo/redo stroke history")]
struct Cli {
    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "W")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "H")]
    height: Option<u32>,

    /// Where to write the rendered frame
    #[arg(long, short = 'o', value_name = "PNG", default_value = "sketch.png")]
    output: PathBuf,

    /// Print the recorded drawing operations of the final frame
    #[arg(long)]
    dump_ops: bool,

    /// Input script to replay (one event per line)
    script: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    let events = replay::load_script(&cli.script)
        .with_context(|| format!("Failed to load script {}", cli.script.display()))?;

    let mut state = InputState::from_config(&config)
        .context("Invalid keybindings in config")?;
    replay::replay(&mut state, &events);

    if cli.dump_ops {
        let mut recorder = Recorder::new();
        state.render(&mut recorder);
        for op in recorder.ops() {
            println!("{op:?}");
        }
    }

    write_png(&mut state, &config, &cli.output)?;
    log::info!("Wrote {}", cli.output.display());

    Ok(())
}

/// Renders the settled frame into an image surface and writes it as PNG.
fn write_png(state: &mut InputState, config: &Config, path: &Path) -> Result<()> {
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        config.canvas.width as i32,
        config.canvas.height as i32,
    )
    .context("Failed to create image surface")?;

    {
        let ctx = cairo::Context::new(&surface)
            .context("Failed to create cairo context")?;
        let mut target = CairoSurface::new(&ctx, &config.drawing.sticker_font);
        state.render(&mut target);
    }
    surface.flush();

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    Ok(())
}
