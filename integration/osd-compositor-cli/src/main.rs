//! Developer tooling for `osd-compositor`: render one frame from a
//! configuration + telemetry fixture to a PNG, or diff two PNGs
//! pixel-by-pixel for golden-image regression testing. Drives the library
//! directly — no FFI boundary involved.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use osd_compositor::{Compositor, FsResourceLoader};

#[derive(Parser)]
#[command(name = "osd-compositor-cli", about = "Render and diff osd-compositor frames")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one frame from a configuration file and a raw telemetry
    /// fixture to a PNG.
    Render {
        /// Directory resources (fonts, icons, navball skins) resolve against.
        #[arg(long, default_value = ".")]
        asset_root: PathBuf,
        /// Configuration JSON path, relative to `asset_root`.
        #[arg(long, default_value = "config.json")]
        config: String,
        /// Path to a raw length-delimited `GuiState` telemetry fixture.
        #[arg(long)]
        telemetry: PathBuf,
        /// Output PNG path.
        #[arg(long)]
        out: PathBuf,
    },
    /// Diff two PNGs pixel-by-pixel, reporting the count of differing
    /// pixels and optionally writing a visual diff image.
    Diff {
        left: PathBuf,
        right: PathBuf,
        /// Optional path to write a highlighted diff image.
        #[arg(long)]
        diff_out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Render { asset_root, config, telemetry, out } => render(&asset_root, &config, &telemetry, &out),
        Command::Diff { left, right, diff_out } => diff(&left, &right, diff_out.as_deref()),
    }
}

fn render(asset_root: &std::path::Path, config: &str, telemetry: &std::path::Path, out: &std::path::Path) -> Result<()> {
    let loader = FsResourceLoader::new(asset_root);
    let mut compositor =
        Compositor::init(&loader, config).with_context(|| format!("failed to initialize compositor from {}", asset_root.display()))?;

    let telemetry_bytes = std::fs::read(telemetry).with_context(|| format!("failed to read telemetry fixture {}", telemetry.display()))?;
    if !compositor.update_state(&telemetry_bytes) {
        bail!("telemetry fixture {} was rejected (empty or oversized)", telemetry.display());
    }
    compositor.render();

    let image = image::RgbaImage::from_raw(compositor.width(), compositor.height(), compositor.framebuffer_bytes().to_vec())
        .context("framebuffer byte count did not match its declared dimensions")?;
    image.save(out).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

fn diff(left: &std::path::Path, right: &std::path::Path, diff_out: Option<&std::path::Path>) -> Result<()> {
    let left_img = image::open(left).with_context(|| format!("failed to open {}", left.display()))?.to_rgba8();
    let right_img = image::open(right).with_context(|| format!("failed to open {}", right.display()))?.to_rgba8();

    if left_img.dimensions() != right_img.dimensions() {
        bail!("dimension mismatch: {:?} vs {:?}", left_img.dimensions(), right_img.dimensions());
    }

    let mut diff_count = 0u64;
    let mut diff_image = image::RgbaImage::new(left_img.width(), left_img.height());
    for (x, y, left_px) in left_img.enumerate_pixels() {
        let right_px = right_img.get_pixel(x, y);
        if left_px != right_px {
            diff_count += 1;
            diff_image.put_pixel(x, y, image::Rgba([255, 0, 0, 255]));
        }
    }

    println!("{diff_count} differing pixels out of {}", left_img.width() as u64 * left_img.height() as u64);
    if let Some(path) = diff_out {
        diff_image.save(path).with_context(|| format!("failed to write {}", path.display()))?;
    }
    if diff_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}
