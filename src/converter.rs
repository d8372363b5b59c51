use crate::models::PlotStyle;
use crate::point::Point;
use crate::renderer::generate_svg;
use crate::utils::save_png_with_quality;
use anyhow::{Context, Result};
use resvg::usvg::{self, Tree};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Default PNG compression quality (maps to balanced compression).
pub const DEFAULT_QUALITY: u8 = 75;

/// Rasterise an SVG document and write it as PNG.
///
/// `dpi` scales the output relative to the 96 dpi the SVG is laid out in.
/// Text uses whatever fonts the system provides.
pub fn convert_svg_to_png(
    svg_content: &str,
    output_path: &Path,
    dpi: Option<u32>,
    quality: u8,
) -> Result<()> {
    let mut options = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    log::debug!("loaded {} system font faces", fontdb.len());
    options.fontdb = Arc::new(fontdb);

    let tree = Tree::from_str(svg_content, &options).context("Failed to parse plot SVG")?;

    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map_or(1.0, |d| d as f32 / SOURCE_DPI);

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap =
        Pixmap::new(width, height).ok_or_else(|| anyhow::anyhow!("Failed to create pixmap"))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    save_png_with_quality(&pixmap, output_path, quality)
}

/// Save a plot of `curve` with markers at `control_points`.
///
/// A `.svg` extension writes the SVG document itself; anything else is
/// rasterised to PNG.
pub fn save_plot(
    curve: &[Point],
    control_points: &[Point],
    output_path: &Path,
    style: &PlotStyle,
    dpi: Option<u32>,
    quality: u8,
) -> Result<()> {
    let svg_content = generate_svg(curve, control_points, style);

    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match extension.to_lowercase().as_str() {
        "svg" => fs::write(output_path, svg_content)
            .with_context(|| format!("Failed to write SVG file: {output_path:?}"))?,
        _ => convert_svg_to_png(&svg_content, output_path, dpi, quality)
            .with_context(|| format!("Failed to render PNG: {output_path:?}"))?,
    }

    log::info!("saved plot to {}", output_path.display());
    Ok(())
}
