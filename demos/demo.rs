//! Prints a spline through a fixed zigzag of control points and plots it to
//! `points.png`.

use anyhow::Result;
use catmullrom::converter::DEFAULT_QUALITY;
use catmullrom::{save_plot, spline_chain, write_points, OutputFormat, PlotStyle, Point};
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let control_points: Vec<Point> = [
        (0.0, 2.5),
        (2.0, 4.0),
        (3.0, 2.0),
        (4.0, 1.5),
        (5.0, 6.0),
        (6.0, 5.0),
        (7.0, 3.0),
        (9.0, 1.0),
        (10.0, 2.5),
        (11.0, 7.0),
        (9.0, 5.0),
        (8.0, 6.0),
        (7.0, 5.5),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    let curve = spline_chain(&control_points, 100, 0.5)?;
    write_points(io::stdout().lock(), &curve, OutputFormat::Tsv)?;

    save_plot(
        &curve,
        &control_points,
        Path::new("points.png"),
        &PlotStyle::default(),
        None,
        DEFAULT_QUALITY,
    )
}
