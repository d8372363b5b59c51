use anyhow::{Context, Result};
use catmullrom::color_utils::parse_color_result;
use catmullrom::converter::DEFAULT_QUALITY;
use catmullrom::{
    parse_points, save_plot, spline_chain, write_points, OutputFormat, PlotStyle,
    DEFAULT_ALPHA, DEFAULT_POINTS_PER_SEGMENT,
};
use clap::error::ErrorKind;
use clap::Parser;
use palette::Srgba;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catmullrom")]
#[command(about = "Print (and optionally plot) a Catmull-Rom spline through control points", long_about = None)]
struct Args {
    /// File with one "X Y" control point per line (defaults to stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Points per curve segment, both control points included
    #[arg(long, value_name = "N", default_value_t = DEFAULT_POINTS_PER_SEGMENT)]
    pps: usize,

    /// 0 = uniform, 0.5 = centripetal, 1 = chordal
    #[arg(long, value_name = "A", default_value_t = DEFAULT_ALPHA, allow_negative_numbers = true)]
    alpha: f64,

    /// Save a plot of the curve (.svg for SVG, anything else for PNG)
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,

    /// Output format for the curve points
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Scale PNG plots relative to 96 dpi
    #[arg(long)]
    dpi: Option<u32>,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Curve colour (RRGGBB or RRGGBBAA)
    #[arg(long, value_parser = parse_color_result)]
    curve_color: Option<Srgba<u8>>,

    /// Control point marker colour (RRGGBB or RRGGBBAA)
    #[arg(long, value_parser = parse_color_result)]
    marker_color: Option<Srgba<u8>>,

    /// Plot background colour (RRGGBB, RRGGBBAA or "transparent")
    #[arg(long, value_parser = parse_color_result)]
    background: Option<Srgba<u8>>,
}

const LONG_FLAGS: &[&str] = &[
    "pps",
    "alpha",
    "plot",
    "format",
    "dpi",
    "quality",
    "curve-color",
    "marker-color",
    "background",
    "help",
];

/// Accepts single-dash long flags (`-pps 20`, `-alpha=1`) by rewriting them to
/// their `--` form. Everything else passes through untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}

fn run(args: Args) -> Result<()> {
    let control_points = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {path:?}"))?;
            parse_points(BufReader::new(file))?
        }
        None => parse_points(io::stdin().lock())?,
    };

    let curve = spline_chain(&control_points, args.pps, args.alpha)?;
    log::info!(
        "{} control points -> {} curve points",
        control_points.len(),
        curve.len()
    );

    write_points(io::stdout().lock(), &curve, args.format)
        .context("Failed to write curve points")?;

    if let Some(plot_path) = &args.plot {
        let mut style = PlotStyle::default();
        if let Some(color) = args.curve_color {
            style.curve_color = color;
        }
        if let Some(color) = args.marker_color {
            style.marker_color = color;
        }
        if let Some(color) = args.background {
            style.background = color;
        }
        save_plot(
            &curve,
            &control_points,
            plot_path,
            &style,
            args.dpi,
            args.quality,
        )?;
    }

    Ok(())
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => fail(e.to_string().lines().next().unwrap_or("invalid arguments")),
    };

    if let Err(e) = run(args) {
        fail(format!("{e:#}"));
    }
}
