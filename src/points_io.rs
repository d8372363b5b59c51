use crate::error::InputError;
use crate::point::Point;
use std::io::{BufRead, Write};

/// Text formats the curve can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `X<TAB>Y` pair per line
    #[default]
    Tsv,
    /// A JSON array of `{"x": .., "y": ..}` objects
    Json,
}

/// Reads whitespace-separated `X Y` pairs, one per line.
///
/// Lines with fewer than two fields are skipped and fields past the second
/// are ignored. A non-numeric coordinate aborts the whole read.
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, InputError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(x_field), Some(y_field)) = (fields.next(), fields.next()) else {
            continue;
        };
        let x = parse_coordinate(x_field, 'X', index + 1)?;
        let y = parse_coordinate(y_field, 'Y', index + 1)?;
        points.push(Point::new(x, y));
    }
    log::debug!("parsed {} control points", points.len());
    Ok(points)
}

fn parse_coordinate(field: &str, axis: char, line: usize) -> Result<f64, InputError> {
    field
        .parse::<f64>()
        .map_err(|_| InputError::MalformedCoordinate {
            line,
            axis,
            field: field.to_string(),
        })
}

/// Writes `points` to `writer` in the given format.
pub fn write_points<W: Write>(
    mut writer: W,
    points: &[Point],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => {
            for point in points {
                writeln!(writer, "{}\t{}", point.x, point.y)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, points)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
