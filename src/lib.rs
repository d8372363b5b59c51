pub mod color_utils;
pub mod converter;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod point;
pub mod points_io;
pub mod renderer;
pub mod spline;
pub mod utils;

pub use converter::{convert_svg_to_png, save_plot};
pub use error::{InputError, SplineError};
pub use models::{PlotStyle, ViewBox};
pub use point::Point;
pub use points_io::{parse_points, write_points, OutputFormat};
pub use renderer::{calculate_viewbox, generate_svg};
pub use spline::{build_chain, evaluate_segment, extrapolate_ends, spline_chain};

/// Default number of points per curve segment.
pub const DEFAULT_POINTS_PER_SEGMENT: usize = 100;

/// Default alpha: centripetal parameterization.
pub const DEFAULT_ALPHA: f64 = 0.5;
