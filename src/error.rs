use thiserror::Error;

/// Errors raised by the spline core.
#[derive(Debug, Error, PartialEq)]
pub enum SplineError {
    #[error("insufficient control points: need at least {required}, got {actual}")]
    InsufficientControlPoints { required: usize, actual: usize },

    #[error("invalid sample count {0}: need at least 2 points per segment")]
    InvalidSampleCount(usize),

    /// A knot interval collapsed, usually because two consecutive control
    /// points coincide while alpha is nonzero. `segment` is the index of the
    /// four-point window within a chain (0 for a lone segment).
    #[error("degenerate geometry: segment {segment}, knot interval {interval} has width {width}")]
    DegenerateGeometry {
        segment: usize,
        interval: usize,
        width: f64,
    },
}

/// Errors raised while reading control points from text input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid {axis} coordinate on line {line}: '{field}'")]
    MalformedCoordinate {
        line: usize,
        axis: char,
        field: String,
    },

    #[error("could not read from input")]
    Io(#[from] std::io::Error),
}

impl SplineError {
    /// Attributes a segment-level error to window `segment` of a chain.
    #[must_use]
    pub fn in_segment(self, segment: usize) -> Self {
        match self {
            SplineError::DegenerateGeometry {
                interval, width, ..
            } => SplineError::DegenerateGeometry {
                segment,
                interval,
                width,
            },
            other => other,
        }
    }
}

/// Convenience type alias for results using [`SplineError`].
pub type Result<T> = std::result::Result<T, SplineError>;
