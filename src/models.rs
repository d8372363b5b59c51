use palette::Srgba;

/// Default plot size: 16 cm x 12 cm at 96 dpi.
pub const DEFAULT_PLOT_WIDTH: u32 = 605;
pub const DEFAULT_PLOT_HEIGHT: u32 = 454;

/// Appearance of a rendered plot.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve_color: Srgba<u8>,
    pub curve_width: f64,
    pub marker_color: Srgba<u8>,
    pub marker_radius: f64,
    pub background: Srgba<u8>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            title: "Catmull-Rom Spline".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            curve_color: Srgba::new(122, 195, 106, 255),
            curve_width: 1.5,
            marker_color: Srgba::new(241, 90, 96, 255),
            marker_radius: 3.0,
            background: Srgba::new(255, 255, 255, 255),
        }
    }
}

/// Axis-aligned region of data space shown by a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}
