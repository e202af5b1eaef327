use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 440.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const PANEL_POS: (f32, f32) = (18.0, 120.0);
pub const PANEL_SIZE: (f32, f32) = (380.0, 260.0);

pub const PATH_STEP_S: f64 = 0.01;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const MARKER_RADIUS: f32 = 10.0;
pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const PATH_COLOR: Color = Color::new(0.30, 0.55, 0.96, 1.0);
pub const INCLINE_COLOR: Color = Color::new(0.16, 0.62, 0.30, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.90, 0.16, 0.22, 1.0);
