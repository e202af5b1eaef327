use crate::core::kinematics::TrajectorySample;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Screen-space rectangle the world is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }

    pub fn aspect(&self) -> f64 {
        f64::from(self.width()) / f64::from(self.height())
    }
}

/// Visible world rectangle in metres. The launch point is always inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldWindow {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl WorldWindow {
    pub fn span_x(&self) -> f64 {
        (self.max_x - self.min_x).max(MIN_SPAN_M)
    }

    pub fn span_y(&self) -> f64 {
        (self.max_y - self.min_y).max(MIN_SPAN_M)
    }
}

/// Pads both spans and then widens one of them so `x_span / y_span == ratio`.
pub fn fixed_ratio_axis_window(raw_span_x: f64, raw_span_y: f64, ratio: f64) -> (f64, f64) {
    let raw_x_span = raw_span_x.max(MIN_SPAN_M);
    let raw_y_span = raw_span_y.max(MIN_SPAN_M);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_x_span + x_pad).max(MIN_SPAN_M);
    let mut y_span = (raw_y_span + y_pad).max(MIN_SPAN_M);

    if x_span / y_span < ratio {
        x_span = y_span * ratio;
    } else {
        y_span = x_span / ratio;
    }

    (x_span, y_span)
}

/// World window that fits the path with equal metres-per-pixel on both axes,
/// so the incline is drawn at its true angle.
pub fn world_window_for_path(path: &[TrajectorySample], area: PlotArea) -> WorldWindow {
    let (mut max_x, mut min_y, mut max_y) = (0.0f64, 0.0f64, 0.0f64);
    for sample in path {
        max_x = max_x.max(sample.x_m);
        min_y = min_y.min(sample.y_m);
        max_y = max_y.max(sample.y_m);
    }

    let ratio = area.aspect();
    let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
    let (span_x, span_y) = fixed_ratio_axis_window(max_x, max_y - min_y, ratio);

    // Keep the padding below the launch point only when the flight dips under it.
    let min_y = if min_y < 0.0 {
        min_y - (span_y - (max_y - min_y)) * 0.5
    } else {
        0.0
    };

    WorldWindow {
        min_x: 0.0,
        max_x: span_x,
        min_y,
        max_y: min_y + span_y,
    }
}

pub fn world_to_screen(x_m: f64, y_m: f64, window: WorldWindow, area: PlotArea) -> (f32, f32) {
    let fx = (x_m - window.min_x) / window.span_x();
    let fy = (y_m - window.min_y) / window.span_y();
    let x = area.left + (fx as f32) * area.width();
    let y = area.bottom - (fy as f32) * area.height();
    (x, y)
}

/// One grid line: where it sits along the axis (0 at the low edge, 1 at the
/// high edge) and the world value it marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    pub fraction: f32,
    pub value: f64,
}

pub fn axis_ticks(min: f64, span: f64, divisions: usize) -> Vec<AxisTick> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| {
            let fraction = i as f64 / divisions as f64;
            AxisTick {
                fraction: fraction as f32,
                value: min + fraction * span,
            }
        })
        .collect()
}

/// Label text with just enough decimals to tell neighbouring ticks apart.
pub fn tick_label(value: f64, tick_spacing: f64) -> String {
    let decimals = if tick_spacing >= 10.0 {
        0
    } else if tick_spacing >= 1.0 {
        1
    } else {
        (-tick_spacing.log10()).ceil().clamp(1.0, 6.0) as usize + 1
    };
    // Avoid printing "-0.0" for the launch height.
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}

/// Ground line from the launch point across the window width, cut short where
/// it would leave the window vertically.
pub fn incline_endpoints(incline_angle_deg: f64, window: WorldWindow) -> ((f64, f64), (f64, f64)) {
    let slope = incline_angle_deg.to_radians().tan();
    let mut end_x = window.max_x;
    let mut end_y = end_x * slope;

    if end_y > window.max_y && slope > 0.0 {
        end_x = window.max_y / slope;
        end_y = window.max_y;
    } else if end_y < window.min_y && slope < 0.0 {
        end_x = window.min_y / slope;
        end_y = window.min_y;
    }

    ((0.0, 0.0), (end_x, end_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::{SimulationParameters, build_trajectory_path};

    fn area() -> PlotArea {
        PlotArea {
            left: 100.0,
            right: 900.0,
            top: 100.0,
            bottom: 500.0,
        }
    }

    #[test]
    fn fixed_ratio_window_matches_requested_ratio() {
        let (x, y) = fixed_ratio_axis_window(100.0, 10.0, 2.0);
        assert!((x / y - 2.0).abs() < 1e-12);
        assert!(x >= 106.0);

        let (x, y) = fixed_ratio_axis_window(10.0, 100.0, 2.0);
        assert!((x / y - 2.0).abs() < 1e-12);
        assert!(y >= 110.0);
    }

    #[test]
    fn window_contains_whole_path() {
        let params = SimulationParameters::default();
        let path = build_trajectory_path(params, 0.01);
        let window = world_window_for_path(&path, area());
        assert!((window.span_x() / window.span_y() - 2.0).abs() < 1e-9);
        for s in &path {
            assert!(s.x_m <= window.max_x && s.y_m <= window.max_y && s.y_m >= window.min_y);
        }
        assert_eq!(window.min_y, 0.0);
    }

    #[test]
    fn descending_flight_opens_window_below_launch() {
        let params = SimulationParameters {
            initial_speed_mps: 10.0,
            launch_angle_deg: 20.0,
            incline_angle_deg: -30.0,
        };
        let path = build_trajectory_path(params, 0.01);
        let window = world_window_for_path(&path, area());
        let lowest = path.iter().map(|s| s.y_m).fold(0.0, f64::min);
        assert!(window.min_y < lowest);
    }

    #[test]
    fn empty_path_gets_minimum_window() {
        let window = world_window_for_path(&[], area());
        assert!(window.max_x >= 1.0 && window.max_y >= 1.0);
    }

    #[test]
    fn screen_mapping_round_trips_corners() {
        let window = WorldWindow {
            min_x: 0.0,
            max_x: 20.0,
            min_y: -5.0,
            max_y: 5.0,
        };
        assert_eq!(world_to_screen(0.0, -5.0, window, area()), (100.0, 500.0));
        assert_eq!(world_to_screen(20.0, 5.0, window, area()), (900.0, 100.0));
        assert_eq!(world_to_screen(10.0, 0.0, window, area()), (500.0, 300.0));
    }

    #[test]
    fn ticks_start_at_window_floor() {
        let ticks = axis_ticks(-4.0, 8.0, 4);
        assert_eq!(ticks.len(), 5);
        assert_eq!(
            ticks[0],
            AxisTick {
                fraction: 0.0,
                value: -4.0
            }
        );
        assert_eq!(ticks[2].value, 0.0);
        assert_eq!(ticks[4].fraction, 1.0);
        assert_eq!(ticks[4].value, 4.0);
        assert_eq!(axis_ticks(0.0, 1.0, 0).len(), 2);
    }

    #[test]
    fn tick_labels_scale_decimals_with_spacing() {
        assert_eq!(tick_label(1234.4, 100.0), "1234");
        assert_eq!(tick_label(2.3, 2.5), "2.3");
        assert_eq!(tick_label(0.125, 0.05), "0.125");
        assert_eq!(tick_label(-0.0001, 0.5), "0.00");
    }

    #[test]
    fn incline_spans_window_width_when_it_fits() {
        let window = WorldWindow {
            min_x: 0.0,
            max_x: 20.0,
            min_y: 0.0,
            max_y: 20.0,
        };
        let (start, end) = incline_endpoints(30.0, window);
        assert_eq!(start, (0.0, 0.0));
        assert_eq!(end.0, 20.0);
        assert!((end.1 - 20.0 * 30.0f64.to_radians().tan()).abs() < 1e-9);
    }

    #[test]
    fn steep_incline_is_clipped_to_window_top() {
        let window = WorldWindow {
            min_x: 0.0,
            max_x: 20.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let (_, end) = incline_endpoints(80.0, window);
        assert_eq!(end.1, 10.0);
        assert!(end.0 < 20.0);

        let (_, vertical) = incline_endpoints(90.0, window);
        assert!(vertical.0.is_finite() && vertical.1 == 10.0);
    }
}
