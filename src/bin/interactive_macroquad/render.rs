use macroquad::prelude::*;
use parabolic_incline::core::kinematics::TrajectorySample;
use parabolic_incline::core::window::{
    PlotArea, WorldWindow, axis_ticks, incline_endpoints, tick_label, world_to_screen,
};

use crate::constants::{INCLINE_COLOR, MARKER_COLOR, MARKER_RADIUS, X_GRID_LINES, Y_GRID_LINES};

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for tick in axis_ticks(0.0, 1.0, X_GRID_LINES) {
        let x = area.left + tick.fraction * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for tick in axis_ticks(0.0, 1.0, Y_GRID_LINES) {
        let y = area.bottom - tick.fraction * area.height();
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axes(window: WorldWindow, area: PlotArea) {
    let (_, ground_y) = world_to_screen(0.0, 0.0, window, area);
    draw_line(area.left, ground_y, area.right, ground_y, 1.5, GRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(window: WorldWindow, area: PlotArea, font: Option<&Font>) {
    const TICK_FONT: u16 = 16;
    let label_color = Color::from_rgba(105, 113, 124, 255);

    let x_spacing = window.span_x() / X_GRID_LINES as f64;
    for tick in axis_ticks(window.min_x, window.span_x(), X_GRID_LINES) {
        let label = tick_label(tick.value, x_spacing);
        let size = measure_text(&label, font, TICK_FONT, 1.0);
        let x = area.left + tick.fraction * area.width();
        draw_ui_text(
            &label,
            x - size.width * 0.5,
            area.bottom + 22.0,
            TICK_FONT,
            label_color,
            font,
        );
    }

    // The launch height label is drawn darker so a window dipping below it reads clearly.
    let y_spacing = window.span_y() / Y_GRID_LINES as f64;
    for tick in axis_ticks(window.min_y, window.span_y(), Y_GRID_LINES) {
        let label = tick_label(tick.value, y_spacing);
        let size = measure_text(&label, font, TICK_FONT, 1.0);
        let y = area.bottom - tick.fraction * area.height();
        let color = if tick.value.abs() < y_spacing * 0.5 {
            DARKGRAY
        } else {
            label_color
        };
        draw_ui_text(
            &label,
            area.left - 8.0 - size.width,
            y + size.height * 0.35,
            TICK_FONT,
            color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height above launch (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_incline(incline_angle_deg: f64, window: WorldWindow, area: PlotArea) {
    let ((x0, y0), (x1, y1)) = incline_endpoints(incline_angle_deg, window);
    let start = world_to_screen(x0, y0, window, area);
    let end = world_to_screen(x1, y1, window, area);
    draw_line(start.0, start.1, end.0, end.1, 3.0, INCLINE_COLOR);
}

pub(crate) fn draw_path(
    samples: &[TrajectorySample],
    window: WorldWindow,
    area: PlotArea,
    thickness: f32,
    color: Color,
) {
    if samples.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(samples[0].x_m, samples[0].y_m, window, area);
    for sample in samples.iter().skip(1) {
        let cur = world_to_screen(sample.x_m, sample.y_m, window, area);
        draw_line(prev.0, prev.1, cur.0, cur.1, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_marker(sample: TrajectorySample, window: WorldWindow, area: PlotArea) {
    let (x, y) = world_to_screen(sample.x_m, sample.y_m, window, area);
    draw_circle(x, y, MARKER_RADIUS, MARKER_COLOR);
    draw_circle_lines(x, y, MARKER_RADIUS, 2.0, MAROON);
}

pub(crate) fn draw_launch_point(window: WorldWindow, area: PlotArea) {
    let (x, y) = world_to_screen(0.0, 0.0, window, area);
    draw_circle(x, y, 4.0, DARKGRAY);
}
