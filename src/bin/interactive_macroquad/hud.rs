use macroquad::prelude::*;
use parabolic_incline::core::kinematics::SimulationParameters;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    draw_header_block(left, font);
    draw_status_block(state, left, screen_h, font);
}

fn draw_header_block(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "ParabolicIncline - Launch Onto A Slope",
        left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        "Edit velocity and angles in the panel | Enter start | Esc reset",
        left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn flight_summary(params: Option<SimulationParameters>) -> String {
    match params {
        Some(params) => match params.collision_time() {
            Some(t) => {
                let impact = params.sample(t);
                format!(
                    "Prediction -> flight {:.2} s, impact at ({:.2}, {:.2}) m",
                    t, impact.x_m, impact.y_m
                )
            }
            None => "Prediction -> no collision with the incline".to_string(),
        },
        None => "Prediction -> waiting for valid input".to_string(),
    }
}

fn draw_status_block(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let running = state.driver.is_running();
    let progress = state.driver.progress().unwrap_or(0.0);
    let (marker_t, marker_x, marker_y) = state
        .driver
        .marker()
        .map_or((0.0, 0.0, 0.0), |m| (m.elapsed_s, m.x_m, m.y_m));

    draw_ui_text(
        &flight_summary(state.displayed_params()),
        left,
        screen_h - 76.0,
        18,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        &format!(
            "Flight: {:.2} s | Position: ({:.2}, {:.2}) m | Progress: {:.0}% | State: {}",
            marker_t,
            marker_x,
            marker_y,
            progress * 100.0,
            phase_text(running)
        ),
        left,
        screen_h - 45.0,
        22,
        header_color,
        font,
    );
    draw_ui_text(&state.status_line, left, screen_h - 14.0, 20, BLUE, font);
}
