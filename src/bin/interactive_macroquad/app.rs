use log::warn;
use macroquad::prelude::*;
use parabolic_incline::core::kinematics::bounded_trajectory_path;
use parabolic_incline::core::window::{PlotArea, world_window_for_path};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PATH_COLOR, PATH_STEP_S, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::playback::{advance, apply_actions};
use crate::render::{
    draw_axes, draw_axis_tick_labels, draw_grid, draw_incline, draw_launch_point, draw_marker,
    draw_path,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "ParabolicIncline Interactive".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        advance(&mut state, frame_dt);
        state.refresh_preview();

        let displayed = state.displayed_params();
        let path = displayed
            .map(|params| bounded_trajectory_path(params, PATH_STEP_S))
            .unwrap_or_default();
        let window = world_window_for_path(&path, area);

        clear_background(BACKGROUND);
        draw_grid(area, GRID_COLOR);
        draw_axes(window, area);
        draw_axis_tick_labels(window, area, ui_font.as_ref());

        if let Some(params) = displayed {
            draw_incline(params.incline_angle_deg, window, area);
        }
        if state.show_preview {
            draw_path(&path, window, area, 2.0, PATH_COLOR);
        }
        draw_launch_point(window, area);
        if let Some(marker) = state.driver.marker() {
            draw_marker(marker, window, area);
        }

        draw_hud(&state, area.left, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
