use log::debug;
use parabolic_incline::core::animation::StartOutcome;

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.driver.reset();
        state.status_line = "Reset".to_string();
    }

    if !actions.start {
        return;
    }

    // Unparseable input declines the start without a message.
    let params = match state.inputs.parse() {
        Ok(params) => params,
        Err(err) => {
            debug!("start declined: {err}");
            return;
        }
    };

    state.status_line = match state.driver.start(params) {
        StartOutcome::Started => format!(
            "Launched: {:.2} m/s at {:.1} deg onto {:.1} deg incline",
            params.initial_speed_mps, params.launch_angle_deg, params.incline_angle_deg
        ),
        StartOutcome::NoCollision => {
            "No collision: the flight never comes back down onto the incline".to_string()
        }
        StartOutcome::AlreadyRunning => return,
    };
}

pub(crate) fn advance(state: &mut AppRuntime, frame_dt: f32) {
    let was_running = state.driver.is_running();
    let marker = state.driver.tick(f64::from(frame_dt));

    if was_running && !state.driver.is_running() {
        if let Some(impact) = marker {
            state.status_line = format!(
                "Landed after {:.2} s at x={:.2} m, y={:.2} m",
                impact.elapsed_s, impact.x_m, impact.y_m
            );
        }
    }
}
