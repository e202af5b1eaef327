use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_POS, PANEL_SIZE};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) start: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            start: self.start || other.start,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        start: is_key_pressed(KeyCode::Enter),
        reset: is_key_pressed(KeyCode::Escape),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let running = state.driver.is_running();
    let mut actions = FrameActions::default();

    widgets::Window::new(
        hash!(),
        vec2(PANEL_POS.0, PANEL_POS.1),
        vec2(PANEL_SIZE.0, PANEL_SIZE.1),
    )
    .label("Launch")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, "Initial Velocity (m/s):");
        ui.input_text(hash!(), "", &mut state.inputs.velocity);
        ui.label(None, "Launch Angle (degrees):");
        ui.input_text(hash!(), "", &mut state.inputs.launch_angle);
        ui.label(None, "Incline Angle (degrees):");
        ui.input_text(hash!(), "", &mut state.inputs.incline_angle);
        ui.separator();
        // The button is swapped for a label while a flight is running.
        if running {
            ui.label(None, "Start Animation (running...)");
        } else if ui.button(None, "Start Animation (Enter)") {
            actions.start = true;
        }
        if ui.button(None, "Reset (Esc)") {
            actions.reset = true;
        }
        if ui.button(None, "Toggle Preview") {
            state.show_preview = !state.show_preview;
        }
    });

    actions
}

pub(crate) fn phase_text(running: bool) -> &'static str {
    if running { "Running" } else { "Idle" }
}
