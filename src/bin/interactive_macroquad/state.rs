use parabolic_incline::core::animation::{AnimationDriver, AnimationPhase};
use parabolic_incline::core::kinematics::SimulationParameters;
use parabolic_incline::core::params::ParameterInputs;

pub(crate) struct AppRuntime {
    pub(crate) inputs: ParameterInputs,
    /// Last parameters that parsed; the preview holds still while an input is invalid.
    pub(crate) preview: Option<SimulationParameters>,
    pub(crate) driver: AnimationDriver,
    pub(crate) show_preview: bool,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let inputs = ParameterInputs::default();
        let preview = inputs.parse().ok();
        Self {
            inputs,
            preview,
            driver: AnimationDriver::new(),
            show_preview: true,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn refresh_preview(&mut self) {
        if let Ok(params) = self.inputs.parse() {
            self.preview = Some(params);
        }
    }

    /// Parameters the scene is drawn from: the launched flight while running,
    /// otherwise the current preview.
    pub(crate) fn displayed_params(&self) -> Option<SimulationParameters> {
        match self.driver.phase() {
            AnimationPhase::Running { params, .. } => Some(params),
            AnimationPhase::Idle => self.preview,
        }
    }
}
