pub mod core;

pub use crate::core::animation::{AnimationDriver, AnimationPhase, StartOutcome};
pub use crate::core::kinematics::{
    EARTH_GRAVITY_MPS2, SimulationParameters, TrajectorySample, bounded_trajectory_path,
    build_trajectory_path, collision_time, impact_point, render_frame, sample_position,
    slope_range,
};
pub use crate::core::params::{ParamError, ParamField, ParameterInputs, parse_parameters};
