use crate::core::params::{ParamError, ParamField, check_finite};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const DEFAULT_STEP_S: f64 = 0.01;
/// Upper bound on samples for anything drawn from a path.
pub const MAX_PATH_SAMPLES: usize = 4000;

pub const DEFAULT_SPEED_MPS: f64 = 10.0;
pub const DEFAULT_LAUNCH_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_INCLINE_ANGLE_DEG: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub initial_speed_mps: f64,
    pub launch_angle_deg: f64,
    pub incline_angle_deg: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_speed_mps: DEFAULT_SPEED_MPS,
            launch_angle_deg: DEFAULT_LAUNCH_ANGLE_DEG,
            incline_angle_deg: DEFAULT_INCLINE_ANGLE_DEG,
        }
    }
}

impl SimulationParameters {
    pub fn new(
        initial_speed_mps: f64,
        launch_angle_deg: f64,
        incline_angle_deg: f64,
    ) -> Result<Self, ParamError> {
        Ok(Self {
            initial_speed_mps: check_finite(initial_speed_mps, ParamField::Velocity)?,
            launch_angle_deg: check_finite(launch_angle_deg, ParamField::LaunchAngle)?,
            incline_angle_deg: check_finite(incline_angle_deg, ParamField::InclineAngle)?,
        })
    }

    pub fn is_finite(&self) -> bool {
        self.initial_speed_mps.is_finite()
            && self.launch_angle_deg.is_finite()
            && self.incline_angle_deg.is_finite()
    }

    pub fn collision_time(&self) -> Option<f64> {
        collision_time(
            self.initial_speed_mps,
            self.launch_angle_deg,
            self.incline_angle_deg,
        )
    }

    pub fn sample(&self, elapsed_s: f64) -> TrajectorySample {
        sample_position(self.initial_speed_mps, self.launch_angle_deg, elapsed_s)
    }
}

/// Position relative to the launch point, `y_m` positive up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub elapsed_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    let vx = speed_mps * theta.cos();
    let vy = speed_mps * theta.sin();
    (vx, vy)
}

/// First positive time at which a launch from the origin meets the incline
/// `y = x * tan(incline)`. `None` when the flight never comes back down onto
/// the incline, including every case where the arithmetic goes infinite or NaN.
pub fn collision_time(speed_mps: f64, launch_angle_deg: f64, incline_angle_deg: f64) -> Option<f64> {
    // Climb rate away from the incline: vy - vx tan(phi), written as
    // sin(theta - phi) / cos(phi) so equal angles give exactly zero.
    let separation_rate = speed_mps * (launch_angle_deg - incline_angle_deg).to_radians().sin()
        / incline_angle_deg.to_radians().cos();

    // 0.5 g t^2 - separation_rate t = 0
    let a = 0.5 * EARTH_GRAVITY_MPS2;
    let b = -separation_rate;
    let c = 0.0;

    let disc = b * b - 4.0 * a * c;
    if !disc.is_finite() || disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);

    // With c = 0 one root is the launch itself; rounding can leave it a hair
    // above zero, so take the larger positive root.
    [near, far]
        .into_iter()
        .filter(|t| t.is_finite() && *t > 0.0)
        .reduce(f64::max)
}

pub fn sample_position(speed_mps: f64, launch_angle_deg: f64, elapsed_s: f64) -> TrajectorySample {
    let (vx, vy) = velocity_components(speed_mps, launch_angle_deg);
    TrajectorySample {
        elapsed_s,
        x_m: vx * elapsed_s,
        y_m: (vy * elapsed_s) - (0.5 * EARTH_GRAVITY_MPS2 * elapsed_s * elapsed_s),
    }
}

/// Samples at `0, step, 2*step, ...` up to the collision time. The last sample
/// sits within one step of the incline, not exactly on it.
pub fn build_trajectory_path(params: SimulationParameters, step_s: f64) -> Vec<TrajectorySample> {
    if !step_s.is_finite() || step_s <= 0.0 {
        return Vec::new();
    }
    let Some(t_collision) = params.collision_time() else {
        return Vec::new();
    };

    let last_index = (t_collision / step_s).floor() as usize;
    (0..=last_index)
        .map(|i| i as f64 * step_s)
        .take_while(|t| *t <= t_collision)
        .map(|t| params.sample(t))
        .collect()
}

/// Step for a drawable path: `step_s`, widened when the flight is long enough
/// that `step_s` would exceed [`MAX_PATH_SAMPLES`].
pub fn bounded_step(params: SimulationParameters, step_s: f64) -> f64 {
    match params.collision_time() {
        Some(t_collision) => step_s.max(t_collision / MAX_PATH_SAMPLES as f64),
        None => step_s,
    }
}

/// [`build_trajectory_path`] at [`bounded_step`]; what the app, chart and
/// table draw from.
pub fn bounded_trajectory_path(params: SimulationParameters, step_s: f64) -> Vec<TrajectorySample> {
    build_trajectory_path(params, bounded_step(params, step_s))
}

pub fn render_frame(params: SimulationParameters, elapsed_s: f64) -> Option<TrajectorySample> {
    let t_collision = params.collision_time()?;
    let t = if elapsed_s.is_nan() {
        0.0
    } else {
        elapsed_s.clamp(0.0, t_collision)
    };
    Some(params.sample(t))
}

pub fn impact_point(params: SimulationParameters) -> Option<TrajectorySample> {
    params.collision_time().map(|t| params.sample(t))
}

/// Launch-to-impact distance measured along the incline.
pub fn slope_range(params: SimulationParameters) -> Option<f64> {
    let impact = impact_point(params)?;
    let cos_phi = params.incline_angle_deg.to_radians().cos();
    if cos_phi.abs() < f64::EPSILON {
        return Some(impact.y_m.abs());
    }
    Some(impact.x_m / cos_phi)
}
