//! Idle/Running clock for a single launch. The driver only tracks time; every
//! marker position comes from [`render_frame`].

use log::{debug, info, warn};

use crate::core::kinematics::{SimulationParameters, TrajectorySample, render_frame};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationPhase {
    Idle,
    Running {
        params: SimulationParameters,
        collision_time_s: f64,
        elapsed_ms: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
    NoCollision,
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationDriver {
    phase: AnimationPhase,
    marker: Option<TrajectorySample>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            phase: AnimationPhase::Idle,
            marker: None,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Running { .. })
    }

    /// Last rendered marker position; kept after the run finishes.
    pub fn marker(&self) -> Option<TrajectorySample> {
        self.marker
    }

    pub fn duration_ms(&self) -> Option<f64> {
        match self.phase {
            AnimationPhase::Running {
                collision_time_s, ..
            } => Some(collision_time_s * 1000.0),
            AnimationPhase::Idle => None,
        }
    }

    /// Normalized progress in `[0, 1]`; `None` while idle.
    pub fn progress(&self) -> Option<f64> {
        match self.phase {
            AnimationPhase::Running {
                collision_time_s,
                elapsed_ms,
                ..
            } => Some((elapsed_ms / (collision_time_s * 1000.0)).clamp(0.0, 1.0)),
            AnimationPhase::Idle => None,
        }
    }

    pub fn start(&mut self, params: SimulationParameters) -> StartOutcome {
        if self.is_running() {
            debug!("start ignored: animation already running");
            return StartOutcome::AlreadyRunning;
        }
        let Some(collision_time_s) = params.collision_time() else {
            warn!(
                "no collision for v0={} theta={} phi={}; staying idle",
                params.initial_speed_mps, params.launch_angle_deg, params.incline_angle_deg
            );
            return StartOutcome::NoCollision;
        };

        debug!("animation started, flight {collision_time_s:.4} s");
        self.phase = AnimationPhase::Running {
            params,
            collision_time_s,
            elapsed_ms: 0.0,
        };
        self.marker = render_frame(params, 0.0);
        StartOutcome::Started
    }

    /// Advances the clock by `frame_dt_s` and returns the marker position for
    /// this frame. Reaching the end samples exactly at the collision time and
    /// drops back to idle.
    pub fn tick(&mut self, frame_dt_s: f64) -> Option<TrajectorySample> {
        let AnimationPhase::Running {
            params,
            collision_time_s,
            elapsed_ms,
        } = self.phase
        else {
            return self.marker;
        };

        let step_ms = if frame_dt_s.is_finite() {
            frame_dt_s.max(0.0) * 1000.0
        } else {
            0.0
        };
        let elapsed_ms = elapsed_ms + step_ms;
        let duration_ms = collision_time_s * 1000.0;

        if elapsed_ms >= duration_ms {
            self.marker = render_frame(params, collision_time_s);
            self.phase = AnimationPhase::Idle;
            if let Some(impact) = self.marker {
                info!(
                    "flight complete after {collision_time_s:.4} s at ({:.3}, {:.3}) m",
                    impact.x_m, impact.y_m
                );
            }
            return self.marker;
        }

        let progress = elapsed_ms / duration_ms;
        self.marker = render_frame(params, progress * collision_time_s);
        self.phase = AnimationPhase::Running {
            params,
            collision_time_s,
            elapsed_ms,
        };
        self.marker
    }

    pub fn reset(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.marker = None;
    }
}
