pub mod animation;
pub mod chart;
pub mod kinematics;
pub mod params;
pub mod window;
