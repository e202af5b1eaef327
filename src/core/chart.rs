use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use log::info;
use plotters::prelude::*;

use crate::core::kinematics::{SimulationParameters, bounded_trajectory_path, impact_point};
use crate::core::window::{PlotArea, incline_endpoints, world_window_for_path};

pub const CHART_SIZE_PX: (u32, u32) = (1200, 600);

pub fn default_chart_path() -> PathBuf {
    chart_path_at(&Local::now())
}

pub fn chart_path_at<Tz: TimeZone>(time: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("trajectory_{}.svg", time.format("%Y%m%d_%H%M%S")))
}

/// Draws the sampled flight, the incline and the impact point into an SVG.
/// Fails without touching `path` when the parameters have no collision.
pub fn write_trajectory_svg(
    path: &Path,
    params: SimulationParameters,
    step_s: f64,
) -> Result<(), Box<dyn Error>> {
    let samples = bounded_trajectory_path(params, step_s);
    let Some(impact) = impact_point(params) else {
        return Err(format!(
            "no collision for v0={} theta={} phi={}; nothing to chart",
            params.initial_speed_mps, params.launch_angle_deg, params.incline_angle_deg
        )
        .into());
    };

    let (width, height) = CHART_SIZE_PX;
    let window = world_window_for_path(
        &samples,
        PlotArea {
            left: 0.0,
            right: width as f32,
            top: 0.0,
            bottom: height as f32,
        },
    );

    let root = SVGBackend::new(path, CHART_SIZE_PX).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "v0 = {:.2} m/s, launch {:.1} deg, incline {:.1} deg",
                params.initial_speed_mps, params.launch_angle_deg, params.incline_angle_deg
            ),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(window.min_x..window.max_x, window.min_y..window.max_y)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    let (start, end) = incline_endpoints(params.incline_angle_deg, window);
    chart.draw_series(LineSeries::new([start, end], GREEN.stroke_width(3)))?;

    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| (s.x_m, s.y_m)),
        BLUE.stroke_width(2),
    ))?;

    chart.draw_series(std::iter::once(Circle::new(
        (impact.x_m, impact.y_m),
        6,
        RED.filled(),
    )))?;

    root.present()?;
    info!(
        "wrote {} samples to {}",
        samples.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn chart_name_is_timestamped() {
        let time = Utc
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("valid timestamp");
        assert_eq!(
            chart_path_at(&time),
            PathBuf::from("trajectory_20240309_070501.svg")
        );
    }

    fn render_to_temp(name: &str, params: SimulationParameters) -> String {
        let file = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&file);
        write_trajectory_svg(&file, params, 0.01).expect("chart should render");
        let svg = std::fs::read_to_string(&file).expect("chart file written");
        let _ = std::fs::remove_file(&file);
        svg
    }

    #[test]
    fn renders_default_launch() {
        let svg = render_to_temp(
            "parabolic_incline_chart_test_default.svg",
            SimulationParameters::default(),
        );
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn renders_flight_below_launch_height() {
        let svg = render_to_temp(
            "parabolic_incline_chart_test_descending.svg",
            SimulationParameters {
                initial_speed_mps: 10.0,
                launch_angle_deg: 20.0,
                incline_angle_deg: -30.0,
            },
        );
        assert!(svg.contains("<svg"));
        assert!(svg.matches("<polyline").count() >= 2);
    }

    #[test]
    fn no_collision_is_reported_before_writing() {
        let dir = std::env::temp_dir().join("parabolic_incline_chart_test_missing.svg");
        let _ = std::fs::remove_file(&dir);
        let steep = SimulationParameters {
            initial_speed_mps: 10.0,
            launch_angle_deg: 45.0,
            incline_angle_deg: 60.0,
        };
        let err = write_trajectory_svg(&dir, steep, 0.01).expect_err("should fail");
        assert!(err.to_string().contains("no collision"));
        assert!(!dir.exists());
    }
}
