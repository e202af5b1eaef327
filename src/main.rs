use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use parabolic_incline::core::chart::{default_chart_path, write_trajectory_svg};
use parabolic_incline::core::kinematics::{
    DEFAULT_INCLINE_ANGLE_DEG, DEFAULT_LAUNCH_ANGLE_DEG, DEFAULT_SPEED_MPS, DEFAULT_STEP_S,
    SimulationParameters, TrajectorySample, bounded_trajectory_path, impact_point, slope_range,
};

#[derive(Parser, Debug)]
#[command(name = "parabolic_incline")]
#[command(about = "Projectile flight onto an inclined ground line")]
#[command(version)]
struct Cli {
    /// Initial speed (m/s)
    #[arg(short, long, default_value_t = DEFAULT_SPEED_MPS, allow_negative_numbers = true)]
    velocity: f64,

    /// Launch angle above horizontal (degrees)
    #[arg(short, long, default_value_t = DEFAULT_LAUNCH_ANGLE_DEG, allow_negative_numbers = true)]
    angle: f64,

    /// Incline angle above horizontal (degrees)
    #[arg(short, long, default_value_t = DEFAULT_INCLINE_ANGLE_DEG, allow_negative_numbers = true)]
    incline: f64,

    /// Sampling step for the path (s); widened for very long flights
    #[arg(short, long, default_value_t = DEFAULT_STEP_S)]
    step: f64,

    /// Print every sampled point as `t x y`
    #[arg(long)]
    table: bool,

    /// Write an SVG chart; defaults to a timestamped file name
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    svg: Option<Option<PathBuf>>,
}

struct Report {
    time_s: f64,
    impact: TrajectorySample,
    slope_range_m: f64,
}

fn report(params: SimulationParameters) -> Option<Report> {
    let impact = impact_point(params)?;
    Some(Report {
        time_s: impact.elapsed_s,
        impact,
        slope_range_m: slope_range(params)?,
    })
}

fn write_table(out: &mut impl Write, path: &[TrajectorySample]) -> io::Result<()> {
    writeln!(out, "{:>10} {:>12} {:>12}", "t (s)", "x (m)", "y (m)")?;
    for sample in path {
        writeln!(
            out,
            "{:>10.4} {:>12.4} {:>12.4}",
            sample.elapsed_s, sample.x_m, sample.y_m
        )?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let params = SimulationParameters::new(cli.velocity, cli.angle, cli.incline)
        .context("invalid launch parameters")?;
    if !cli.step.is_finite() || cli.step <= 0.0 {
        anyhow::bail!("step must be a positive number of seconds, got {}", cli.step);
    }

    let Some(report) = report(params) else {
        warn!("trajectory never meets the incline");
        println!("No collision: the projectile never comes back down onto the incline.");
        return Ok(());
    };

    println!("\nTime of flight: {:.4} s", report.time_s);
    println!(
        "Impact point: x = {:.4} m, y = {:.4} m",
        report.impact.x_m, report.impact.y_m
    );
    println!("Range along incline: {:.4} m", report.slope_range_m);

    if cli.table {
        let path = bounded_trajectory_path(params, cli.step);
        let stdout = io::stdout();
        write_table(&mut stdout.lock(), &path).context("failed to write sample table")?;
    }

    if let Some(target) = cli.svg {
        let target = target.unwrap_or_else(default_chart_path);
        write_trajectory_svg(&target, params, cli.step)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to write chart to {}", target.display()))?;
        info!("chart saved");
        println!("Chart: {}", target.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
