use std::fmt;

use crate::core::kinematics::SimulationParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Velocity,
    LaunchAngle,
    InclineAngle,
}

impl ParamField {
    pub fn label(self) -> &'static str {
        match self {
            ParamField::Velocity => "velocity",
            ParamField::LaunchAngle => "launch angle",
            ParamField::InclineAngle => "incline angle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    NotANumber { field: ParamField, input: String },
    NotFinite { field: ParamField, value: f64 },
}

impl ParamError {
    pub fn field(&self) -> ParamField {
        match self {
            ParamError::NotANumber { field, .. } | ParamError::NotFinite { field, .. } => *field,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NotANumber { field, input } => write!(
                f,
                "Invalid {}: '{input}'. Expected a number.",
                field.label()
            ),
            ParamError::NotFinite { field, value } => {
                write!(f, "Invalid {}: {value} is not a finite number.", field.label())
            }
        }
    }
}

impl std::error::Error for ParamError {}

pub fn parse_field(value: &str, field: ParamField) -> Result<f64, ParamError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParamError::NotANumber {
            field,
            input: value.to_string(),
        })?;
    check_finite(parsed, field)
}

pub fn check_finite(value: f64, field: ParamField) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NotFinite { field, value })
    }
}

pub fn parse_parameters(
    velocity: &str,
    launch_angle: &str,
    incline_angle: &str,
) -> Result<SimulationParameters, ParamError> {
    Ok(SimulationParameters {
        initial_speed_mps: parse_field(velocity, ParamField::Velocity)?,
        launch_angle_deg: parse_field(launch_angle, ParamField::LaunchAngle)?,
        incline_angle_deg: parse_field(incline_angle, ParamField::InclineAngle)?,
    })
}

/// Editable text for the three inputs, kept as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInputs {
    pub velocity: String,
    pub launch_angle: String,
    pub incline_angle: String,
}

impl Default for ParameterInputs {
    fn default() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            velocity: format!("{}", defaults.initial_speed_mps),
            launch_angle: format!("{}", defaults.launch_angle_deg),
            incline_angle: format!("{}", defaults.incline_angle_deg),
        }
    }
}

impl ParameterInputs {
    pub fn parse(&self) -> Result<SimulationParameters, ParamError> {
        parse_parameters(&self.velocity, &self.launch_angle, &self.incline_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_parse_to_default_parameters() {
        let inputs = ParameterInputs::default();
        assert_eq!(inputs.velocity, "10");
        assert_eq!(inputs.launch_angle, "45");
        assert_eq!(inputs.incline_angle, "30");
        assert_eq!(inputs.parse(), Ok(SimulationParameters::default()));
    }

    #[test]
    fn parses_padded_and_negative_values() {
        let params = parse_parameters(" 12.5 ", "-15", "100").expect("should parse");
        assert_eq!(params.initial_speed_mps, 12.5);
        assert_eq!(params.launch_angle_deg, -15.0);
        assert_eq!(params.incline_angle_deg, 100.0);
    }

    #[test]
    fn rejects_text_and_names_the_field() {
        let err = parse_parameters("10", "abc", "30").expect_err("should fail");
        assert_eq!(err.field(), ParamField::LaunchAngle);
        assert!(err.to_string().contains("launch angle"));
        assert!(err.to_string().contains("'abc'"));

        let err = parse_parameters("", "45", "30").expect_err("empty should fail");
        assert_eq!(err.field(), ParamField::Velocity);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = parse_parameters("10", "45", "inf").expect_err("should fail");
        assert!(matches!(
            err,
            ParamError::NotFinite {
                field: ParamField::InclineAngle,
                ..
            }
        ));
        assert!(parse_parameters("NaN", "45", "30").is_err());
        assert!(SimulationParameters::new(10.0, f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn first_bad_field_wins() {
        let err = parse_parameters("x", "y", "z").expect_err("should fail");
        assert_eq!(err.field(), ParamField::Velocity);
    }
}
