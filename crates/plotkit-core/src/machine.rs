//! Machine parameters for toolpath emission.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

/// Pen heights, feed rates and optional custom start/end blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineParams {
    /// Z height with the pen touching the paper, in mm
    pub z_down: f64,
    /// Z height for travel moves, in mm
    pub z_up: f64,
    /// Drawing feed rate in mm/min
    pub feed_rate: f64,
    /// Travel feed rate in mm/min
    pub travel_rate: f64,
    /// Z height the pen is parked at after the last polyline
    pub park_height: f64,
    /// Home X/Y after drawing
    pub home_at_end: bool,
    /// Disable the stepper motors after drawing
    pub disable_motors_at_end: bool,
    /// Replaces the default preamble verbatim when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prologue: Option<String>,
    /// Replaces the default epilogue verbatim when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epilogue: Option<String>,
}

impl Default for MachineParams {
    fn default() -> Self {
        Self {
            z_down: 0.0,
            z_up: 5.0,
            feed_rate: 1000.0,
            travel_rate: 3000.0,
            park_height: 10.0,
            home_at_end: true,
            disable_motors_at_end: true,
            prologue: None,
            epilogue: None,
        }
    }
}

impl MachineParams {
    pub fn new(z_down: f64, z_up: f64, feed_rate: f64, travel_rate: f64) -> Self {
        Self {
            z_down,
            z_up,
            feed_rate,
            travel_rate,
            ..Self::default()
        }
    }

    pub fn with_prologue(mut self, prologue: impl Into<String>) -> Self {
        self.prologue = Some(prologue.into());
        self
    }

    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Validate all numeric fields.
    pub fn validate(&self) -> ParameterResult<()> {
        ParameterError::check_finite("z_down", self.z_down)?;
        ParameterError::check_finite("z_up", self.z_up)?;
        ParameterError::check_finite("park_height", self.park_height)?;
        ParameterError::check_positive("feed_rate", self.feed_rate)?;
        ParameterError::check_positive("travel_rate", self.travel_rate)?;

        if self.z_up <= self.z_down {
            return Err(ParameterError::InvalidValue {
                name: "z_up".to_string(),
                reason: format!(
                    "pen-up height {} must be above pen-down height {}",
                    self.z_up, self.z_down
                ),
            });
        }

        Ok(())
    }
}
