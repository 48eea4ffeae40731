use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};
use crate::grid::Grid;
use crate::initial::pluck_index;
use crate::timestep::{TimeStep, heat_dt_max, wave_dt_max};

/// Diffusing rod. Units follow the caller; the defaults are in mm and s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
    pub n: usize,
    pub length: f64,
    /// Diffusion coefficient.
    pub alpha: f64,
    /// Peak of the initial sinusoidal profile.
    pub amplitude: f64,
    /// Angular frequency of the initial profile, `sin(frequency * x) + 1`.
    pub frequency: f64,
    /// Explicit time step. Must not exceed `dx^2 / (4 alpha)`.
    pub dt: Option<f64>,
}

impl Default for HeatConfig {
    fn default() -> Self {
        HeatConfig {
            n: 1000,
            length: 100.0,
            alpha: 0.3,
            amplitude: 50.0,
            frequency: 10.0,
            dt: None,
        }
    }
}

impl HeatConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> SolverResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> SolverResult<()> {
        Grid::new(self.n, self.length)?;
        positive("alpha", self.alpha)?;
        positive("amplitude", self.amplitude)?;
        finite("frequency", self.frequency)?;
        self.time_step().map(|_| ())
    }

    pub fn grid(&self) -> SolverResult<Grid> {
        Grid::new(self.n, self.length)
    }

    pub fn time_step(&self) -> SolverResult<TimeStep> {
        positive("alpha", self.alpha)?;
        let grid = self.grid()?;
        TimeStep::derive(heat_dt_max(grid.dx(), self.alpha), self.dt)
    }
}

/// Damped plucked string, SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub n: usize,
    pub length: f64,
    /// Wave speed (m/s).
    pub c: f64,
    /// Velocity damping (Ns/m).
    pub b: f64,
    /// Where the string is plucked, measured from the left end.
    pub pluck_pos: f64,
    /// Displacement at the pluck point.
    pub pluck_height: f64,
    /// Gaussian smoothing applied to the pluck, in grid points. `None` keeps
    /// the sharp triangle.
    pub sigma: Option<f64>,
    /// Seconds of audio to record.
    pub recording_length: f64,
    /// Position of the pickup along the string.
    pub microphone_pos: f64,
    /// Explicit time step. Must not exceed `dx / (c sqrt 2)`.
    pub dt: Option<f64>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        let length = 0.426;
        WaveConfig {
            n: 400,
            length,
            c: 120.0,
            b: 4.0,
            pluck_pos: 0.1,
            pluck_height: 0.007,
            sigma: Some(1.0),
            recording_length: 1.0,
            microphone_pos: length / 10.0,
            dt: None,
        }
    }
}

impl WaveConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> SolverResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> SolverResult<()> {
        let grid = self.grid()?;
        positive("c", self.c)?;
        if !(self.b.is_finite() && self.b >= 0.0) {
            return Err(SolverError::config(format!(
                "b must be non-negative, got {}",
                self.b
            )));
        }
        finite("pluck_height", self.pluck_height)?;
        if let Some(sigma) = self.sigma {
            positive("sigma", sigma)?;
        }
        positive("recording_length", self.recording_length)?;
        pluck_index(&grid, self.pluck_pos)?;
        grid.index_of(self.microphone_pos)?;
        self.time_step().map(|_| ())
    }

    pub fn grid(&self) -> SolverResult<Grid> {
        Grid::new(self.n, self.length)
    }

    pub fn time_step(&self) -> SolverResult<TimeStep> {
        positive("c", self.c)?;
        let grid = self.grid()?;
        TimeStep::derive(wave_dt_max(grid.dx(), self.c), self.dt)
    }
}

fn positive(name: &str, value: f64) -> SolverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::config(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn finite(name: &str, value: f64) -> SolverResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::config(format!("{name} must be finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        HeatConfig::default().validate().unwrap();
        WaveConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: WaveConfig = serde_json::from_str(r#"{ "n": 200, "b": 0.0 }"#).unwrap();
        assert_eq!(cfg.n, 200);
        assert_eq!(cfg.b, 0.0);
        assert_eq!(cfg.c, 120.0);
        assert_eq!(cfg.sigma, Some(1.0));

        let cfg: WaveConfig = serde_json::from_str(r#"{ "sigma": null }"#).unwrap();
        assert_eq!(cfg.sigma, None);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = HeatConfig { alpha: 0.0, ..HeatConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = WaveConfig { pluck_pos: 1.0, ..WaveConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = WaveConfig { microphone_pos: 0.426, ..WaveConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = WaveConfig { b: -1.0, ..WaveConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oversized_dt_is_unstable() {
        let cfg = WaveConfig { dt: Some(1.0), ..WaveConfig::default() };
        assert!(matches!(cfg.validate(), Err(SolverError::Unstable { .. })));
    }
}
