use std::f64::consts::SQRT_2;

use crate::error::{SolverError, SolverResult};

/// Largest stable explicit-diffusion step: `dx^2 / (4 alpha)`.
pub fn heat_dt_max(dx: f64, alpha: f64) -> f64 {
    (dx * dx) / (4.0 * alpha)
}

/// Largest stable step for the string: `dx / (c sqrt 2)`.
pub fn wave_dt_max(dx: f64, c: f64) -> f64 {
    dx / (c * SQRT_2)
}

/// Time increment tied to the bound it was derived from. Solvers re-check
/// it against their own grid and constants with [`TimeStep::ensure_within`]
/// before accepting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    dt: f64,
    max_dt: f64,
}

impl TimeStep {
    /// Uses `max_dt` itself unless `requested` asks for something smaller.
    pub fn derive(max_dt: f64, requested: Option<f64>) -> SolverResult<TimeStep> {
        if !(max_dt.is_finite() && max_dt > 0.0) {
            return Err(SolverError::config(format!(
                "stability bound must be positive and finite, got {max_dt}"
            )));
        }
        let dt = match requested {
            None => max_dt,
            Some(dt) if !(dt.is_finite() && dt > 0.0) => {
                return Err(SolverError::config(format!("dt must be positive, got {dt}")));
            }
            Some(dt) if dt > max_dt => return Err(SolverError::Unstable { dt, max_dt }),
            Some(dt) => dt,
        };
        Ok(TimeStep { dt, max_dt })
    }

    /// Fails with `Unstable` if this step is larger than `max_dt`.
    pub fn ensure_within(&self, max_dt: f64) -> SolverResult<()> {
        if self.dt > max_dt {
            return Err(SolverError::Unstable {
                dt: self.dt,
                max_dt,
            });
        }
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    /// `round(1 / dt)`, the rate at which one sample per step plays back in
    /// real time.
    pub fn sample_rate(&self) -> u32 {
        (1.0 / self.dt).round() as u32
    }

    /// Number of steps covering `duration`, `round(duration / dt)`.
    pub fn steps_for(&self, duration: f64) -> usize {
        (duration / self.dt).round() as usize
    }
}
