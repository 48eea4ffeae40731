use tracing::debug;

use crate::config::WaveConfig;
use crate::derivative::{apply_dirichlet_bc, second_derivative_into};
use crate::error::{SolverError, SolverResult};
use crate::grid::Grid;
use crate::initial::{gaussian_smooth, pluck};
use crate::timestep::{TimeStep, wave_dt_max};

/// Wave speed and damping of the string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub c: f64,
    pub b: f64,
}

/// Advances `y` and `v` by one step of `y_tt = c^2 y_xx - b y_t`.
///
/// Velocity is updated first and the new velocity moves the displacement
/// (semi-implicit Euler). Only the displacement is clamped at the ends; the
/// end velocities are whatever the update produced.
pub fn wave_step(
    y: &mut [f64],
    v: &mut [f64],
    d2y: &mut [f64],
    params: WaveParams,
    dx: f64,
    dt: f64,
) {
    debug_assert_eq!(y.len(), v.len());
    second_derivative_into(y, dx, d2y);
    let c2 = params.c * params.c;
    for ((yi, vi), &curv) in y.iter_mut().zip(v.iter_mut()).zip(d2y.iter()) {
        let accel = c2 * curv - params.b * *vi;
        *vi += accel * dt;
        *yi += *vi * dt;
    }
    apply_dirichlet_bc(y);
}

pub struct WaveSolver {
    grid: Grid,
    params: WaveParams,
    step: TimeStep,
    x: Vec<f64>,
    y: Vec<f64>,
    v: Vec<f64>,
    d2y: Vec<f64>,
    steps: u64,
}

impl WaveSolver {
    /// Builds the string at rest in its (optionally smoothed) plucked shape.
    pub fn new(config: &WaveConfig) -> SolverResult<WaveSolver> {
        config.validate()?;
        let grid = config.grid()?;
        let step = config.time_step()?;
        let mut y = pluck(&grid, config.pluck_pos, config.pluck_height)?;
        if let Some(sigma) = config.sigma {
            y = gaussian_smooth(&y, sigma)?;
        }
        debug!(
            n = grid.n(),
            dx = grid.dx(),
            dt = step.dt(),
            c = config.c,
            b = config.b,
            "wave solver ready"
        );
        let v = vec![0.0; grid.n()];
        let params = WaveParams {
            c: config.c,
            b: config.b,
        };
        WaveSolver::with_state(grid, params, step, y, v)
    }

    /// Starts from arbitrary displacement and velocity. `step` must respect
    /// `dx / (c sqrt 2)` for this grid.
    pub fn with_state(
        grid: Grid,
        params: WaveParams,
        step: TimeStep,
        y: Vec<f64>,
        v: Vec<f64>,
    ) -> SolverResult<WaveSolver> {
        let n = grid.n();
        if y.len() != n || v.len() != n {
            return Err(SolverError::config(format!(
                "state has {}/{} points, grid has {n}",
                y.len(),
                v.len()
            )));
        }
        if !(params.c.is_finite() && params.c > 0.0) {
            return Err(SolverError::config(format!(
                "c must be positive, got {}",
                params.c
            )));
        }
        if !(params.b.is_finite() && params.b >= 0.0) {
            return Err(SolverError::config(format!(
                "b must be non-negative, got {}",
                params.b
            )));
        }
        step.ensure_within(wave_dt_max(grid.dx(), params.c))?;
        Ok(WaveSolver {
            x: grid.positions(),
            grid,
            params,
            step,
            y,
            v,
            d2y: vec![0.0; n],
            steps: 0,
        })
    }

    // ---- Stepping ----

    pub fn step(&mut self) -> &[f64] {
        wave_step(
            &mut self.y,
            &mut self.v,
            &mut self.d2y,
            self.params,
            self.grid.dx(),
            self.step.dt(),
        );
        self.steps += 1;
        &self.y
    }

    pub fn advance(&mut self, k: usize) -> &[f64] {
        for _ in 0..k {
            self.step();
        }
        &self.y
    }

    // ---- Observables ----

    /// Displacement at grid index `i`, `None` past the end of the string.
    pub fn pickup(&self, i: usize) -> Option<f64> {
        self.y.get(i).copied()
    }

    /// `sum(v^2) + c^2 * sum(((y[i+1] - y[i]) / dx)^2)`.
    pub fn energy(&self) -> f64 {
        let kinetic: f64 = self.v.iter().map(|v| v * v).sum();
        let dx = self.grid.dx();
        let strain: f64 = self
            .y
            .windows(2)
            .map(|w| {
                let g = (w[1] - w[0]) / dx;
                g * g
            })
            .sum();
        kinetic + self.params.c * self.params.c * strain
    }

    // ---- Accessors ----

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> WaveParams {
        self.params
    }

    pub fn field(&self) -> &[f64] {
        &self.y
    }

    pub fn velocity(&self) -> &[f64] {
        &self.v
    }

    pub fn positions(&self) -> &[f64] {
        &self.x
    }

    pub fn time_step(&self) -> TimeStep {
        self.step
    }

    pub fn dt(&self) -> f64 {
        self.step.dt()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn time(&self) -> f64 {
        self.steps as f64 * self.step.dt()
    }
}
