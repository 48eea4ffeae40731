use tracing::debug;

use crate::config::HeatConfig;
use crate::derivative::{apply_dirichlet_bc, second_derivative_into};
use crate::error::{SolverError, SolverResult};
use crate::grid::Grid;
use crate::initial::sinusoidal;
use crate::timestep::{TimeStep, heat_dt_max};

/// One explicit Euler step of `dy/dt = alpha * d2y/dx2`, followed by the
/// fixed-end clamp. `d2y` is scratch space of the same length as `y`.
pub fn heat_step(y: &mut [f64], d2y: &mut [f64], alpha: f64, dx: f64, dt: f64) {
    second_derivative_into(y, dx, d2y);
    for (yi, &curv) in y.iter_mut().zip(d2y.iter()) {
        *yi += alpha * curv * dt;
    }
    apply_dirichlet_bc(y);
}

pub struct HeatSolver {
    grid: Grid,
    alpha: f64,
    step: TimeStep,
    x: Vec<f64>,
    field: Vec<f64>,
    d2y: Vec<f64>,
    steps: u64,
}

impl HeatSolver {
    /// Builds the rod from `config`, starting from the sinusoidal profile.
    pub fn new(config: &HeatConfig) -> SolverResult<HeatSolver> {
        config.validate()?;
        let grid = config.grid()?;
        let step = config.time_step()?;
        let field = sinusoidal(&grid.positions(), config.frequency, config.amplitude)?;
        debug!(
            n = grid.n(),
            dx = grid.dx(),
            dt = step.dt(),
            alpha = config.alpha,
            "heat solver ready"
        );
        HeatSolver::with_field(grid, config.alpha, step, field)
    }

    /// Starts from an arbitrary profile. The ends are left as given until the
    /// first step clamps them. `step` must respect `dx^2 / (4 alpha)` for
    /// this grid.
    pub fn with_field(
        grid: Grid,
        alpha: f64,
        step: TimeStep,
        field: Vec<f64>,
    ) -> SolverResult<HeatSolver> {
        if field.len() != grid.n() {
            return Err(SolverError::config(format!(
                "field has {} points, grid has {}",
                field.len(),
                grid.n()
            )));
        }
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(SolverError::config(format!(
                "alpha must be positive, got {alpha}"
            )));
        }
        step.ensure_within(heat_dt_max(grid.dx(), alpha))?;
        let n = grid.n();
        Ok(HeatSolver {
            x: grid.positions(),
            grid,
            alpha,
            step,
            field,
            d2y: vec![0.0; n],
            steps: 0,
        })
    }

    // ---- Stepping ----

    pub fn step(&mut self) -> &[f64] {
        heat_step(
            &mut self.field,
            &mut self.d2y,
            self.alpha,
            self.grid.dx(),
            self.step.dt(),
        );
        self.steps += 1;
        &self.field
    }

    pub fn advance(&mut self, k: usize) -> &[f64] {
        for _ in 0..k {
            self.step();
        }
        &self.field
    }

    // ---- Accessors ----

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn field(&self) -> &[f64] {
        &self.field
    }

    pub fn positions(&self) -> &[f64] {
        &self.x
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
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

    pub fn clone_field(&self) -> Vec<f64> {
        self.field.clone()
    }
}
