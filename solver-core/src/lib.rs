//! Explicit finite-difference integrators for two 1D problems on a fixed-end
//! grid: heat diffusion along a rod and a damped plucked string.
//!
//! Both follow the same loop: second derivative, explicit update, clamp the
//! ends. The time step is always derived from the grid spacing and the
//! physical constants.

pub mod config;
pub mod derivative;
pub mod error;
pub mod frame;
pub mod grid;
pub mod heat;
pub mod initial;
pub mod recorder;
pub mod timestep;
pub mod wave;

pub use config::{HeatConfig, WaveConfig};
pub use derivative::{second_derivative, second_derivative_into};
pub use error::{SolverError, SolverResult};
pub use frame::{Frame, FrameDriver, Simulation};
pub use grid::Grid;
pub use heat::{HeatSolver, heat_step};
pub use initial::{gaussian_smooth, pluck, pluck_index, sinusoidal};
pub use recorder::{Recorder, Recording, normalize};
pub use timestep::{TimeStep, heat_dt_max, wave_dt_max};
pub use wave::{WaveParams, WaveSolver, wave_step};
