//! Hand-off point for renderers: a simulation advances when asked and hands
//! back its current field. Timing and drawing belong to the caller.

use serde::Serialize;

use crate::heat::HeatSolver;
use crate::wave::WaveSolver;

pub trait Simulation {
    /// Runs `steps` time steps and returns the displacement afterwards.
    fn advance_frame(&mut self, steps: usize) -> &[f64];
    /// x-axis matching the field, `i * dx`.
    fn positions(&self) -> &[f64];
    fn field(&self) -> &[f64];
    fn time(&self) -> f64;
}

impl Simulation for HeatSolver {
    fn advance_frame(&mut self, steps: usize) -> &[f64] {
        self.advance(steps)
    }

    fn positions(&self) -> &[f64] {
        HeatSolver::positions(self)
    }

    fn field(&self) -> &[f64] {
        HeatSolver::field(self)
    }

    fn time(&self) -> f64 {
        HeatSolver::time(self)
    }
}

impl Simulation for WaveSolver {
    fn advance_frame(&mut self, steps: usize) -> &[f64] {
        self.advance(steps)
    }

    fn positions(&self) -> &[f64] {
        WaveSolver::positions(self)
    }

    fn field(&self) -> &[f64] {
        WaveSolver::field(self)
    }

    fn time(&self) -> f64 {
        WaveSolver::time(self)
    }
}

/// Snapshot of the field after a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub frame: usize,
    pub time: f64,
    pub field: Vec<f64>,
}

/// Iterator of frames, each `steps_per_frame` steps apart. Without a frame
/// limit it runs until the consumer stops pulling.
pub struct FrameDriver<'a, S: Simulation> {
    sim: &'a mut S,
    steps_per_frame: usize,
    frame: usize,
    limit: Option<usize>,
}

impl<'a, S: Simulation> FrameDriver<'a, S> {
    pub fn new(sim: &'a mut S, steps_per_frame: usize) -> Self {
        FrameDriver {
            sim,
            steps_per_frame: steps_per_frame.max(1),
            frame: 0,
            limit: None,
        }
    }

    pub fn with_limit(mut self, frames: usize) -> Self {
        self.limit = Some(frames);
        self
    }
}

impl<S: Simulation> Iterator for FrameDriver<'_, S> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.limit.is_some_and(|limit| self.frame >= limit) {
            return None;
        }
        let field = self.sim.advance_frame(self.steps_per_frame).to_vec();
        let frame = Frame {
            frame: self.frame,
            time: self.sim.time(),
            field,
        };
        self.frame += 1;
        Some(frame)
    }
}
