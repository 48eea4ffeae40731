use tracing::{info, warn};

use crate::config::WaveConfig;
use crate::error::{SolverError, SolverResult};
use crate::wave::WaveSolver;

/// Normalized pickup signal, one sample per solver step.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

/// Samples the string displacement at a fixed grid index once per step.
#[derive(Debug, Clone, Copy)]
pub struct Recorder {
    microphone: usize,
    samples: usize,
}

impl Recorder {
    pub fn new(microphone: usize, samples: usize) -> Recorder {
        Recorder {
            microphone,
            samples,
        }
    }

    /// Microphone at `round(n * microphone_pos / length)`, recording
    /// `round(recording_length / dt)` samples.
    pub fn from_config(config: &WaveConfig) -> SolverResult<Recorder> {
        config.validate()?;
        let grid = config.grid()?;
        let step = config.time_step()?;
        Ok(Recorder {
            microphone: grid.index_of(config.microphone_pos)?,
            samples: step.steps_for(config.recording_length),
        })
    }

    pub fn microphone(&self) -> usize {
        self.microphone
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Raw displacement at the microphone after each of `samples()` steps.
    pub fn record(&self, solver: &mut WaveSolver) -> SolverResult<Vec<f64>> {
        self.record_while(solver, |_| true)
    }

    /// Like [`Recorder::record`], but asks `keep_going` before every step
    /// with the number of samples taken so far. Returning `false` ends the
    /// recording early with what has been collected.
    pub fn record_while<F>(&self, solver: &mut WaveSolver, mut keep_going: F) -> SolverResult<Vec<f64>>
    where
        F: FnMut(usize) -> bool,
    {
        if self.microphone >= solver.grid().n() {
            return Err(SolverError::config(format!(
                "microphone index {} is outside the {}-point string",
                self.microphone,
                solver.grid().n()
            )));
        }
        let mut buffer = Vec::with_capacity(self.samples);
        for i in 0..self.samples {
            if !keep_going(i) {
                break;
            }
            solver.step();
            buffer.push(solver.field()[self.microphone]);
        }
        Ok(buffer)
    }

    /// Records (stopping early when `keep_going` says so) and normalizes
    /// into `[-1, 1]`, tagging the result with the solver's sample rate.
    pub fn record_normalized<F>(&self, solver: &mut WaveSolver, keep_going: F) -> SolverResult<Recording>
    where
        F: FnMut(usize) -> bool,
    {
        let raw = self.record_while(solver, keep_going)?;
        let samples = normalize(&raw)?;
        let sample_rate = solver.time_step().sample_rate();
        info!(samples = samples.len(), sample_rate, "recording finished");
        Ok(Recording {
            samples,
            sample_rate,
        })
    }
}

/// Shifts and scales `a` so its minimum maps to -1 and its maximum to 1.
/// A constant (or empty) buffer has no range to stretch and is an error.
pub fn normalize(a: &[f64]) -> SolverResult<Vec<f64>> {
    let min = a.iter().copied().fold(f64::INFINITY, f64::min);
    let max = a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        warn!(len = a.len(), "cannot normalize a silent recording");
        return Err(SolverError::DegenerateRecording);
    }
    Ok(a
        .iter()
        .map(|&s| (((s - min) / span) - 0.5) * 2.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_stretches_to_unit_range() {
        let out = normalize(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn constant_buffer_is_degenerate() {
        assert!(matches!(
            normalize(&[0.25; 8]),
            Err(SolverError::DegenerateRecording)
        ));
        assert!(normalize(&[]).is_err());
    }

    #[test]
    fn short_recording() {
        let cfg = WaveConfig {
            recording_length: 0.01,
            ..WaveConfig::default()
        };
        let rec = Recorder::from_config(&cfg).unwrap();
        assert_eq!(rec.microphone(), 40);
        assert_eq!(rec.samples(), 1593);

        let mut solver = WaveSolver::new(&cfg).unwrap();
        let out = rec.record_normalized(&mut solver, |_| true).unwrap();
        assert_eq!(out.samples.len(), 1593);
        assert_eq!(out.sample_rate, 159_348);
        assert_eq!(solver.steps(), 1593);
        assert!(out.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn recording_can_stop_between_steps() {
        let cfg = WaveConfig {
            recording_length: 0.01,
            ..WaveConfig::default()
        };
        let rec = Recorder::from_config(&cfg).unwrap();
        let mut solver = WaveSolver::new(&cfg).unwrap();
        let raw = rec.record_while(&mut solver, |i| i < 100).unwrap();
        assert_eq!(raw.len(), 100);
        assert_eq!(solver.steps(), 100);

        let mut solver = WaveSolver::new(&cfg).unwrap();
        let out = rec.record_normalized(&mut solver, |i| i < 500).unwrap();
        assert_eq!(out.samples.len(), 500);
        assert_eq!(out.sample_rate, 159_348);
    }
}
