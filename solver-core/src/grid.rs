use crate::error::{SolverError, SolverResult};

/// `n` equally spaced points over `[0, length]`, point `i` sitting at
/// `i * dx` with `dx = length / n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    n: usize,
    length: f64,
    dx: f64,
}

impl Grid {
    pub fn new(n: usize, length: f64) -> SolverResult<Grid> {
        if n < 3 {
            return Err(SolverError::config("n must be >= 3"));
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(SolverError::config(format!(
                "length must be positive, got {length}"
            )));
        }
        Ok(Grid {
            n,
            length,
            dx: length / n as f64,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn positions(&self) -> Vec<f64> {
        (0..self.n).map(|i| i as f64 * self.dx).collect()
    }

    /// Grid index closest to position `x`, i.e. `round(n * x / length)`.
    /// Positions outside `[0, length)` are rejected since they would land
    /// off the end of the field.
    pub fn index_of(&self, x: f64) -> SolverResult<usize> {
        if !(0.0..=self.length).contains(&x) {
            return Err(SolverError::config(format!(
                "position {x} lies outside [0, {}]",
                self.length
            )));
        }
        let i = (self.n as f64 * x / self.length).round() as usize;
        if i >= self.n {
            return Err(SolverError::config(format!(
                "position {x} rounds to index {i}, past the last grid point"
            )));
        }
        Ok(i)
    }
}
