//! Initial displacement profiles.

use crate::error::{SolverError, SolverResult};
use crate::grid::Grid;

/// `sin(frequency * x) + 1`, rescaled so its maximum equals `peak`.
pub fn sinusoidal(positions: &[f64], frequency: f64, peak: f64) -> SolverResult<Vec<f64>> {
    let mut y: Vec<f64> = positions.iter().map(|&x| (frequency * x).sin() + 1.0).collect();
    let max = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max > 0.0) {
        return Err(SolverError::config(
            "sinusoidal profile has no positive sample to rescale",
        ));
    }
    let scale = peak / max;
    for v in y.iter_mut() {
        *v *= scale;
    }
    Ok(y)
}

/// Index of the pluck point, `round(n * l / length)`. It must leave at least
/// one grid step on either side of the apex, or the triangle would have a
/// zero-width flank.
pub fn pluck_index(grid: &Grid, l: f64) -> SolverResult<usize> {
    let i = grid.index_of(l)?;
    if i < 1 || i > grid.n() - 2 {
        return Err(SolverError::config(format!(
            "pluck position {l} maps to index {i}, needs to be within 1..={}",
            grid.n() - 2
        )));
    }
    Ok(i)
}

/// Triangular string shape: zero at both ends, `height` at the grid point
/// nearest `l`, straight lines in between.
pub fn pluck(grid: &Grid, l: f64, height: f64) -> SolverResult<Vec<f64>> {
    let n = grid.n();
    let apex = pluck_index(grid, l)?;
    let last = n - 1;

    let y = (0..n)
        .map(|i| {
            if i <= apex {
                height * i as f64 / apex as f64
            } else {
                height * (last - i) as f64 / (last - apex) as f64
            }
        })
        .collect();
    Ok(y)
}

/// Convolves `field` with a normalized Gaussian of standard deviation
/// `sigma` (in grid points). The kernel spans as many points as the field
/// and is centred on it, so the output has the same length and is not
/// shifted.
pub fn gaussian_smooth(field: &[f64], sigma: f64) -> SolverResult<Vec<f64>> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(SolverError::config(format!(
            "sigma must be positive, got {sigma}"
        )));
    }
    let n = field.len();
    let center = n / 2;
    let mut kernel: Vec<f64> = (0..n)
        .map(|m| {
            let d = m as f64 - center as f64;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f64 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= total;
    }

    let mut out = vec![0.0; n];
    for (i, o) in out.iter_mut().enumerate() {
        // offset i - j lands on kernel index i + center - j
        let m = i + center;
        *o = field
            .iter()
            .enumerate()
            .filter(|&(j, _)| j <= m && m - j < n)
            .map(|(j, &a)| a * kernel[m - j])
            .sum();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinusoid_peaks_at_amplitude() {
        let grid = Grid::new(1000, 100.0).unwrap();
        let y = sinusoidal(&grid.positions(), 10.0, 50.0).unwrap();
        let max = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((max - 50.0).abs() < 1e-12);
        assert!(y.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn pluck_at_midpoint() {
        let grid = Grid::new(100, 1.0).unwrap();
        let y = pluck(&grid, 0.5, 1.0).unwrap();
        assert_eq!(y.len(), 100);
        assert!((y[50] - 1.0).abs() < 1e-12);
        assert_eq!(y[0], 0.0);
        assert_eq!(y[99], 0.0);
        let max = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, y[50]);
    }

    #[test]
    fn pluck_at_the_ends_is_rejected() {
        let grid = Grid::new(100, 1.0).unwrap();
        assert!(pluck(&grid, 0.0, 1.0).is_err());
        assert!(pluck(&grid, 0.004, 1.0).is_err());
        assert!(pluck(&grid, 0.99, 1.0).is_err());
        assert!(pluck(&grid, 1.0, 1.0).is_err());
        assert!(pluck(&grid, 1.5, 1.0).is_err());
        assert!(pluck(&grid, 0.01, 1.0).is_ok());
        assert!(pluck(&grid, 0.98, 1.0).is_ok());
    }

    #[test]
    fn smoothing_preserves_mass_away_from_edges() {
        let mut y = vec![0.0; 41];
        y[20] = 1.0;
        let s = gaussian_smooth(&y, 2.0).unwrap();
        assert_eq!(s.len(), 41);
        let total: f64 = s.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        // centred: the impulse stays where it was
        let argmax = s
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(argmax, 20);
        assert!((s[19] - s[21]).abs() < 1e-15);
    }

    #[test]
    fn smoothing_rounds_the_pluck_apex() {
        let grid = Grid::new(100, 1.0).unwrap();
        let y = pluck(&grid, 0.5, 1.0).unwrap();
        let s = gaussian_smooth(&y, 1.0).unwrap();
        assert!(s[50] < y[50]);
        assert!(s[50] > 0.9);
        assert!(gaussian_smooth(&y, 0.0).is_err());
    }
}
