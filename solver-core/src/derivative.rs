//! Second spatial derivative by central differences.
//!
//! Neighbours wrap around the array ends so every index uses the same
//! stencil, then indices `0` and `n - 1` are overwritten with zero. The
//! wrapped values never survive, so the raw boundary curvature must not be
//! used for anything.

/// Returns a fresh buffer holding `d2y/dx2` at every index of `y`.
pub fn second_derivative(y: &[f64], dx: f64) -> Vec<f64> {
    let mut out = vec![0.0; y.len()];
    second_derivative_into(y, dx, &mut out);
    out
}

/// Same as [`second_derivative`], writing into a caller-owned scratch buffer.
pub fn second_derivative_into(y: &[f64], dx: f64, out: &mut [f64]) {
    let n = y.len();
    assert_eq!(out.len(), n, "derivative buffer must match the field length");
    if n == 0 {
        return;
    }
    let inv_dx2 = 1.0 / (dx * dx);

    for i in 0..n {
        let left = y[(i + n - 1) % n];
        let right = y[(i + 1) % n];
        out[i] = (right - 2.0 * y[i] + left) * inv_dx2;
    }

    // Dirichlet: fixed ends carry no curvature
    out[0] = 0.0;
    out[n - 1] = 0.0;
}

/// Pins both ends of `y` to zero.
pub(crate) fn apply_dirichlet_bc(y: &mut [f64]) {
    if let Some(first) = y.first_mut() {
        *first = 0.0;
    }
    if let Some(last) = y.last_mut() {
        *last = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parabola_has_constant_curvature() {
        let dx = 0.1;
        let y: Vec<f64> = (0..20).map(|i| (i as f64 * dx).powi(2)).collect();
        let d2 = second_derivative(&y, dx);
        assert_eq!(d2[0], 0.0);
        assert_eq!(d2[19], 0.0);
        for v in &d2[1..19] {
            assert!((v - 2.0).abs() < 1e-9, "got {v}");
        }
    }

    #[test]
    fn clamp_zeroes_only_the_ends() {
        let mut y = vec![1.0, 2.0, 3.0, 4.0];
        apply_dirichlet_bc(&mut y);
        assert_eq!(y, vec![0.0, 2.0, 3.0, 0.0]);
        let mut empty: Vec<f64> = Vec::new();
        apply_dirichlet_bc(&mut empty);
    }

    #[test]
    fn input_is_left_untouched() {
        let y = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        let copy = y.clone();
        let _ = second_derivative(&y, 0.5);
        assert_eq!(y, copy);
    }

    #[test]
    fn constant_field_has_no_interior_curvature() {
        let y = vec![7.25; 16];
        let d2 = second_derivative(&y, 0.01);
        assert!(d2.iter().all(|&v| v == 0.0));
    }
}
