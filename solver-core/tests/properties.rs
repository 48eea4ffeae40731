use proptest::prelude::*;
use solver_core::*;

fn field() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0_f64..100.0, 3..64)
}

proptest! {
    #[test]
    fn derivative_ends_are_zero(y in field(), dx in 0.001_f64..10.0) {
        let d2 = second_derivative(&y, dx);
        prop_assert_eq!(d2.len(), y.len());
        prop_assert_eq!(d2[0], 0.0);
        prop_assert_eq!(d2[y.len() - 1], 0.0);
    }

    #[test]
    fn constant_fields_have_zero_curvature(c in -1e3_f64..1e3, n in 3usize..64, dx in 0.001_f64..1.0) {
        let y = vec![c; n];
        prop_assert!(second_derivative(&y, dx).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn heat_step_pins_the_ends(mut y in field(), alpha in 0.0_f64..5.0) {
        let dx = 0.1;
        let dt = heat_dt_max(dx, alpha.max(1e-6));
        let mut d2y = vec![0.0; y.len()];
        heat_step(&mut y, &mut d2y, alpha, dx, dt);
        prop_assert_eq!(y[0], 0.0);
        prop_assert_eq!(*y.last().unwrap(), 0.0);
    }

    #[test]
    fn wave_step_pins_the_ends(
        mut y in field(),
        v0 in -10.0_f64..10.0,
        c in 0.1_f64..500.0,
        b in 0.0_f64..10.0,
    ) {
        let dx = 0.01;
        let mut v = vec![v0; y.len()];
        let mut d2y = vec![0.0; y.len()];
        let params = WaveParams { c, b };
        wave_step(&mut y, &mut v, &mut d2y, params, dx, wave_dt_max(dx, c));
        prop_assert_eq!(y[0], 0.0);
        prop_assert_eq!(*y.last().unwrap(), 0.0);
        prop_assert_eq!(v.len(), y.len());
    }

    #[test]
    fn normalize_hits_both_ends(a in prop::collection::vec(-1e3_f64..1e3, 2..256)) {
        let min = a.iter().copied().fold(f64::INFINITY, f64::min);
        let max = a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max > min);
        let out = normalize(&a).unwrap();
        prop_assert!(out.iter().all(|s| (-1.0..=1.0).contains(s)));
        prop_assert_eq!(out.iter().copied().fold(f64::INFINITY, f64::min), -1.0);
        prop_assert_eq!(out.iter().copied().fold(f64::NEG_INFINITY, f64::max), 1.0);
    }

    #[test]
    fn pluck_rises_then_falls(n in 10usize..300, frac in 0.0_f64..1.0, height in 0.001_f64..1.0) {
        let grid = Grid::new(n, 1.0).unwrap();
        let apex = (n as f64 * frac).round() as usize;
        prop_assume!(apex >= 1 && apex <= n - 2);

        let y = pluck(&grid, frac, height).unwrap();
        prop_assert!((y[apex] - height).abs() < 1e-12);
        for i in 0..apex {
            prop_assert!(y[i] <= y[i + 1]);
        }
        for i in apex..n - 1 {
            prop_assert!(y[i] >= y[i + 1]);
        }
    }
}
