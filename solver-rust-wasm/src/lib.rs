use solver_core::{HeatConfig, HeatSolver, SolverError, WaveConfig, WaveSolver};
use wasm_bindgen::prelude::*;

fn js_err(e: SolverError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Rod for a browser plot. The page owns the animation loop and calls
/// `step` once per frame.
#[wasm_bindgen]
pub struct HeatSim {
    inner: HeatSolver,
}

#[wasm_bindgen]
impl HeatSim {
    #[wasm_bindgen(constructor)]
    pub fn new(n: usize, length: f64, alpha: f64) -> Result<HeatSim, JsValue> {
        let cfg = HeatConfig { n, length, alpha, ..HeatConfig::default() };
        let inner = HeatSolver::new(&cfg).map_err(js_err)?;
        Ok(HeatSim { inner })
    }

    pub fn dt(&self) -> f64 { self.inner.dt() }
    pub fn time(&self) -> f64 { self.inner.time() }
    pub fn n(&self) -> usize { self.inner.grid().n() }

    // Copy-based JS access (reliable)
    pub fn field(&self) -> Vec<f64> {
        self.inner.field().to_vec()
    }

    pub fn x(&self) -> Vec<f64> {
        self.inner.positions().to_vec()
    }

    // Step + timing (WASM-only)
    pub fn step(&mut self, steps: usize) -> StepInfo {
        let t0 = now_ms();
        self.inner.advance(steps);
        let t1 = now_ms();
        StepInfo { steps, compute_ms: t1 - t0, time: self.inner.time() }
    }
}

/// Plucked string for a browser plot.
#[wasm_bindgen]
pub struct WaveSim {
    inner: WaveSolver,
}

#[wasm_bindgen]
impl WaveSim {
    #[wasm_bindgen(constructor)]
    pub fn new(
        n: usize,
        length: f64,
        c: f64,
        b: f64,
        pluck_pos: f64,
        pluck_height: f64,
    ) -> Result<WaveSim, JsValue> {
        let cfg = WaveConfig {
            n,
            length,
            c,
            b,
            pluck_pos,
            pluck_height,
            sigma: None,
            microphone_pos: length / 10.0,
            ..WaveConfig::default()
        };
        let inner = WaveSolver::new(&cfg).map_err(js_err)?;
        Ok(WaveSim { inner })
    }

    pub fn dt(&self) -> f64 { self.inner.dt() }
    pub fn time(&self) -> f64 { self.inner.time() }
    pub fn n(&self) -> usize { self.inner.grid().n() }
    pub fn energy(&self) -> f64 { self.inner.energy() }
    pub fn sample_rate(&self) -> u32 { self.inner.time_step().sample_rate() }

    pub fn field(&self) -> Vec<f64> {
        self.inner.field().to_vec()
    }

    pub fn x(&self) -> Vec<f64> {
        self.inner.positions().to_vec()
    }

    pub fn step(&mut self, steps: usize) -> StepInfo {
        let t0 = now_ms();
        self.inner.advance(steps);
        let t1 = now_ms();
        StepInfo { steps, compute_ms: t1 - t0, time: self.inner.time() }
    }
}

#[wasm_bindgen]
pub struct StepInfo {
    steps: usize,
    compute_ms: f64,
    time: f64,
}

#[wasm_bindgen]
impl StepInfo {
    pub fn steps(&self) -> usize { self.steps }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn time(&self) -> f64 { self.time }
}


fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
