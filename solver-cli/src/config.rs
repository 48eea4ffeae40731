use clap::Args;
use solver_core::{HeatConfig, SolverResult, WaveConfig};
use std::path::PathBuf;

/// Rod settings. Flags override values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct HeatArgs {
    /// JSON file with a HeatConfig (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid points
    #[arg(long)]
    n: Option<usize>,

    /// Rod length
    #[arg(long)]
    length: Option<f64>,

    /// Diffusion coefficient
    #[arg(long)]
    alpha: Option<f64>,

    /// Peak of the initial profile
    #[arg(long)]
    amplitude: Option<f64>,

    /// Angular frequency of the initial profile
    #[arg(long)]
    frequency: Option<f64>,

    /// Time step; must not exceed dx^2 / (4 alpha)
    #[arg(long)]
    dt: Option<f64>,
}

impl HeatArgs {
    pub fn resolve(&self) -> SolverResult<HeatConfig> {
        let mut cfg = match &self.config {
            Some(path) => HeatConfig::from_json_file(path)?,
            None => HeatConfig::default(),
        };
        if let Some(n) = self.n { cfg.n = n; }
        if let Some(length) = self.length { cfg.length = length; }
        if let Some(alpha) = self.alpha { cfg.alpha = alpha; }
        if let Some(amplitude) = self.amplitude { cfg.amplitude = amplitude; }
        if let Some(frequency) = self.frequency { cfg.frequency = frequency; }
        if self.dt.is_some() { cfg.dt = self.dt; }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// String settings. Flags override values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct WaveArgs {
    /// JSON file with a WaveConfig (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid points
    #[arg(long)]
    n: Option<usize>,

    /// String length (m)
    #[arg(long)]
    length: Option<f64>,

    /// Wave speed (m/s)
    #[arg(long)]
    c: Option<f64>,

    /// Damping (Ns/m)
    #[arg(long)]
    b: Option<f64>,

    /// Pluck position from the left end (m)
    #[arg(long)]
    pluck_pos: Option<f64>,

    /// Pluck displacement (m)
    #[arg(long)]
    pluck_height: Option<f64>,

    /// Gaussian smoothing of the pluck, in grid points
    #[arg(long, conflicts_with = "no_smoothing")]
    sigma: Option<f64>,

    /// Keep the sharp triangular pluck
    #[arg(long)]
    no_smoothing: bool,

    /// Seconds of audio to record
    #[arg(long)]
    recording_length: Option<f64>,

    /// Microphone position (m)
    #[arg(long)]
    microphone_pos: Option<f64>,

    /// Time step; must not exceed dx / (c sqrt 2)
    #[arg(long)]
    dt: Option<f64>,
}

impl WaveArgs {
    pub fn resolve(&self) -> SolverResult<WaveConfig> {
        let mut cfg = match &self.config {
            Some(path) => WaveConfig::from_json_file(path)?,
            None => WaveConfig::default(),
        };
        if let Some(n) = self.n { cfg.n = n; }
        if let Some(length) = self.length { cfg.length = length; }
        if let Some(c) = self.c { cfg.c = c; }
        if let Some(b) = self.b { cfg.b = b; }
        if let Some(pos) = self.pluck_pos { cfg.pluck_pos = pos; }
        if let Some(h) = self.pluck_height { cfg.pluck_height = h; }
        if self.sigma.is_some() { cfg.sigma = self.sigma; }
        if self.no_smoothing { cfg.sigma = None; }
        if let Some(len) = self.recording_length { cfg.recording_length = len; }
        if let Some(pos) = self.microphone_pos { cfg.microphone_pos = pos; }
        if self.dt.is_some() { cfg.dt = self.dt; }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use solver_core::SolverError;
    use std::fs;

    #[derive(Parser)]
    struct WaveCli {
        #[command(flatten)]
        wave: WaveArgs,
    }

    fn scratch_json(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}.json", std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = scratch_json("wave-merge", r#"{ "n": 200, "c": 90.0, "sigma": 2.0 }"#);
        let cli = WaveCli::try_parse_from([
            "record",
            "--config",
            path.to_str().unwrap(),
            "--c",
            "150",
            "--no-smoothing",
        ])
        .unwrap();
        let cfg = cli.wave.resolve().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(cfg.n, 200);
        assert_eq!(cfg.c, 150.0);
        assert_eq!(cfg.sigma, None);
        assert_eq!(cfg.b, WaveConfig::default().b);
    }

    #[test]
    fn oversized_dt_flag_is_rejected() {
        let cli = WaveCli::try_parse_from(["record", "--dt", "1.0"]).unwrap();
        assert!(matches!(cli.wave.resolve(), Err(SolverError::Unstable { .. })));
    }

    #[test]
    fn heat_file_values_are_validated() {
        let path = scratch_json("heat-bad", r#"{ "alpha": -0.3 }"#);
        let args = HeatArgs {
            config: Some(path.clone()),
            ..HeatArgs::default()
        };
        let result = args.resolve();
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SolverError::InvalidConfig { .. })));

        let args = HeatArgs {
            n: Some(50),
            alpha: Some(0.1),
            ..HeatArgs::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!((cfg.n, cfg.alpha), (50, 0.1));
    }
}
