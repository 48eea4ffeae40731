use rand::Rng;
use solver_core::{HeatConfig, WaveConfig};

#[derive(Clone, Copy, Debug)]
pub enum IcType {
    Sinusoid,
    Pluck,
    SmoothPluck,
}

impl IcType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IcType::Sinusoid => "sinusoid",
            IcType::Pluck => "pluck",
            IcType::SmoothPluck => "smooth_pluck",
        }
    }
}

/// Ranges the per-trajectory parameters are drawn from.
#[derive(Clone, Debug)]
pub struct SampleRanges {
    pub alpha: (f64, f64),
    pub frequency: (f64, f64),
    pub damping: (f64, f64),
}

/// Rod with a random diffusivity and a random sinusoid frequency.
pub fn sample_heat<R: Rng>(rng: &mut R, base: &HeatConfig, ranges: &SampleRanges) -> (IcType, HeatConfig) {
    let cfg = HeatConfig {
        alpha: rng.gen_range(ranges.alpha.0..ranges.alpha.1),
        frequency: rng.gen_range(ranges.frequency.0..ranges.frequency.1),
        ..base.clone()
    };
    (IcType::Sinusoid, cfg)
}

/// String plucked somewhere away from the ends, half of the time smoothed.
pub fn sample_wave<R: Rng>(rng: &mut R, base: &WaveConfig, ranges: &SampleRanges) -> (IcType, WaveConfig) {
    // keep the apex a few cells clear of both ends
    let margin = 3.0 * base.length / base.n as f64;
    let pluck_pos = rng.gen_range(margin..base.length - margin);
    let pluck_height = base.pluck_height * rng.gen_range(0.25..1.0);
    let b = rng.gen_range(ranges.damping.0..=ranges.damping.1);

    let (ic, sigma) = if rng.gen_bool(0.5) {
        (IcType::SmoothPluck, Some(rng.gen_range(0.5..3.0)))
    } else {
        (IcType::Pluck, None)
    };

    let cfg = WaveConfig {
        pluck_pos,
        pluck_height,
        b,
        sigma,
        ..base.clone()
    };
    (ic, cfg)
}
