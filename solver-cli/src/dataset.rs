use crate::ic::{SampleRanges, sample_heat, sample_wave};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use solver_core::{HeatConfig, HeatSolver, Simulation, WaveConfig, WaveSolver};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PhysicsKind {
    Heat,
    Wave,
}

#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Which equation to integrate
    #[arg(long, value_enum, default_value = "wave")]
    physics: PhysicsKind,

    /// Split label written into meta.jsonl (train|val|test|ood)
    #[arg(long, default_value = "train")]
    split: String,

    /// Grid points
    #[arg(long, default_value_t = 128)]
    n: usize,

    /// Trajectory start index (for deterministic split-by-range)
    #[arg(long, default_value_t = 0)]
    traj_start: usize,

    /// Number of trajectories to generate
    #[arg(long, default_value_t = 100)]
    traj_count: usize,

    /// How many (u^t -> u^{t+k}) samples per trajectory
    #[arg(long, default_value_t = 8)]
    t_steps: usize,

    /// Comma-separated step counts k between input and target, e.g. "1,10,100"
    #[arg(long, default_value = "1,10,100")]
    k_set: String,

    /// Diffusivity alpha min (heat, sampled per-trajectory)
    #[arg(long, default_value_t = 0.05)]
    alpha_min: f64,

    /// Diffusivity alpha max (heat, sampled per-trajectory)
    #[arg(long, default_value_t = 0.5)]
    alpha_max: f64,

    /// Damping b min (wave, sampled per-trajectory)
    #[arg(long, default_value_t = 0.0)]
    b_min: f64,

    /// Damping b max (wave, sampled per-trajectory)
    #[arg(long, default_value_t = 8.0)]
    b_max: f64,

    /// Base RNG seed (reproducibility)
    #[arg(long, default_value_t = 123)]
    seed: u64,
}

#[derive(Serialize)]
struct MetaRow<'a> {
    global_sample_idx: u64,
    split: &'a str,

    traj_idx: usize,     // global traj index (traj_start + local)
    step_idx: usize,

    base_seed: u64,
    traj_seed: u64,

    k: usize,

    #[serde(flatten)]
    traj: &'a TrajMeta,
}

/// Per-trajectory physics, repeated on every row of that trajectory.
#[derive(Serialize, Default)]
struct TrajMeta {
    physics: &'static str,
    n: usize,
    dx: f64,
    dt: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pluck_pos: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pluck_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sigma: Option<f64>,

    ic_type: &'static str,
}

pub fn execute(args: DatasetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.alpha_max <= args.alpha_min {
        return Err("alpha_max must be > alpha_min".into());
    }
    if args.b_max < args.b_min || args.b_min < 0.0 {
        return Err("need 0 <= b_min <= b_max".into());
    }

    let k_values = parse_k_set(&args.k_set)?;
    if k_values.is_empty() {
        return Err("k_set parsed to empty set".into());
    }

    let ranges = SampleRanges {
        alpha: (args.alpha_min, args.alpha_max),
        frequency: (1.0, 10.0),
        damping: (args.b_min, args.b_max),
    };
    let heat_base = HeatConfig {
        n: args.n,
        ..HeatConfig::default()
    };
    let wave_base = WaveConfig {
        n: args.n,
        ..WaveConfig::default()
    };

    fs::create_dir_all(&args.out)?;

    let mut input_writer = BufWriter::new(File::create(args.out.join("input.bin"))?);
    let mut target_writer = BufWriter::new(File::create(args.out.join("target.bin"))?);

    let mut meta_file = BufWriter::new(
        OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(args.out.join("meta.jsonl"))?,
    );

    let mut global_idx: u64 = 0;

    for local_traj in 0..args.traj_count {
        let traj_idx = args.traj_start + local_traj;

        // Deterministic per-trajectory seed
        let traj_seed = args.seed ^ ((traj_idx as u64).wrapping_mul(0x9E3779B97F4A7C15));
        let mut rng = ChaCha8Rng::seed_from_u64(traj_seed);

        let (mut sim, traj): (Box<dyn Simulation>, TrajMeta) = match args.physics {
            PhysicsKind::Heat => {
                let (ic, cfg) = sample_heat(&mut rng, &heat_base, &ranges);
                let solver = HeatSolver::new(&cfg)?;
                let meta = TrajMeta {
                    physics: "heat",
                    n: cfg.n,
                    dx: solver.grid().dx(),
                    dt: solver.dt(),
                    alpha: Some(cfg.alpha),
                    frequency: Some(cfg.frequency),
                    ic_type: ic.as_str(),
                    ..TrajMeta::default()
                };
                (Box::new(solver), meta)
            }
            PhysicsKind::Wave => {
                let (ic, cfg) = sample_wave(&mut rng, &wave_base, &ranges);
                let solver = WaveSolver::new(&cfg)?;
                let meta = TrajMeta {
                    physics: "wave",
                    n: cfg.n,
                    dx: solver.grid().dx(),
                    dt: solver.dt(),
                    c: Some(cfg.c),
                    b: Some(cfg.b),
                    pluck_pos: Some(cfg.pluck_pos),
                    pluck_height: Some(cfg.pluck_height),
                    sigma: cfg.sigma,
                    ic_type: ic.as_str(),
                    ..TrajMeta::default()
                };
                (Box::new(solver), meta)
            }
        };
        debug!(traj_idx, traj_seed, ic = traj.ic_type, "trajectory");

        for step_idx in 0..args.t_steps {
            let k = *k_values.choose(&mut rng).ok_or("k_set is empty")?;

            let u_in = sim.field().to_vec();
            let u_out = sim.advance_frame(k).to_vec();

            write_f32_vec(&mut input_writer, &u_in)?;
            write_f32_vec(&mut target_writer, &u_out)?;

            let row = MetaRow {
                global_sample_idx: global_idx,
                split: &args.split,

                traj_idx,
                step_idx,

                base_seed: args.seed,
                traj_seed,

                k,
                traj: &traj,
            };

            serde_json::to_writer(&mut meta_file, &row)?;
            meta_file.write_all(b"\n")?;

            global_idx += 1;
        }
    }

    input_writer.flush()?;
    target_writer.flush()?;
    meta_file.flush()?;

    info!("wrote dataset to: {}", args.out.display());
    info!(
        "samples: {} (traj_count={} * t_steps={})",
        global_idx, args.traj_count, args.t_steps
    );

    Ok(())
}

fn write_f32_vec<W: Write>(w: &mut W, v: &[f64]) -> std::io::Result<()> {
    for &x in v {
        w.write_all(&(x as f32).to_le_bytes())?;
    }
    Ok(())
}

fn parse_k_set(s: &str) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        let v: usize = p.parse()?;
        if v == 0 {
            return Err("k_set cannot contain 0".into());
        }
        out.push(v);
    }
    // remove duplicates (stable order)
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
