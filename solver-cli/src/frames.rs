use crate::config::{HeatArgs, WaveArgs};
use clap::{Args, Subcommand};
use serde::Serialize;
use solver_core::{FrameDriver, HeatSolver, Simulation, WaveSolver};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct FramesArgs {
    /// Output JSONL file: a header line with the x axis, then one line per frame
    #[arg(long, default_value = "frames.jsonl")]
    out: PathBuf,

    /// Number of frames to write
    #[arg(long, default_value_t = 200)]
    frames: usize,

    /// Solver steps between frames
    #[arg(long, default_value_t = 1)]
    steps_per_frame: usize,

    #[command(subcommand)]
    physics: Physics,
}

#[derive(Subcommand, Debug)]
enum Physics {
    /// Diffusing rod
    Heat(HeatArgs),
    /// Damped plucked string
    Wave(WaveArgs),
}

#[derive(Serialize)]
struct Header<'a> {
    physics: &'a str,
    n: usize,
    dt: f64,
    steps_per_frame: usize,
    x: &'a [f64],
}

pub fn execute(args: FramesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(File::create(&args.out)?);

    match &args.physics {
        Physics::Heat(heat) => {
            let mut sim = HeatSolver::new(&heat.resolve()?)?;
            let dt = sim.dt();
            write_frames(&mut out, "heat", dt, &mut sim, &args)?;
        }
        Physics::Wave(wave) => {
            let mut sim = WaveSolver::new(&wave.resolve()?)?;
            let dt = sim.dt();
            write_frames(&mut out, "wave", dt, &mut sim, &args)?;
        }
    }

    out.flush()?;
    info!(frames = args.frames, "wrote frames to {}", args.out.display());
    Ok(())
}

fn write_frames<W: Write, S: Simulation>(
    out: &mut W,
    physics: &str,
    dt: f64,
    sim: &mut S,
    args: &FramesArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let header = Header {
        physics,
        n: sim.positions().len(),
        dt,
        steps_per_frame: args.steps_per_frame,
        x: sim.positions(),
    };
    serde_json::to_writer(&mut *out, &header)?;
    out.write_all(b"\n")?;

    for frame in FrameDriver::new(sim, args.steps_per_frame).with_limit(args.frames) {
        serde_json::to_writer(&mut *out, &frame)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
