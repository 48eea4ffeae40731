use crate::audio::save_wav;
use crate::config::WaveArgs;
use clap::Args;
use solver_core::{Recorder, WaveSolver};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Output WAV file
    #[arg(long, default_value = "microphone.wav")]
    out: PathBuf,

    #[command(flatten)]
    wave: WaveArgs,
}

pub fn execute(args: RecordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = args.wave.resolve()?;
    let mut solver = WaveSolver::new(&cfg)?;
    let recorder = Recorder::from_config(&cfg)?;
    let sample_rate = solver.time_step().sample_rate();
    info!(sample_rate, "sampling frequency is {sample_rate} Hz");

    let total = recorder.samples();
    let tick = (total / 10).max(1);
    let recording = recorder.record_normalized(&mut solver, |i| {
        if i > 0 && i % tick == 0 {
            debug!("{}% recorded", i * 100 / total);
        }
        true
    })?;

    save_wav(&args.out, &recording)?;
    info!(
        samples = recording.samples.len(),
        "audio saved to {}",
        args.out.display()
    );
    Ok(())
}
