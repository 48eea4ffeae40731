use solver_core::Recording;
use std::fs::File;
use std::path::Path;
use wav::{BitDepth, Header};

/// Writes a mono 32-bit float WAV at the recording's sample rate.
pub fn save_wav(path: &Path, recording: &Recording) -> std::io::Result<()> {
    let samples: Vec<f32> = recording.samples.iter().map(|&s| s as f32).collect();
    let header = Header::new(wav::WAV_FORMAT_IEEE_FLOAT, 1, recording.sample_rate, 32);
    let mut file = File::create(path)?;
    wav::write(header, &BitDepth::ThirtyTwoFloat(samples), &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_mono_float_wav_at_the_recording_rate() {
        let recording = Recording {
            samples: vec![-1.0, -0.5, 0.0, 0.5, 1.0, 0.25],
            sample_rate: 159_348,
        };
        let path = std::env::temp_dir().join(format!("{}-mono.wav", std::process::id()));
        save_wav(&path, &recording).unwrap();

        let mut file = File::open(&path).unwrap();
        let (header, data) = wav::read(&mut file).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(header.channel_count, 1);
        assert_eq!(header.sampling_rate, 159_348);
        assert_eq!(header.bits_per_sample, 32);
        match data {
            BitDepth::ThirtyTwoFloat(samples) => {
                assert_eq!(samples, vec![-1.0f32, -0.5, 0.0, 0.5, 1.0, 0.25]);
            }
            _ => panic!("expected 32-bit float samples"),
        }
    }
}
