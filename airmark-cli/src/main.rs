use clap::{Parser, Subcommand};
use std::path::PathBuf;

use airmark_core::{Error, KeyMaterial, WatermarkConfig};

/// Default passphrases of the original application, kept so audio
/// watermarked by it stays extractable. Override both for anything real.
const DEFAULT_KEY_PHRASE: &str = "Aplikasi Watermarking Audio";
const DEFAULT_IV_PHRASE: &str = "Inisialisasi Vektor";

#[derive(Parser)]
#[command(name = "airmark", about = "DWT audio watermarking tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed a text watermark into a WAV file
    Embed {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV file (32-bit float)
        #[arg(short, long)]
        output: PathBuf,

        /// Watermark text (up to 100 characters)
        #[arg(short, long)]
        text: String,

        /// Embedding intensity (0.01 - 0.10)
        #[arg(short, long, default_value = "0.05")]
        alpha: f32,

        /// Encryption key passphrase
        #[arg(long, default_value = DEFAULT_KEY_PHRASE)]
        key_phrase: String,

        /// Initialization vector passphrase
        #[arg(long, default_value = DEFAULT_IV_PHRASE)]
        iv_phrase: String,
    },
    /// Extract a text watermark from a WAV file
    Extract {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Encryption key passphrase
        #[arg(long, default_value = DEFAULT_KEY_PHRASE)]
        key_phrase: String,

        /// Initialization vector passphrase
        #[arg(long, default_value = DEFAULT_IV_PHRASE)]
        iv_phrase: String,
    },
}

/// Read a WAV file as mono f32 samples, folding multichannel input down to
/// its first channel.
fn read_wav(path: &PathBuf) -> Result<(Vec<f32>, hound::WavSpec), Box<dyn std::error::Error>> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        eprintln!(
            "Warning: input has {} channels, only the first channel will be used.",
            spec.channels
        );
    }

    let mut samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()?,
        hound::SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max = (1i32 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .collect::<Result<Vec<i32>, _>>()?
                .into_iter()
                .map(|s| s as f32 / max)
                .collect()
        }
    };

    if spec.channels > 1 {
        samples = samples
            .chunks(spec.channels as usize)
            .map(|c| c[0])
            .collect();
    }

    Ok((samples, spec))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Embed {
            input,
            output,
            text,
            alpha,
            key_phrase,
            iv_phrase,
        } => {
            if !(0.01..=0.10).contains(&alpha) {
                eprintln!(
                    "Warning: alpha {alpha} is outside the intended range [0.01, 0.10]."
                );
            }

            let (samples, spec) = read_wav(&input)?;
            let key = KeyMaterial::from_passphrases(&key_phrase, &iv_phrase);
            let config = WatermarkConfig {
                sample_rate: spec.sample_rate,
                alpha,
            };

            // Payload bits available = one per detail coefficient.
            let ciphertext_bits = (text.len() / 16 + 1) * 16 * 8;
            let capacity = samples.len().div_ceil(2);
            if capacity < ciphertext_bits {
                eprintln!(
                    "Warning: audio holds only {capacity} of {ciphertext_bits} payload bits; extraction will fail."
                );
            }

            eprintln!(
                "Embedding watermark into {} ({} samples, {}Hz)...",
                input.display(),
                samples.len(),
                spec.sample_rate
            );

            let marked = airmark_core::embed(&samples, &text, &key, &config)?;

            let out_spec = hound::WavSpec {
                channels: 1,
                sample_rate: spec.sample_rate,
                bits_per_sample: 32,
                sample_format: hound::SampleFormat::Float,
            };
            let mut writer = hound::WavWriter::create(&output, out_spec)?;
            for &s in &marked {
                writer.write_sample(s)?;
            }
            writer.finalize()?;

            eprintln!("Watermarked audio written to {}", output.display());
        }
        Command::Extract {
            input,
            key_phrase,
            iv_phrase,
        } => {
            let (samples, spec) = read_wav(&input)?;
            let key = KeyMaterial::from_passphrases(&key_phrase, &iv_phrase);

            eprintln!(
                "Extracting watermark from {} ({} samples, {}Hz)...",
                input.display(),
                samples.len(),
                spec.sample_rate
            );

            match airmark_core::extract(&samples, &key) {
                Ok(text) => {
                    println!("{text}");
                }
                Err(e @ Error::InvalidPadding) => {
                    eprintln!("No watermark found: absent or corrupted ({}).", e.kind());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Extraction failed ({}): {e}", e.kind());
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
