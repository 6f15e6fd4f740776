use airmark_core::{KeyMaterial, WatermarkConfig};

/// 5-second 440 Hz sine test signal.
fn make_test_audio(num_samples: usize, sample_rate: u32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.5 * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
        })
        .collect()
}

/// Write samples to a WAV file as 32-bit float.
fn write_wav_f32(path: &std::path::Path, samples: &[f32], sample_rate: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("failed to create WAV writer");
    for &s in samples {
        writer.write_sample(s).expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize WAV");
}

/// Read a WAV file back as f32 samples.
fn read_wav_f32(path: &std::path::Path) -> (Vec<f32>, u32) {
    let reader = hound::WavReader::open(path).expect("failed to open WAV");
    let spec = reader.spec();
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.expect("failed to read sample"))
            .collect(),
        hound::SampleFormat::Int => {
            let max = (1i32 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.expect("failed to read sample") as f32 / max)
                .collect()
        }
    };
    (samples, spec.sample_rate)
}

#[test]
fn wav_f32_embed_extract_round_trip() {
    let config = WatermarkConfig::default();
    let key = KeyMaterial::from_passphrases("Aplikasi Watermarking Audio", "Inisialisasi Vektor");

    let num_samples = 44_100 * 5;
    let audio = make_test_audio(num_samples, config.sample_rate);

    let marked = airmark_core::embed(&audio, "Copyright Protected", &key, &config).unwrap();
    assert_eq!(marked.len(), num_samples);

    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let wav_path = dir.path().join("watermarked_f32.wav");

    write_wav_f32(&wav_path, &marked, config.sample_rate);
    let (read_back, sr) = read_wav_f32(&wav_path);
    assert_eq!(sr, config.sample_rate);

    let recovered = airmark_core::extract(&read_back, &key).unwrap();
    assert_eq!(recovered, "Copyright Protected");
}

#[test]
fn watermark_is_inaudible_scale() {
    let config = WatermarkConfig::default();
    let key = KeyMaterial::from_passphrases("quality", "check");

    let audio = make_test_audio(44_100 * 5, config.sample_rate);
    let marked = airmark_core::embed(&audio, "Copyright Protected", &key, &config).unwrap();

    // Perturbation energy is confined to the carrier coefficients and stays
    // far below the signal itself.
    let signal_rms: f32 =
        (audio.iter().map(|s| s * s).sum::<f32>() / audio.len() as f32).sqrt();
    let noise_rms: f32 = (audio
        .iter()
        .zip(marked.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        / audio.len() as f32)
        .sqrt();
    assert!(
        noise_rms < 0.05 * signal_rms,
        "noise {noise_rms} too large vs signal {signal_rms}"
    );
}

#[test]
fn alpha_extremes_round_trip() {
    let key = KeyMaterial::from_passphrases("alpha sweep", "alpha iv");
    let audio = make_test_audio(44_100 * 5, 44_100);

    for alpha in [0.01f32, 0.10] {
        let config = WatermarkConfig {
            alpha,
            ..WatermarkConfig::default()
        };
        let marked = airmark_core::embed(&audio, "Copyright Protected", &key, &config).unwrap();
        assert_eq!(
            airmark_core::extract(&marked, &key).unwrap(),
            "Copyright Protected",
            "round trip failed at alpha = {alpha}"
        );
    }
}

#[test]
fn unicode_payload_round_trip() {
    let config = WatermarkConfig::default();
    let key = KeyMaterial::from_passphrases("unicode", "payloads");
    let audio = make_test_audio(44_100 * 5, config.sample_rate);

    let text = "Hak Cipta Dilindungi © 2026 🎶";
    let marked = airmark_core::embed(&audio, text, &key, &config).unwrap();
    assert_eq!(airmark_core::extract(&marked, &key).unwrap(), text);
}
