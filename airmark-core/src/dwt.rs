use crate::error::{Error, Result};

const INV_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// One-level Haar decomposition of a signal into approximation (`cA`) and
/// detail (`cD`) coefficients.
///
/// `cA[k] = (x[2k] + x[2k+1]) / sqrt(2)`, `cD[k] = (x[2k] - x[2k+1]) / sqrt(2)`,
/// matching the PyWavelets `haar` sign convention. An odd-length input is
/// extended by replicating its final sample once, so both outputs have
/// length `ceil(n / 2)` and the tail pair contributes `cD = 0`.
pub fn forward(signal: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let half = signal.len().div_ceil(2);
    let mut ca = Vec::with_capacity(half);
    let mut cd = Vec::with_capacity(half);

    for pair in signal.chunks(2) {
        let even = pair[0];
        let odd = if pair.len() == 2 { pair[1] } else { pair[0] };
        ca.push((even + odd) * INV_SQRT_2);
        cd.push((even - odd) * INV_SQRT_2);
    }

    (ca, cd)
}

/// One-level inverse Haar transform.
///
/// Exact inverse of [`forward`] for an even-length input; for an odd-length
/// input the reconstruction is one sample longer than the original and the
/// caller truncates via [`fix_length`]. Perturbed `cD` values reconstruct to
/// a full-length signal with the perturbation spread over each sample pair.
pub fn inverse(ca: &[f32], cd: &[f32]) -> Result<Vec<f32>> {
    if ca.len() != cd.len() {
        return Err(Error::TransformLengthMismatch {
            expected: ca.len(),
            got: cd.len(),
        });
    }

    let mut signal = Vec::with_capacity(ca.len() * 2);
    for (&a, &d) in ca.iter().zip(cd.iter()) {
        signal.push((a + d) * INV_SQRT_2);
        signal.push((a - d) * INV_SQRT_2);
    }
    Ok(signal)
}

/// Normalize a reconstructed signal to the original sample count.
///
/// The forward/inverse pair overshoots by exactly one sample for odd-length
/// inputs; that sample is truncated here. A one-sample undershoot is
/// zero-padded. Any larger disagreement means the transform stages were
/// mispaired and is surfaced as an invariant violation rather than patched.
pub fn fix_length(mut samples: Vec<f32>, target: usize) -> Result<Vec<f32>> {
    let got = samples.len();
    if got == target + 1 {
        samples.truncate(target);
    } else if got + 1 == target {
        samples.push(0.0);
    } else if got != target {
        return Err(Error::TransformLengthMismatch {
            expected: target,
            got,
        });
    }
    Ok(samples)
}
