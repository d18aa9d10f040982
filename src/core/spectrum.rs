use super::constants::{MAX_FFT_SIZE, MIN_FFT_SIZE};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectrumError {
    #[error("fft size {0} must be a power of two in [{min}, {max}]", min = MIN_FFT_SIZE, max = MAX_FFT_SIZE)]
    InvalidFftSize(u32),
}

/// Number of frequency bins an analyser with `fft_size` produces.
pub fn bins_for_fft_size(fft_size: u32) -> Result<usize, SpectrumError> {
    if !fft_size.is_power_of_two() || !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&fft_size) {
        return Err(SpectrumError::InvalidFftSize(fft_size));
    }
    Ok((fft_size / 2) as usize)
}

/// Next transform size up or down, or `None` at the edge of the valid range.
pub fn step_fft_size(current: u32, up: bool) -> Option<u32> {
    let next = if up {
        current.checked_mul(2)?
    } else {
        current / 2
    };
    bins_for_fft_size(next).ok().map(|_| next)
}

/// One frame of per-bin byte magnitudes, overwritten in place every tick.
#[derive(Debug, Clone, Default)]
pub struct FrequencySnapshot {
    bins: Vec<u8>,
}

impl FrequencySnapshot {
    pub fn new(bin_count: usize) -> Self {
        Self {
            bins: vec![0; bin_count],
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Resize for a new bin count; contents are zeroed.
    pub fn resize(&mut self, bin_count: usize) {
        self.bins.clear();
        self.bins.resize(bin_count, 0);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bins
    }
}

/// Producer of frequency snapshots (the analyser in the browser).
pub trait AudioSource {
    /// Refresh and return the current snapshot. Read-only to callers.
    fn current_frequency_snapshot(&mut self) -> &[u8];
}
