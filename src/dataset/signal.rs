use crate::dataset::{NumericTable, PlotError};
/// Sampling parameters the upstream producer used for a signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampling {
    pub rate_hz: f64,
    /// Recording length in seconds; `None` derives it from the sample count.
    pub length_s: Option<f64>,
}
impl Sampling {
    pub fn new(rate_hz: f64, length_s: Option<f64>) -> Result<Self, PlotError> {
        if !(rate_hz > 0.0) {
            return Err(PlotError::InvalidSampleRate);
        }
        if let Some(len) = length_s {
            if !(len > 0.0) {
                return Err(PlotError::InvalidSamplingLength(len));
            }
        }
        Ok(Self { rate_hz, length_s })
    }
    pub fn nyquist_hz(&self) -> f64 {
        self.rate_hz / 2.0
    }
}
impl Default for Sampling {
    fn default() -> Self {
        // Test signals were recorded at 10 kHz for 6.5 s.
        Self {
            rate_hz: 10_000.0,
            length_s: Some(6.5),
        }
    }
}
/// Time-domain samples loaded from `<name>.txt`.
#[derive(Clone, Debug)]
pub struct Signal {
    pub samples: Vec<f64>,
    pub sampling: Sampling,
}
impl Signal {
    pub fn from_table(table: &NumericTable, sampling: Sampling) -> Result<Self, PlotError> {
        let samples = table.column(0);
        if samples.is_empty() {
            return Err(PlotError::EmptySignal);
        }
        Ok(Self { samples, sampling })
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn duration_seconds(&self) -> f64 {
        self.sampling
            .length_s
            .unwrap_or(self.samples.len() as f64 / self.sampling.rate_hz)
    }
    pub fn time_axis(&self) -> Vec<f64> {
        linspace(0.0, self.duration_seconds(), self.samples.len())
    }
    pub fn amplitude_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
/// `n` evenly spaced points over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut axis: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            axis[n - 1] = stop;
            axis
        }
    }
}
