use std::fmt;
use std::str::FromStr;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::dataset::{NumericTable, PlotError, Sampling};
/// How many leading frequency rows are kept for plotting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XLimit {
    All,
    /// Every row but the last one.
    #[default]
    DropLast,
    /// First half of the rows.
    Nyquist,
    Bins(usize),
}
impl XLimit {
    pub fn row_count(&self, rows: usize) -> usize {
        match *self {
            XLimit::All => rows,
            XLimit::DropLast => rows.saturating_sub(1),
            XLimit::Nyquist => nyquist_index(rows),
            XLimit::Bins(n) => n.min(rows),
        }
    }
}
impl FromStr for XLimit {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(XLimit::All),
            "drop-last" => Ok(XLimit::DropLast),
            "nyquist" => Ok(XLimit::Nyquist),
            other => other.parse::<usize>().map(XLimit::Bins).map_err(|_| {
                format!("expected all, drop-last, nyquist or a row count, got `{other}`")
            }),
        }
    }
}
impl fmt::Display for XLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XLimit::All => f.write_str("all"),
            XLimit::DropLast => f.write_str("drop-last"),
            XLimit::Nyquist => f.write_str("nyquist"),
            XLimit::Bins(n) => write!(f, "{n}"),
        }
    }
}
/// Row index of half the sampling rate in a spectrum of `rows` bins.
pub fn nyquist_index(rows: usize) -> usize {
    rows / 2
}
/// Energy per frequency bin, ascending by frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub frequencies_hz: Vec<f64>,
    pub energy: Vec<f64>,
}
impl Spectrum {
    pub fn new(frequencies_hz: Vec<f64>, energy: Vec<f64>) -> Result<Self, PlotError> {
        if frequencies_hz.len() != energy.len() {
            return Err(PlotError::RaggedColumns {
                line: frequencies_hz.len().min(energy.len()) + 1,
                expected: frequencies_hz.len(),
                actual: energy.len(),
            });
        }
        if frequencies_hz.is_empty() {
            return Err(PlotError::EmptySpectrum);
        }
        Ok(Self {
            frequencies_hz,
            energy,
        })
    }
    /// Reads a `<name>_fft.txt` table. Two or more columns give frequency and
    /// energy directly; a single column holds energy only and the frequency axis
    /// is spread evenly up to Nyquist.
    pub fn from_table(table: &NumericTable, sampling: Sampling) -> Result<Self, PlotError> {
        if table.is_empty() {
            return Err(PlotError::EmptySpectrum);
        }
        match (table.min_width(), table.max_width()) {
            (1, 1) => {
                let rows = table.len();
                let step = sampling.nyquist_hz() / rows as f64;
                debug!("single-column fft, deriving {rows} bins of {step} Hz");
                let frequencies = (0..rows).map(|k| step * k as f64).collect();
                Self::new(frequencies, table.column(0))
            }
            (min, _) if min >= 2 => Self::new(table.column(0), table.column(1)),
            _ => Err(PlotError::MixedLayout),
        }
    }
    pub fn len(&self) -> usize {
        self.energy.len()
    }
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }
    pub fn slice(&self, limit: XLimit) -> Spectrum {
        let keep = limit.row_count(self.len());
        Spectrum {
            frequencies_hz: self.frequencies_hz[..keep].to_vec(),
            energy: self.energy[..keep].to_vec(),
        }
    }
    /// Frequency and energy of the strongest bin.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies_hz
            .iter()
            .copied()
            .zip(self.energy.iter().copied())
            .fold(None, |best: Option<(f64, f64)>, (f, e)| match best {
                Some((_, be)) if be >= e => best,
                _ => Some((f, e)),
            })
    }
}
