use log::debug;
use ndarray::{s, Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use crate::dataset::{NumericTable, PlotError, Spectrum, XLimit};
/// Which window columns go into the average.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowSelection {
    All,
    /// Leave out the last window, which the producer zero-pads.
    #[default]
    DropLast,
}
/// Per-window FFT energies, one row per frequency bin and one column per window.
#[derive(Clone, Debug)]
pub struct WindowedSpectrum {
    pub frequencies_hz: Array1<f64>,
    pub energies: Array2<f64>,
}
impl WindowedSpectrum {
    /// Reads `<name>_fft_only_windows.txt`: frequency followed by one column per window.
    pub fn from_table(table: &NumericTable) -> Result<Self, PlotError> {
        let offset = usize::from(!table.header.is_empty());
        Self::from_rows(table.rows.iter().map(|r| r.as_slice()), offset)
    }
    /// Extracts the window block of a combined `<name>_fft.txt`, where columns
    /// 2.. of the leading rows repeat the window layout.
    pub fn from_combined(table: &NumericTable) -> Result<Option<Self>, PlotError> {
        if table.max_width() < 4 {
            return Ok(None);
        }
        let rows = table
            .rows
            .iter()
            .take_while(|r| r.len() >= 4)
            .map(|r| &r[2..]);
        let offset = usize::from(!table.header.is_empty());
        Self::from_rows(rows, offset).map(Some)
    }
    fn from_rows<'a>(
        rows: impl Iterator<Item = &'a [f64]>,
        header_lines: usize,
    ) -> Result<Self, PlotError> {
        let mut width = None;
        let mut frequencies = Vec::new();
        let mut values = Vec::new();
        for (idx, row) in rows.enumerate() {
            let expected = *width.get_or_insert(row.len());
            if expected < 2 {
                return Err(PlotError::NoWindows);
            }
            if row.len() != expected {
                return Err(PlotError::RaggedColumns {
                    line: header_lines + idx + 1,
                    expected,
                    actual: row.len(),
                });
            }
            frequencies.push(row[0]);
            values.extend_from_slice(&row[1..]);
        }
        let width = width.ok_or(PlotError::EmptySpectrum)?;
        let energies = Array2::from_shape_vec((frequencies.len(), width - 1), values)
            .map_err(|e| PlotError::Plot(e.to_string()))?;
        Ok(Self {
            frequencies_hz: Array1::from(frequencies),
            energies,
        })
    }
    pub fn num_bins(&self) -> usize {
        self.energies.nrows()
    }
    pub fn num_windows(&self) -> usize {
        self.energies.ncols()
    }
    /// Mean energy across the selected windows for every kept frequency row.
    pub fn average(&self, limit: XLimit, selection: WindowSelection) -> Result<Spectrum, PlotError> {
        let rows = limit.row_count(self.num_bins());
        let cols = match selection {
            WindowSelection::All => self.num_windows(),
            WindowSelection::DropLast => self.num_windows().saturating_sub(1),
        };
        debug!("averaging {cols} of {} windows over {rows} bins", self.num_windows());
        let block = self.energies.slice(s![..rows, ..cols]);
        let mean = block.mean_axis(Axis(1)).ok_or(PlotError::NoWindows)?;
        Spectrum::new(
            self.frequencies_hz.slice(s![..rows]).to_vec(),
            mean.to_vec(),
        )
    }
}
