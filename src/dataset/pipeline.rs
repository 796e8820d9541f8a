use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use crate::dataset::error::PlotError;
use crate::dataset::source::DatasetSource;
use crate::dataset::windows::{WindowSelection, WindowedSpectrum};
use crate::dataset::{NumericTable, Sampling, Signal, Spectrum, XLimit};
pub const SIGNAL_TITLE: &str = "Signal";
pub const FULL_FFT_TITLE: &str = "FFT on full signal";
pub const WINDOWS_FFT_TITLE: &str = "FFT - moving windows (avg)";
/// Whether the moving-window average panel is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowMode {
    /// Use per-window results when any can be found.
    #[default]
    Auto,
    Off,
}
#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineOptions {
    pub sampling: Sampling,
    pub x_limit: XLimit,
    pub window_mode: WindowMode,
    pub window_selection: WindowSelection,
}
/// One line chart.
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}
impl Panel {
    pub fn from_spectrum(title: &str, spectrum: &Spectrum) -> Self {
        Self {
            title: title.to_owned(),
            x_label: "Frequency (Hz)".to_owned(),
            y_label: "Energy".to_owned(),
            xs: spectrum.frequencies_hz.clone(),
            ys: spectrum.energy.clone(),
        }
    }
    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.xs)
    }
    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.ys)
    }
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
/// Panels for one signal, top to bottom.
#[derive(Clone, Debug)]
pub struct PlotSet {
    pub name: String,
    pub panels: Vec<Panel>,
}
/// Loads the files of a named signal and turns them into ready-to-plot panels.
pub struct PlotPipeline<S: DatasetSource> {
    source: S,
    options: PipelineOptions,
}
impl<S: DatasetSource> PlotPipeline<S> {
    pub fn new(source: S, options: PipelineOptions) -> Self {
        Self { source, options }
    }
    pub fn build(&mut self, name: &str) -> Result<PlotSet, PlotError> {
        let signal = Signal::from_table(&self.source.read_signal(name)?, self.options.sampling)?;
        let (lo, hi) = signal.amplitude_range();
        info!(
            "{name}: {} samples over {:.3} s, amplitude {lo:.3}..{hi:.3}",
            signal.len(),
            signal.duration_seconds()
        );
        let fft_table = self.source.read_fft(name)?;
        let full = Spectrum::from_table(&fft_table, self.options.sampling)?;
        let full = full.slice(self.options.x_limit);
        if let Some((freq, energy)) = full.peak() {
            info!("{name}: full-signal peak {energy:.6} at {freq:.2} Hz");
        }
        let mut panels = vec![
            Panel {
                title: SIGNAL_TITLE.to_owned(),
                x_label: "Time (s)".to_owned(),
                y_label: "Amplitude".to_owned(),
                xs: signal.time_axis(),
                ys: signal.samples,
            },
            Panel::from_spectrum(FULL_FFT_TITLE, &full),
        ];
        if self.options.window_mode == WindowMode::Auto {
            match self.load_windows(name, &fft_table)? {
                Some(windowed) => {
                    match windowed.average(self.options.x_limit, self.options.window_selection) {
                        Ok(avg) => {
                            debug!(
                                "{name}: averaged {} windows into {} bins",
                                windowed.num_windows(),
                                avg.len()
                            );
                            panels.push(Panel::from_spectrum(WINDOWS_FFT_TITLE, &avg));
                        }
                        Err(err) => warn!(
                            "{name}: cannot average windows ({err}), plotting signal and full FFT only"
                        ),
                    }
                }
                None => warn!("{name}: no per-window results, plotting signal and full FFT only"),
            }
        }
        Ok(PlotSet {
            name: name.to_owned(),
            panels,
        })
    }
    fn load_windows(
        &mut self,
        name: &str,
        fft_table: &NumericTable,
    ) -> Result<Option<WindowedSpectrum>, PlotError> {
        if let Some(table) = self.source.read_windows(name)? {
            return WindowedSpectrum::from_table(&table).map(Some);
        }
        let combined = WindowedSpectrum::from_combined(fft_table)?;
        if combined.is_some() {
            debug!("{name}: using window columns of the combined fft file");
        }
        Ok(combined)
    }
}
