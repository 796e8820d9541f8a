use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected {expected} columns, found {actual}")]
    RaggedColumns {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("sampling length must be greater than zero, got {0}")]
    InvalidSamplingLength(f64),
    #[error("signal file has no samples")]
    EmptySignal,
    #[error("fft file has no rows")]
    EmptySpectrum,
    #[error("fft file has both single-column and multi-column rows")]
    MixedLayout,
    #[error("no window columns selected for averaging")]
    NoWindows,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("viewer failed: {0}")]
    Display(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for PlotError {
    fn from(value: image::ImageError) -> Self {
        PlotError::Plot(value.to_string())
    }
}
impl From<serde_json::Error> for PlotError {
    fn from(value: serde_json::Error) -> Self {
        PlotError::Config(value.to_string())
    }
}
