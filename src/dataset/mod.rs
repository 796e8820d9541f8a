// src/dataset/mod.rs
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod signal;
pub mod source;
pub mod spectrum;
pub mod table;
pub mod windows;
pub use error::PlotError;
pub use pipeline::{PipelineOptions, PlotPipeline, PlotSet, WindowMode};
pub use plot::{write_plot_set_png, PlotStyle};
pub use signal::{Sampling, Signal};
pub use source::DirectorySource;
pub use spectrum::{Spectrum, XLimit};
pub use table::NumericTable;
pub use windows::WindowSelection;
