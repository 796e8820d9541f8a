// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::dataset::{
    PipelineOptions, PlotError, PlotStyle, Sampling, WindowMode, WindowSelection, XLimit,
};
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub signals_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sampling_rate_hz: f64,
    /// `None` derives the length from sample count and rate.
    pub sampling_length_s: Option<f64>,
    pub x_limit: XLimit,
    pub windows: WindowMode,
    pub window_selection: WindowSelection,
    pub width: u32,
    pub panel_height: u32,
}
impl Default for PlotConfig {
    fn default() -> Self {
        let sampling = Sampling::default();
        Self {
            signals_dir: PathBuf::from("./signals"),
            output_dir: PathBuf::from("./plots"),
            sampling_rate_hz: sampling.rate_hz,
            sampling_length_s: sampling.length_s,
            x_limit: XLimit::default(),
            windows: WindowMode::default(),
            window_selection: WindowSelection::default(),
            width: 1200,
            panel_height: 320,
        }
    }
}
impl PlotConfig {
    pub fn load(path: &Path) -> Result<Self, PlotError> {
        let text = fs::read_to_string(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PlotConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), PlotError> {
        self.sampling()?;
        if self.width == 0 || self.panel_height == 0 {
            return Err(PlotError::Config(format!(
                "image size must be positive, got {}x{}",
                self.width, self.panel_height
            )));
        }
        // three stacked panels is the largest set the pipeline builds
        self.plot_style().buffer_size(3)?;
        Ok(())
    }
    pub fn sampling(&self) -> Result<Sampling, PlotError> {
        Sampling::new(self.sampling_rate_hz, self.sampling_length_s)
    }
    pub fn pipeline_options(&self) -> Result<PipelineOptions, PlotError> {
        Ok(PipelineOptions {
            sampling: self.sampling()?,
            x_limit: self.x_limit,
            window_mode: self.windows,
            window_selection: self.window_selection,
        })
    }
    pub fn plot_style(&self) -> PlotStyle {
        PlotStyle {
            width: self.width,
            panel_height: self.panel_height,
            ..PlotStyle::default()
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PlotConfig = serde_json::from_str(
            r#"{ "sampling_rate_hz": 3000.0, "sampling_length_s": null, "x_limit": "nyquist" }"#,
        )
        .unwrap();
        assert_eq!(config.sampling_rate_hz, 3000.0);
        assert_eq!(config.sampling_length_s, None);
        assert_eq!(config.x_limit, XLimit::Nyquist);
        assert_eq!(config.signals_dir, PathBuf::from("./signals"));
        assert_eq!(config.window_selection, WindowSelection::DropLast);
    }
    #[test]
    fn bins_limit_and_modes_deserialize() {
        let config: PlotConfig = serde_json::from_str(
            r#"{ "x_limit": { "bins": 2048 }, "windows": "off", "window_selection": "all" }"#,
        )
        .unwrap();
        assert_eq!(config.x_limit, XLimit::Bins(2048));
        assert_eq!(config.windows, WindowMode::Off);
        assert_eq!(config.window_selection, WindowSelection::All);
    }
    #[test]
    fn load_rejects_bad_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fftview.json");
        fs::write(&path, r#"{ "sampling_rate_hz": 0 }"#).unwrap();
        assert!(matches!(
            PlotConfig::load(&path),
            Err(PlotError::InvalidSampleRate)
        ));
    }
    #[test]
    fn oversized_image_is_rejected() {
        let config: PlotConfig =
            serde_json::from_str(r#"{ "width": 40000, "panel_height": 20000 }"#).unwrap();
        assert!(matches!(config.validate(), Err(PlotError::Plot(_))));
    }
    #[test]
    fn default_config_matches_test_signals() {
        let options = PlotConfig::default().pipeline_options().unwrap();
        assert_eq!(options.sampling.rate_hz, 10_000.0);
        assert_eq!(options.sampling.length_s, Some(6.5));
        assert_eq!(options.x_limit, XLimit::DropLast);
    }
}
