// src/main.rs
mod config;
mod dataset;
mod gui;
use std::path::PathBuf;
use anyhow::{bail, Context};
use clap::Parser;
use log::{error, info};
use crate::config::PlotConfig;
use crate::dataset::{
    write_plot_set_png, DirectorySource, PlotPipeline, PlotSet, WindowMode, WindowSelection,
    XLimit,
};
const DEFAULT_SIGNAL: &str = "sin01";
/// Plots precomputed signals and their FFT results.
#[derive(Parser, Debug)]
#[command(name = "fftview", version)]
struct Cli {
    /// Signal names, e.g. `sin01 sin02`; each reads `<dir>/<name>.txt` and its fft files.
    names: Vec<String>,
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the signal and fft text files.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Directory the PNG plots are written to.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Sampling rate in Hz.
    #[arg(long)]
    rate: Option<f64>,
    /// Recording length in seconds.
    #[arg(long, conflicts_with = "derive_length")]
    length: Option<f64>,
    /// Derive the recording length from sample count and rate.
    #[arg(long)]
    derive_length: bool,
    /// Frequency rows to keep: all, drop-last, nyquist or a row count.
    #[arg(long)]
    x_limit: Option<XLimit>,
    /// Skip the moving-window average panel.
    #[arg(long)]
    no_windows: bool,
    /// Include the zero-padded last window in the average.
    #[arg(long)]
    all_windows: bool,
    /// Open an interactive window after rendering.
    #[arg(long)]
    show: bool,
    /// Do not write PNG files.
    #[arg(long)]
    no_png: bool,
}
impl Cli {
    fn resolve_config(&self) -> anyhow::Result<PlotConfig> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => PlotConfig::default(),
        };
        if let Some(dir) = &self.dir {
            config.signals_dir = dir.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if let Some(rate) = self.rate {
            config.sampling_rate_hz = rate;
        }
        if let Some(length) = self.length {
            config.sampling_length_s = Some(length);
        }
        if self.derive_length {
            config.sampling_length_s = None;
        }
        if let Some(limit) = self.x_limit {
            config.x_limit = limit;
        }
        if self.no_windows {
            config.windows = WindowMode::Off;
        }
        if self.all_windows {
            config.window_selection = WindowSelection::All;
        }
        config.validate()?;
        Ok(config)
    }
    fn signal_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            vec![DEFAULT_SIGNAL.to_owned()]
        } else {
            self.names.clone()
        }
    }
}
/// Plots every requested name; a failing name is logged and skipped.
fn run(cli: &Cli) -> anyhow::Result<Vec<PlotSet>> {
    let config = cli.resolve_config()?;
    let style = config.plot_style();
    let mut pipeline = PlotPipeline::new(
        DirectorySource::new(&config.signals_dir),
        config.pipeline_options()?,
    );
    let mut plotted = Vec::new();
    for name in cli.signal_names() {
        let set = match pipeline.build(&name) {
            Ok(set) => set,
            Err(err) => {
                error!("{name}: {err}");
                continue;
            }
        };
        if !cli.no_png {
            if let Err(err) = write_plot_set_png(&set, &style, &config.output_dir) {
                error!("{name}: {err}");
                continue;
            }
        }
        plotted.push(set);
    }
    if plotted.is_empty() {
        bail!(
            "no signal could be plotted from {}",
            config.signals_dir.display()
        );
    }
    info!("plotted {} signal(s)", plotted.len());
    Ok(plotted)
}
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let plotted = run(&cli)?;
    if cli.show {
        gui::show(plotted)?;
    }
    Ok(())
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    #[test]
    fn defaults_to_sin01() {
        let cli = Cli::parse_from(["fftview"]);
        assert_eq!(cli.signal_names(), vec!["sin01".to_owned()]);
        assert_eq!(cli.resolve_config().unwrap(), PlotConfig::default());
    }
    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fftview.json");
        fs::write(
            &path,
            r#"{ "sampling_rate_hz": 3000.0, "x_limit": "all", "signals_dir": "data" }"#,
        )
        .unwrap();
        let cli = Cli::parse_from([
            "fftview",
            "--config",
            path.to_str().unwrap(),
            "--x-limit",
            "nyquist",
            "--derive-length",
            "--no-windows",
            "smenete_1",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.sampling_rate_hz, 3000.0);
        assert_eq!(config.signals_dir, PathBuf::from("data"));
        assert_eq!(config.x_limit, XLimit::Nyquist);
        assert_eq!(config.sampling_length_s, None);
        assert_eq!(config.windows, WindowMode::Off);
        assert_eq!(cli.signal_names(), vec!["smenete_1".to_owned()]);
    }
    #[test]
    fn invalid_rate_is_rejected() {
        let cli = Cli::parse_from(["fftview", "--rate", "0"]);
        assert!(cli.resolve_config().is_err());
    }
    #[test]
    fn length_conflicts_with_derive_length() {
        assert!(Cli::try_parse_from(["fftview", "--length", "4", "--derive-length"]).is_err());
    }
    fn write_sin800(dir: &std::path::Path) {
        let signal: String = (0..400).map(|i| format!("{}\n", (i as f64 * 0.5).sin())).collect();
        fs::write(dir.join("sin800.txt"), signal).unwrap();
        let fft: String = std::iter::once("xaxis_fq\tfull_sig\n".to_owned())
            .chain((0..64).map(|k| format!("{:.6}\t{:.6}\n", k as f64 * 0.15, 1.0 / (k + 1) as f64)))
            .collect();
        fs::write(dir.join("sin800_fft.txt"), fft).unwrap();
    }
    #[test]
    fn run_skips_missing_names_and_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        write_sin800(dir.path());
        let out = dir.path().join("out");
        let cli = Cli::parse_from([
            "fftview",
            "--dir",
            dir.path().to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--length",
            "4",
            "missing",
            "sin800",
        ]);
        let plotted = run(&cli).unwrap();
        assert_eq!(plotted.len(), 1);
        assert_eq!(plotted[0].name, "sin800");
        assert_eq!(plotted[0].panels.len(), 2);
        assert!(out.join("sin800_plots.png").exists());
        assert!(!out.join("missing_plots.png").exists());
    }
    #[test]
    fn run_fails_when_nothing_is_plotted() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "fftview",
            "--dir",
            dir.path().to_str().unwrap(),
            "--no-png",
            "sin01",
            "sin02",
        ]);
        assert!(run(&cli).is_err());
    }
}
