use std::fs;
use std::io::Cursor;
use std::ops::Range;
use std::path::{Path, PathBuf};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use log::info;
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::dataset::error::PlotError;
use crate::dataset::pipeline::{Panel, PlotSet};
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    /// Height of each stacked panel.
    pub panel_height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            panel_height: 320,
            background: RGBColor(10, 10, 10),
            palette: vec![CYAN, YELLOW, MAGENTA, GREEN, BLUE, RED, WHITE],
        }
    }
}
/// Largest RGB buffer a render may allocate.
pub const MAX_IMAGE_BYTES: usize = 512 * 1024 * 1024;
impl PlotStyle {
    pub fn image_height(&self, panels: usize) -> Result<u32, PlotError> {
        u32::try_from(panels.max(1))
            .ok()
            .and_then(|n| self.panel_height.checked_mul(n))
            .ok_or_else(|| self.too_large(panels))
    }
    /// Height and RGB buffer length for `panels` stacked panels.
    pub fn buffer_size(&self, panels: usize) -> Result<(u32, usize), PlotError> {
        let height = self.image_height(panels)?;
        let len = (self.width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3))
            .filter(|&len| len <= MAX_IMAGE_BYTES)
            .ok_or_else(|| self.too_large(panels))?;
        Ok((height, len))
    }
    fn too_large(&self, panels: usize) -> PlotError {
        PlotError::Plot(format!(
            "image of {panels} panels at {}x{} is too large",
            self.width, self.panel_height
        ))
    }
}
/// Renders every panel of `set` stacked top to bottom into one PNG.
pub fn render_plot_set_png(set: &PlotSet, style: &PlotStyle) -> Result<Vec<u8>, PlotError> {
    if set.panels.is_empty() {
        return Err(PlotError::Plot(format!("{} has no panels", set.name)));
    }
    if style.palette.is_empty() {
        return Err(PlotError::Plot("plot palette is empty".into()));
    }
    let (height, len) = style.buffer_size(set.panels.len())?;
    let mut buffer = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let areas = root.split_evenly((set.panels.len(), 1));
        for (idx, (panel, area)) in set.panels.iter().zip(areas.iter()).enumerate() {
            let color = style.palette[idx % style.palette.len()];
            draw_panel(area, panel, color)?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, height)
}
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    panel: &Panel,
    color: RGBColor,
) -> Result<(), PlotError>
where
    DB::ErrorType: 'static,
{
    let (x_lo, x_hi) = panel.x_range();
    let (y_lo, y_hi) = panel.y_range();
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(
            panel.title.as_str(),
            ("sans-serif", 18).into_font().color(&WHITE),
        )
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(padded(x_lo, x_hi, 0.0), padded(y_lo, y_hi, 0.05))?;
    chart
        .configure_mesh()
        .light_line_style(&WHITE.mix(0.1))
        .bold_line_style(&WHITE.mix(0.2))
        .axis_style(&WHITE.mix(0.6))
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 14).into_font().color(&WHITE))
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;
    chart.draw_series(LineSeries::new(panel.points(), &color))?;
    Ok(())
}
/// Axis range around `[lo, hi]`, widened when the data is flat or missing.
fn padded(lo: f64, hi: f64, margin: f64) -> Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    (lo - span * margin)..(hi + span * margin)
}
/// Writes `<dir>/<name>_plots.png` and returns its path.
pub fn write_plot_set_png(
    set: &PlotSet,
    style: &PlotStyle,
    dir: &Path,
) -> Result<PathBuf, PlotError> {
    let png = render_plot_set_png(set, style)?;
    fs::create_dir_all(dir).map_err(|source| PlotError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("{}_plots.png", set.name));
    fs::write(&path, png).map_err(|source| PlotError::Io {
        path: path.clone(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(path)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PlotError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| PlotError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    fn flat_set() -> PlotSet {
        PlotSet {
            name: "silence".into(),
            panels: vec![Panel {
                title: "Signal".into(),
                x_label: "Time (s)".into(),
                y_label: "Amplitude".into(),
                xs: vec![0.0, 0.5, 1.0],
                ys: vec![0.0, 0.0, 0.0],
            }],
        }
    }
    #[test]
    fn flat_data_still_renders() {
        let png = render_plot_set_png(&flat_set(), &PlotStyle::default()).unwrap();
        assert!(!png.is_empty());
    }
    #[test]
    fn empty_set_is_rejected() {
        let set = PlotSet {
            name: "none".into(),
            panels: Vec::new(),
        };
        assert!(matches!(
            render_plot_set_png(&set, &PlotStyle::default()),
            Err(PlotError::Plot(_))
        ));
    }
    #[test]
    fn png_is_written_under_signal_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");
        let path = write_plot_set_png(&flat_set(), &PlotStyle::default(), &out).unwrap();
        assert_eq!(path, out.join("silence_plots.png"));
        assert!(path.exists());
    }
    #[test]
    fn oversized_style_is_an_error() {
        let mut set = flat_set();
        set.panels = vec![set.panels[0].clone(); 3];
        let style = PlotStyle {
            width: 40_000,
            panel_height: 20_000,
            ..PlotStyle::default()
        };
        assert!(matches!(
            render_plot_set_png(&set, &style),
            Err(PlotError::Plot(_))
        ));
        let tall = PlotStyle {
            panel_height: u32::MAX,
            ..PlotStyle::default()
        };
        assert!(tall.image_height(2).is_err());
        assert_eq!(PlotStyle::default().buffer_size(3).unwrap(), (960, 1200 * 960 * 3));
    }
    #[test]
    fn padding_handles_degenerate_ranges() {
        assert_eq!(padded(2.0, 2.0, 0.1), 1.0..3.0);
        assert_eq!(padded(f64::INFINITY, f64::NEG_INFINITY, 0.1), 0.0..1.0);
        assert_eq!(padded(0.0, 10.0, 0.0), 0.0..10.0);
    }
}
