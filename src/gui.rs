// src/gui.rs
use eframe::egui;
use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints};
use crate::dataset::{PlotError, PlotSet};
const PANEL_COLORS: [Color32; 3] = [
    Color32::from_rgb(0, 255, 255),
    Color32::YELLOW,
    Color32::from_rgb(255, 0, 255),
];
pub struct FftViewApp {
    sets: Vec<PlotSet>,
    selected: usize,
}
impl FftViewApp {
    pub fn new(sets: Vec<PlotSet>) -> Self {
        Self { sets, selected: 0 }
    }
    fn select(&mut self, idx: usize) {
        if idx < self.sets.len() {
            self.selected = idx;
        }
    }
}
impl eframe::App for FftViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        if self.sets.len() > 1 {
            let mut clicked = None;
            egui::SidePanel::left("signals").min_width(140.0).show(ctx, |ui| {
                ui.heading("Signals");
                ui.separator();
                for (idx, set) in self.sets.iter().enumerate() {
                    if ui.selectable_label(idx == self.selected, set.name.as_str()).clicked() {
                        clicked = Some(idx);
                    }
                }
            });
            if let Some(idx) = clicked {
                self.select(idx);
            }
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(set) = self.sets.get(self.selected) else {
                ui.label("Nothing to plot.");
                return;
            };
            ui.heading(set.name.as_str());
            let count = set.panels.len().max(1) as f32;
            let height = (ui.available_height() / count - 24.0).max(80.0);
            for (idx, panel) in set.panels.iter().enumerate() {
                ui.label(egui::RichText::new(panel.title.as_str()).strong());
                let points: Vec<[f64; 2]> = panel.points().map(|(x, y)| [x, y]).collect();
                let color = PANEL_COLORS[idx % PANEL_COLORS.len()];
                Plot::new(format!("{}_{idx}", set.name))
                    .height(height)
                    .auto_bounds_x()
                    .auto_bounds_y()
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(PlotPoints::new(points))
                                .name(&panel.title)
                                .color(color),
                        );
                    });
            }
        });
    }
}
/// Opens a window with the stacked panels and blocks until it is closed.
pub fn show(sets: Vec<PlotSet>) -> Result<(), PlotError> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1200.0, 900.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("fftview");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "fftview",
        options,
        Box::new(move |_cc| Box::new(FftViewApp::new(sets))),
    )
    .map_err(|e| PlotError::Display(e.to_string()))
}
