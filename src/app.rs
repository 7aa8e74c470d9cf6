//! Viewer application: signal list, Ok/Cancel, and the plotted selection.

use eframe::egui;
use egui::{Color32, RichText};

use crate::extract::Extraction;
use crate::plot::render_step_plots;
use crate::selection::SelectionSet;

// Row colors for the signal list. Selected rows are white on green,
// deselected rows black on white.
const SELECTED_FG: Color32 = Color32::WHITE;
const SELECTED_BG: Color32 = Color32::from_rgb(0, 128, 0);
const DESELECTED_FG: Color32 = Color32::BLACK;
const DESELECTED_BG: Color32 = Color32::WHITE;

/// The viewer window: a toggleable signal list on the left, Ok/Cancel at the
/// bottom, and the step plots of the confirmed selection in the center.
pub struct ViewerApp {
    extraction: Extraction,
    selection: SelectionSet,
    /// Selection snapshotted on Ok, in extraction key order.
    /// `None` until the user confirms for the first time.
    plotted: Option<Vec<String>>,
}

impl ViewerApp {
    pub fn new(extraction: Extraction) -> Self {
        Self {
            extraction,
            selection: SelectionSet::new(),
            plotted: None,
        }
    }

    /// Snapshot the current selection for plotting, preserving the
    /// first-encounter order of the extraction keys.
    fn confirm(&mut self) {
        let chosen: Vec<String> = self
            .extraction
            .names()
            .filter(|name| self.selection.contains(name))
            .map(str::to_string)
            .collect();
        self.plotted = Some(chosen);
    }

    fn signal_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Select Signals");
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for name in self.extraction.names() {
                    let selected = self.selection.contains(name);
                    let (fg, bg) = if selected {
                        (SELECTED_FG, SELECTED_BG)
                    } else {
                        (DESELECTED_FG, DESELECTED_BG)
                    };
                    let row = egui::Button::new(RichText::new(name).color(fg))
                        .fill(bg)
                        .min_size(egui::vec2(ui.available_width(), 0.0));
                    if ui.add(row).clicked() {
                        self.selection.toggle(name);
                    }
                }
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("confirm_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{} Ok", egui_phosphor::regular::CHECK))
                    .clicked()
                {
                    self.confirm();
                }
                if ui
                    .button(format!("{} Cancel", egui_phosphor::regular::X))
                    .clicked()
                {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
                ui.label(format!("{} selected", self.selection.len()));
            });
        });

        egui::SidePanel::left("signal_list")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.signal_list(ui));

        egui::CentralPanel::default().show(ctx, |ui| match &self.plotted {
            Some(names) if !names.is_empty() => {
                render_step_plots(ui, &self.extraction, names);
            }
            Some(_) => {
                ui.label("No signals selected.");
            }
            None => {
                ui.label("Click signal names to select them, then press Ok to plot.");
            }
        });
    }
}
