//! Native egui window for displaying figures.
//!
//! See [`show`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::{Figure, Rgb, Style};

/// Configuration for rendering figures with [`show`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// predprey_plot::show(figures, style, ShowConfig::new().title("Predator-Prey Model").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each named trace.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window with one plot per figure, stacked vertically.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(figures: Vec<Figure>, style: Style, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(visuals(style));
            Ok(Box::new(FigureApp {
                figures,
                legend: config.legend,
            }))
        }),
    )
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Derives egui visuals whose page, plot area and text follow `style`.
fn visuals(style: Style) -> egui::Visuals {
    let mut visuals = if style.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = color(style.background);
    visuals.window_fill = color(style.background);
    visuals.extreme_bg_color = color(style.background);
    visuals.override_text_color = Some(color(style.foreground));
    visuals
}

/// The egui [`eframe::App`] that renders figures.
struct FigureApp {
    figures: Vec<Figure>,
    legend: bool,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let slots = self.figures.len().max(1) as f32;
            // Leave room for each figure's heading.
            let height = (ui.available_height() / slots - 32.0).max(120.0);

            for (index, figure) in self.figures.iter().enumerate() {
                ui.heading(figure.title());

                let mut plot = Plot::new(("figure", index))
                    .height(height)
                    .x_axis_label(figure.x_axis())
                    .y_axis_label(figure.y_axis());
                if self.legend {
                    plot = plot.legend(Legend::default());
                }

                plot.show(ui, |plot_ui| {
                    for trace in figure.traces() {
                        let points: PlotPoints = trace.finite_points().collect();
                        let mut line = Line::new(points).color(color(trace.color()));
                        if let Some(name) = trace.name() {
                            line = line.name(name);
                        }
                        plot_ui.line(line);
                    }
                });
            }
        });
    }
}
