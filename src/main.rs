//! epicycles - Fourier epicycle drawing viewer
//!
//! Draw a closed shape with the mouse. The stroke is resampled,
//! transformed, and played back as a chain of rotating circles whose
//! tip retraces it.

use eframe::egui;

mod render;
mod settings;

use epicycles::{AnimationEasing, AnimationState, FourierConfig, FourierSession};
use render::{EpicycleCanvas, SpectrumView};
use settings::AppSettings;

/// Largest frame delta fed to the driver (seconds)
const MAX_FRAME_DELTA: f64 = 0.1;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting epicycles");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_title("epicycles"),
        ..Default::default()
    };

    eframe::run_native(
        "epicycles",
        options,
        Box::new(|cc| Ok(Box::new(EpicycleApp::new(cc)))),
    )
}

/// Main application state
pub struct EpicycleApp {
    session: FourierSession,
    canvas: EpicycleCanvas,
    spectrum: SpectrumView,
    show_settings: bool,

    /// Editable copy of the session configuration
    config: FourierConfig,

    status: String,
}

impl EpicycleApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = FourierConfig::default();
        let mut app = Self {
            session: FourierSession::with_worker(config.clone()),
            canvas: EpicycleCanvas::new(),
            spectrum: SpectrumView::default(),
            show_settings: true,
            config,
            status: String::from("Draw a shape"),
        };

        AppSettings::load().apply(&mut app);
        app
    }

    fn save_settings(&mut self) {
        match AppSettings::from_app(self).save() {
            Ok(()) => self.status = String::from("Settings saved"),
            Err(e) => {
                log::warn!("Failed to save settings: {}", e);
                self.status = format!("Save failed: {}", e);
            }
        }
    }

    /// Push the edited configuration into the session
    fn apply_config(&mut self) {
        self.canvas.settings.skip_dc = self.config.skip_dc;
        self.session.set_config(self.config.clone());
    }

    /// Feed pointer strokes on the canvas into the session
    fn handle_pointer(&mut self, response: &egui::Response) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.start_drawing(self.canvas.to_core(pos, response.rect));
                self.status = String::from("Drawing...");
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.add_point(self.canvas.to_core(pos, response.rect));
            }
        }

        if response.drag_stopped() {
            match self.session.finish_drawing() {
                Ok(generation) => {
                    log::debug!("Stroke submitted as generation {}", generation);
                    self.status = String::from("Analyzing...");
                }
                Err(e) => {
                    log::warn!("Stroke rejected: {}", e);
                    self.status = e.to_string();
                }
            }
        }
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.heading("Playback");
        ui.separator();

        changed |= ui
            .add(egui::Slider::new(&mut self.config.frequencies_amount, 1..=500).text("Circles"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.config.animation_speed, 0.05..=5.0)
                    .text("Speed")
                    .logarithmic(true),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.config.trail_length, 0..=2000).text("Trail length"))
            .changed();

        egui::ComboBox::from_label("Easing")
            .selected_text(self.config.easing.name())
            .show_ui(ui, |ui| {
                for easing in AnimationEasing::all() {
                    if ui
                        .selectable_value(&mut self.config.easing, *easing, easing.name())
                        .clicked()
                    {
                        changed = true;
                    }
                }
            });

        ui.separator();

        ui.collapsing("Analysis", |ui| {
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.sample_count, 16..=4096)
                        .text("Samples")
                        .logarithmic(true),
                )
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.config.smoothing_passes, 0..=20).text("Smoothing"))
                .changed();
            changed |= ui.checkbox(&mut self.config.close_loop, "Close loop").changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.close_loop_threshold, 0.0..=100.0)
                        .text("Close threshold"),
                )
                .changed();
            changed |= ui.checkbox(&mut self.config.spline, "Spline").changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.spline_oversampling, 1..=32)
                        .text("Oversampling"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.path_steps, 16..=4096)
                        .text("Path steps")
                        .logarithmic(true),
                )
                .changed();
        });

        ui.separator();

        // Display settings
        ui.collapsing("Display", |ui| {
            let canvas = &mut self.canvas.settings;
            ui.add(egui::Slider::new(&mut canvas.line_width, 0.5..=6.0).text("Line width"));
            ui.checkbox(&mut canvas.show_circles, "Circles");
            ui.checkbox(&mut canvas.show_arms, "Arms");
            ui.checkbox(&mut canvas.show_trail, "Trail");
            ui.checkbox(&mut canvas.show_drawing, "Stroke");
            ui.checkbox(&mut canvas.show_samples, "Samples");
            ui.checkbox(&mut canvas.show_reconstruction, "Reconstruction");
            ui.checkbox(&mut canvas.show_graticule, "Show grid");
            changed |= ui.checkbox(&mut self.config.skip_dc, "Hide DC circle").changed();
        });

        ui.separator();

        ui.collapsing("Spectrum", |ui| {
            self.spectrum.color = self.canvas.settings.color;
            ui.add(egui::Slider::new(&mut self.spectrum.bars, 2..=64).text("Harmonics"));
            self.spectrum.show(ui, self.session.components());
        });

        ui.separator();

        // Color presets
        ui.collapsing("Color", |ui| {
            let canvas = &mut self.canvas.settings;
            ui.horizontal(|ui| {
                if ui.button("Green").clicked() {
                    canvas.color = egui::Color32::from_rgb(100, 255, 100);
                    canvas.background = egui::Color32::from_rgb(10, 20, 10);
                }
                if ui.button("Amber").clicked() {
                    canvas.color = egui::Color32::from_rgb(255, 176, 0);
                    canvas.background = egui::Color32::from_rgb(20, 15, 5);
                }
                if ui.button("Blue").clicked() {
                    canvas.color = egui::Color32::from_rgb(100, 150, 255);
                    canvas.background = egui::Color32::from_rgb(10, 10, 20);
                }
            });
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.session.clear();
                self.status = String::from("Draw a shape");
            }
            if ui.button("Clear trail").clicked() {
                self.session.clear_trail();
            }
        });
        if ui.button("Save settings").clicked() {
            self.save_settings();
        }

        if changed {
            self.apply_config();
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if self.session.poll_worker() {
            self.status = format!("{} components", self.session.components().len());
        }

        let delta = (ctx.input(|i| i.stable_dt) as f64).clamp(0.0, MAX_FRAME_DELTA);
        self.session.tick(delta);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_settings();
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("epicycles");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.settings_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.canvas.show(ui, &self.session);
            self.handle_pointer(&response);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    let state = match self.session.state() {
                        AnimationState::Idle => "Idle",
                        AnimationState::Animating => "Animating",
                    };
                    ui.small(state);
                    ui.separator();
                    ui.small(format!("Samples: {}", self.session.equidistant_path().len()));
                    ui.separator();
                    ui.small(format!("t = {:.2}", self.session.time()));
                });
            });
        });
    }
}
