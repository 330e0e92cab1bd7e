//! B-Quad Mesh Debugger.
//!
//! Diagnose-Viewer für partitionierte Pfad-Meshes: B-Quads, Stencil-Segmente
//! und Normalen als annotierte 2D-Ansicht mit Pan/Zoom-Kamera.

use bquad_mesh_debugger::{render, ui, AppController, AppIntent, AppState, ViewerOptions};

fn main() -> Result<(), eframe::Error> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "B-Quad Mesh Debugger v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("B-Quad Mesh Debugger"),
        ..Default::default()
    };

    eframe::run_native(
        "B-Quad Mesh Debugger",
        options,
        Box::new(|_cc| Ok(Box::new(DebuggerApp::new()))),
    )
}

/// Haupt-Anwendungsstruktur
struct DebuggerApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl DebuggerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = viewer_options;

        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DebuggerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl DebuggerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let pixels_per_point = ctx.pixels_per_point();
                let viewport_size = [
                    rect.width() * pixels_per_point,
                    rect.height() * pixels_per_point,
                ];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.options,
                ));

                // Synchroner Redraw: Szene bauen, Shapes in den Painter
                let scene =
                    self.controller
                        .build_render_scene(&self.state, viewport_size, pixels_per_point);
                let shapes = self.renderer.render_scene(&scene, rect.min);
                ui.painter().extend(shapes);

                if self.state.mesh.is_none() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No mesh loaded. Use File → Sample",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
