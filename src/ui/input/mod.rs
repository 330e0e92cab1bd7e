//! Viewport-Input-Handling: Drag-Pan, Scroll-Zoom, Keyboard → AppIntent.
//!
//! Pointer-Gesten gehen vollständig an die Kamera; die Overlay-Tasten
//! liegen in `keyboard.rs`.

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::ViewerOptions;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        options: &ViewerOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_drag_pan(ui, response, &mut events);
        self.handle_scroll_zoom(ui, response, options, &mut events);

        events
    }

    /// Primärer Drag verschiebt die Kamera (Pan in physischen Pixeln).
    fn handle_drag_pan(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.dragged() {
            return;
        }

        let delta = response.drag_delta();
        if delta == egui::Vec2::ZERO {
            return;
        }

        let pixels_per_point = ui.ctx().pixels_per_point();
        events.push(AppIntent::CameraPan {
            delta: Vec2::new(delta.x, delta.y) * pixels_per_point,
        });
    }

    /// Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        options: &ViewerOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };

        // Fokus relativ zum Viewport-Ursprung, in physischen Pixeln
        let pixels_per_point = ui.ctx().pixels_per_point();
        let focus = response.hover_pos().map(|pos| {
            Vec2::new(pos.x - response.rect.min.x, pos.y - response.rect.min.y)
                * pixels_per_point
        });

        events.push(AppIntent::CameraZoom { factor, focus });
    }
}
