//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet die Overlay-Tasten und mappt sie auf `AppIntent`s.
//! Tasten ohne Mapping werden stillschweigend ignoriert.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `C` Kontrollpunkte, `N` Normalen, `V` Eckpunkte, `S` Segment-Sehnen,
/// `R` setzt Kontrollpunkte/Normalen/Eckpunkte zurück (Sehnen unberührt).
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_c, key_n, key_v, key_s, key_r) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::V),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::R),
        )
    });

    // Mit gedrücktem Cmd/Ctrl gehören die Tasten nicht dem Viewport
    if modifiers.command {
        return events;
    }

    if key_c {
        events.push(AppIntent::ToggleControlPointsRequested);
    }
    if key_n {
        events.push(AppIntent::ToggleNormalsRequested);
    }
    if key_v {
        events.push(AppIntent::ToggleVerticesRequested);
    }
    if key_s {
        events.push(AppIntent::ToggleSegmentsRequested);
    }
    if key_r {
        events.push(AppIntent::ResetOverlaysRequested);
    }

    events
}

#[cfg(test)]
mod tests;
