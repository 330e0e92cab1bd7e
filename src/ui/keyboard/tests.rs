use super::*;

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn test_c_emits_control_point_toggle() {
    let events = collect_with_key_event(key_event(egui::Key::C, egui::Modifiers::default()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleControlPointsRequested)));
}

#[test]
fn test_n_emits_normals_toggle() {
    let events = collect_with_key_event(key_event(egui::Key::N, egui::Modifiers::default()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleNormalsRequested)));
}

#[test]
fn test_v_emits_vertices_toggle() {
    let events = collect_with_key_event(key_event(egui::Key::V, egui::Modifiers::default()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleVerticesRequested)));
}

#[test]
fn test_s_emits_segments_toggle() {
    let events = collect_with_key_event(key_event(egui::Key::S, egui::Modifiers::default()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleSegmentsRequested)));
}

#[test]
fn test_r_emits_overlay_reset() {
    let events = collect_with_key_event(key_event(egui::Key::R, egui::Modifiers::default()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ResetOverlaysRequested)));
}

#[test]
fn test_unknown_key_is_ignored() {
    let events = collect_with_key_event(key_event(egui::Key::Q, egui::Modifiers::default()));
    assert!(events.is_empty());
}

#[test]
fn test_command_modifier_suppresses_toggles() {
    let events = collect_with_key_event(key_event(egui::Key::S, egui::Modifiers::COMMAND));
    assert!(events.is_empty());
}
