//! UI module - egui panels for the dice roller.

mod panels;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::state::AppState;

/// Main UI system - renders all egui panels.
pub fn main_ui_system(
    mut contexts: EguiContexts,
    mut app_state: ResMut<AppState>,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();

    // Configure egui style
    configure_style(ctx);

    // Upload any freshly composed face before drawing the panels.
    upload_pending_texture(ctx, &mut app_state);

    // Panel order matters: top/bottom panels claim space first, the
    // CentralPanel fills what remains.
    panels::render_controls(ctx, &mut app_state, time.elapsed_secs_f64());
    panels::render_status_bar(ctx, &app_state);
    panels::render_die_face(ctx, &app_state);

    if app_state.error_message.is_some() {
        render_error_popup(ctx, &mut app_state);
    }
}

/// Move the staged face image into the one displayed texture. Assigning
/// the new handle drops the previous allocation.
fn upload_pending_texture(ctx: &egui::Context, app_state: &mut AppState) {
    if let Some(face) = app_state.pending_image.take() {
        let size = [face.width() as usize, face.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, face.as_raw());
        app_state.die_texture =
            Some(ctx.load_texture("die-face", pixels, egui::TextureOptions::LINEAR));
    }
}

/// Configure egui visual style.
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // One app-wide font sizing pass for all widgets
    use egui::{FontId, TextStyle};
    style.text_styles = [
        (TextStyle::Small, FontId::proportional(12.0)),
        (TextStyle::Body, FontId::proportional(15.0)),
        (TextStyle::Monospace, FontId::monospace(14.0)),
        (TextStyle::Button, FontId::proportional(15.0)),
        (TextStyle::Heading, FontId::proportional(20.0)),
    ]
    .into();

    ctx.set_style(style);
}

/// Render error popup.
fn render_error_popup(ctx: &egui::Context, app_state: &mut AppState) {
    let mut open = true;

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                if let Some(ref msg) = app_state.error_message {
                    ui.colored_label(egui::Color32::RED, msg);
                }
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    app_state.error_message = None;
                }
            });
        });

    if !open {
        app_state.error_message = None;
    }
}

/// Handle keyboard shortcuts.
pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut app_state: ResMut<AppState>,
    mut contexts: EguiContexts,
) {
    let ctx = contexts.ctx_mut();

    // Ctrl+Q / Cmd+Q to quit
    let ctrl_pressed = keys.pressed(KeyCode::ControlLeft)
        || keys.pressed(KeyCode::ControlRight)
        || keys.pressed(KeyCode::SuperLeft)
        || keys.pressed(KeyCode::SuperRight);

    if ctrl_pressed && keys.just_pressed(KeyCode::KeyQ) {
        std::process::exit(0);
    }

    // Dismiss the error popup with Escape
    if keys.just_pressed(KeyCode::Escape) && app_state.error_message.is_some() {
        app_state.error_message = None;
        return;
    }

    // Don't roll while egui wants keyboard input
    if ctx.wants_keyboard_input() {
        return;
    }

    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::KeyR) {
        app_state.roll_dice();
    }
}
