//! Main UI panels for the dice roller.

use bevy_egui::egui;

use crate::state::AppState;
use dice_core::dice::DieType;

/// Render the die selector, roll button, and result sentence.
pub fn render_controls(ctx: &egui::Context, app_state: &mut AppState, now: f64) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Die type")
                .selected_text(app_state.selected.label())
                .show_ui(ui, |ui| {
                    for die in DieType::ALL {
                        if ui
                            .selectable_label(app_state.selected == die, die.label())
                            .clicked()
                        {
                            app_state.select_die(die);
                            app_state.set_status(format!("Selected {}", die.label()), now);
                        }
                    }
                });

            ui.add_space(12.0);

            if ui
                .add_sized(egui::vec2(100.0, 26.0), egui::Button::new("Roll Dice"))
                .clicked()
            {
                app_state.roll_dice();
            }
        });

        ui.add_space(6.0);
        ui.label(&app_state.result_text);
        ui.add_space(6.0);
    });
}

/// Render the composed die face centered in the remaining space.
pub fn render_die_face(ctx: &egui::Context, app_state: &AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            if let Some(texture) = &app_state.die_texture {
                ui.image((texture.id(), texture.size_vec2()));
            } else {
                ui.label(
                    egui::RichText::new("Pick a die and roll")
                        .italics()
                        .color(egui::Color32::GRAY),
                );
            }
        });
    });
}

/// Render the bottom status bar.
pub fn render_status_bar(ctx: &egui::Context, app_state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(status) = &app_state.status_message {
                ui.label(status);
            } else {
                ui.label(
                    egui::RichText::new("Space / R to roll, Ctrl+Q to quit")
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
            }
        });
    });
}
