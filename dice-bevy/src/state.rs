//! Application state for the dice roller.
//!
//! `AppState` is the one place mutable UI state lives: the selected die,
//! the latest roll, and the single displayed texture. Rolling is fully
//! synchronous; everything happens in the frame that saw the click.

use bevy::prelude::*;
use bevy_egui::egui;
use tracing::info;

use dice_core::dice::{DieType, Roll};
use dice_core::render::{Renderer, RgbaImage};

/// Main application state resource.
#[derive(Resource)]
pub struct AppState {
    /// Currently selected die type.
    pub selected: DieType,
    /// The most recent roll, if any.
    pub last_roll: Option<Roll>,
    /// Result sentence shown under the controls.
    pub result_text: String,
    /// Freshly composed face waiting to be uploaded as a texture.
    pub pending_image: Option<RgbaImage>,
    /// The single displayed texture; replaced wholesale on each roll,
    /// which releases the previous allocation.
    pub die_texture: Option<egui::TextureHandle>,
    /// Error message to display.
    pub error_message: Option<String>,
    /// Status bar message.
    pub status_message: Option<String>,
    /// When the status message was set (for auto-clear).
    pub status_set_time: Option<f64>,
    /// Face renderer; stateless between rolls.
    pub renderer: Renderer,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected: DieType::default(),
            last_roll: None,
            result_text: "Roll result will appear here".to_string(),
            pending_image: None,
            die_texture: None,
            error_message: None,
            status_message: None,
            status_set_time: None,
            renderer: Renderer::from_env(),
        }
    }
}

impl AppState {
    /// Record the die selection. No other side effects.
    pub fn select_die(&mut self, die: DieType) {
        self.selected = die;
    }

    /// Roll the selected die and stage the composed face for display.
    ///
    /// On a render failure the error is surfaced in the popup and the
    /// previous result text and texture are left untouched.
    pub fn roll_dice(&mut self) {
        let roll = Roll::new(self.selected);
        match self.renderer.render(&roll) {
            Ok(face) => {
                info!(die = %roll.die, value = roll.value, "rolled");
                self.result_text =
                    format!("You rolled a {} on a {}", roll.value, roll.die.label());
                self.last_roll = Some(roll);
                self.pending_image = Some(face);
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Set a status message (with timestamp for auto-clear).
    pub fn set_status(&mut self, message: impl Into<String>, current_time: f64) {
        self.status_message = Some(message.into());
        self.status_set_time = Some(current_time);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_time = None;
    }
}

/// System to clear old status messages after 3 seconds.
pub fn clear_old_status(mut app_state: ResMut<AppState>, time: Res<Time>) {
    if let Some(set_time) = app_state.status_set_time {
        let elapsed = time.elapsed_secs_f64() - set_time;
        if elapsed > 3.0 {
            app_state.clear_status();
        }
    }
}
