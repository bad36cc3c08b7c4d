//! Dice Roller - a small Bevy + egui desktop app.
//!
//! Pick a die type from the dropdown, hit "Roll Dice", and the result is
//! drawn centered on a picture of the die. Percentile rolls show two d10
//! faces side by side.

mod state;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dice Roller".into(),
                resolution: (550., 450.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<AppState>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                ui::main_ui_system,
                ui::handle_keyboard_input,
                state::clear_old_status,
            ),
        )
        .run();
}

/// Initial setup system.
fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
