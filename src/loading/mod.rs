//! Loading mode: progress monitoring and the one-shot transition into
//! gameplay.

pub mod gate;
pub mod progress;
pub mod screen;

use bevy::prelude::*;

use crate::registry::AppState;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<screen::LoadingStatus>()
            .add_systems(
                Startup,
                (screen::start_loading, screen::spawn_loading_screen),
            )
            .add_systems(
                Update,
                (
                    screen::monitor_progress,
                    screen::handle_play_button,
                    screen::advance_mode,
                )
                    .chain()
                    .run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnExit(AppState::Loading), screen::finish_loading);
    }
}
