pub mod debug_panel;
pub mod hud;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug_panel::DebugUiState>()
            .add_systems(OnEnter(AppState::InGame), hud::spawn_hud)
            .add_systems(
                Update,
                (hud::update_hud, debug_panel::toggle_debug_panel)
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                debug_panel::draw_debug_panel.run_if(in_state(AppState::InGame)),
            );
    }
}
