pub mod config;
pub mod rig;
pub mod spawn;
pub mod sync;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn::spawn_starfield)
            .add_systems(
                Update,
                sync::sync_layers
                    .in_set(GameSet::Parallax)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
