pub mod assets;
pub mod loader;
pub mod scene;
pub mod ship;

use bevy::prelude::*;

use assets::{SceneConfigAsset, ShipDefAsset, StarfieldConfigAsset};
use loader::RonLoader;

/// Application state: Loading waits for assets, InGame flies the ship.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<ShipDefAsset>()
            .init_asset::<SceneConfigAsset>()
            .init_asset::<StarfieldConfigAsset>()
            .register_asset_loader(RonLoader::<ShipDefAsset>::new(&["def.ron"]))
            .register_asset_loader(RonLoader::<SceneConfigAsset>::new(&["config.ron"]))
            .register_asset_loader(RonLoader::<StarfieldConfigAsset>::new(&["parallax.ron"]));
    }
}
