mod loading;
mod parallax;
mod registry;
mod sets;
mod ship;
#[cfg(test)]
mod test_helpers;
mod ui;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Stardrift".into(),
                        resolution: (1024, 576).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(loading::LoadingPlugin)
        .add_plugins(ship::ShipPlugin)
        .add_plugins(parallax::ParallaxPlugin)
        .add_plugins(ui::UiPlugin)
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Ship, GameSet::Parallax, GameSet::Ui).chain(),
        )
        // Loading-screen backdrop; gameplay swaps in the configured clear color.
        .insert_resource(ClearColor(Color::srgb_u8(192, 192, 192)))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
