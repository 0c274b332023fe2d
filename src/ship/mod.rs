pub mod animation;
pub mod input;
pub mod model;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::registry::ship::ShipConfig;
use crate::sets::GameSet;

use input::FrameInput;
use model::ShipModel;

/// Clamp on the simulation timestep so a long frame cannot teleport the ship.
pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

#[derive(Component)]
pub struct Ship;

pub struct ShipPlugin;

impl Plugin for ShipPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameInput>()
            .add_systems(
                OnEnter(AppState::InGame),
                (animation::load_bank_animation, spawn_ship).chain(),
            )
            .add_systems(
                Update,
                input::read_input
                    .in_set(GameSet::Input)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (advance_ship, animation::animate_banking)
                    .chain()
                    .in_set(GameSet::Ship)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// The ship sprite stays pinned at screen center; the world moves around it.
fn spawn_ship(
    mut commands: Commands,
    config: Res<ShipConfig>,
    animation: Res<animation::ShipAnimation>,
) {
    commands.spawn((
        Ship,
        ShipModel::new(Vec2::ZERO),
        animation::BankState::new(config.bank_seconds),
        Sprite::from_image(animation.frames[animation::FLAT_FRAME].clone()),
        Transform::from_xyz(0.0, 0.0, 2.0),
    ));
}

/// Advance the ship model from the sampled input.
fn advance_ship(
    time: Res<Time>,
    input: Res<FrameInput>,
    config: Res<ShipConfig>,
    mut query: Query<&mut ShipModel, With<Ship>>,
) {
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    for mut model in &mut query {
        if input.reset {
            model.reset(Vec2::ZERO);
            continue;
        }
        model.set_forward(input.forward);
        model.set_turning(input.turning);
        model.update(&config, dt);
    }
}
