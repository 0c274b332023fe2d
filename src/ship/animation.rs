use bevy::prelude::*;

use crate::ship::Ship;
use crate::ship::model::ShipModel;

/// Frames in the banking filmstrip: full left bank → flat → full right bank.
pub const BANK_FRAMES: usize = 18;
/// Frame shown when flying straight.
pub const FLAT_FRAME: usize = 9;

/// Loaded banking frame handles, ordered left bank → flat → right bank.
#[derive(Resource)]
pub struct ShipAnimation {
    pub frames: Vec<Handle<Image>>,
}

/// Current banking frame on the ship entity.
#[derive(Component)]
pub struct BankState {
    pub frame: usize,
    pub timer: Timer,
}

impl BankState {
    pub fn new(step_seconds: f32) -> Self {
        Self {
            frame: FLAT_FRAME,
            timer: Timer::from_seconds(step_seconds, TimerMode::Repeating),
        }
    }
}

/// Queue every banking frame. Also used by the loading screen so the strip
/// counts toward load progress.
pub fn load_bank_frames(asset_server: &AssetServer) -> Vec<Handle<Image>> {
    (0..BANK_FRAMES)
        .map(|i| asset_server.load(format!("textures/ship/ship-{i:02}.png")))
        .collect()
}

/// Runs on InGame enter, before spawn_ship.
pub fn load_bank_animation(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(ShipAnimation {
        frames: load_bank_frames(&asset_server),
    });
}

/// Step the banking frame one index per tick toward the target implied by
/// the current turn input.
pub fn animate_banking(
    time: Res<Time>,
    animation: Res<ShipAnimation>,
    mut query: Query<(&mut BankState, &mut Sprite, &ShipModel), With<Ship>>,
) {
    for (mut bank, mut sprite, model) in &mut query {
        let target = if model.turning() > 0.0 {
            0 // banking left
        } else if model.turning() < 0.0 {
            BANK_FRAMES - 1 // banking right
        } else {
            FLAT_FRAME
        };

        bank.timer.tick(time.delta());
        if bank.timer.just_finished() && bank.frame != target {
            if bank.frame < target {
                bank.frame += 1;
            } else {
                bank.frame -= 1;
            }
            sprite.image = animation.frames[bank.frame].clone();
        }
    }
}
