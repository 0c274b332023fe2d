use bevy::prelude::*;

/// Control sample for the current frame, written by the input system and
/// consumed by the ship and parallax systems.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameInput {
    pub forward: f32,
    pub turning: f32,
    pub reset: bool,
}

pub fn read_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<FrameInput>) {
    let mut forward = 0.0;
    let mut turning = 0.0;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        forward += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        forward -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        turning += 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        turning -= 1.0;
    }
    input.forward = forward;
    input.turning = turning;
    input.reset = keys.just_pressed(KeyCode::KeyR);
}
