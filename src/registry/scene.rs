use bevy::prelude::*;

/// Scene-wide presentation settings, built from scene.config.ron.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    pub clear_color: (u8, u8, u8),
    /// HUD distance from the lower-left corner, in logical pixels.
    pub hud_offset: (f32, f32),
}
