use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

/// Asset loaded from ship.def.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct ShipDefAsset {
    pub thrust: f32,
    pub turn_rate: f32,
    /// Fraction of velocity kept after one second of coasting.
    pub dampening: f32,
    pub bank_seconds: f32,
}

/// Asset loaded from scene.config.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct SceneConfigAsset {
    pub clear_color: (u8, u8, u8),
    pub hud_offset: (f32, f32),
}

/// One visual depth plane of the starfield.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerDef {
    pub name: String,
    /// 0.0 = fixed background, 1.0 = pinned to the foreground.
    pub factor: f32,
    pub z_order: f32,
    #[serde(default)]
    pub tiling: Option<TilingDef>,
    #[serde(default)]
    pub sprites: Vec<SpriteDef>,
}

/// Repeat one texture in a count × count grid around the layer center.
#[derive(Debug, Clone, Deserialize)]
pub struct TilingDef {
    pub image: String,
    pub count: u32,
}

/// A set-piece sprite placed at a fixed offset within its layer.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteDef {
    pub image: String,
    pub offset: (f32, f32),
    pub scale: f32,
}

/// Asset loaded from starfield.parallax.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct StarfieldConfigAsset {
    pub layers: Vec<LayerDef>,
}
