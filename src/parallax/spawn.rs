use bevy::prelude::*;

use super::config::StarfieldConfig;
use super::rig::{LayerConfig, LayerIndex, ParallaxRig};

/// Ties a layer-root entity to its record in the rig. The root carries no
/// parallax state of its own; the sync system looks the layer up by index
/// every frame.
#[derive(Component)]
pub struct LayerRoot {
    pub index: LayerIndex,
}

/// Build the rig and spawn one root entity per configured layer, with the
/// starfield tiles and set-piece sprites as children.
pub fn spawn_starfield(
    mut commands: Commands,
    config: Res<StarfieldConfig>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
) {
    let mut rig = ParallaxRig::default();
    let extent = scene_extent(&config, &asset_server, &images);

    for def in &config.layers {
        let index = rig.push(
            LayerConfig {
                factor: def.factor,
                content_size: extent,
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );

        commands
            .spawn((
                LayerRoot { index },
                Transform::from_xyz(0.0, 0.0, def.z_order),
                Visibility::default(),
            ))
            .with_children(|parent| {
                if let Some(ref tiling) = def.tiling {
                    let handle: Handle<Image> = asset_server.load(&tiling.image);
                    if let Some(image) = images.get(&handle) {
                        let tile_size = image.size_f32();
                        let half = (tiling.count / 2) as i32;
                        for ii in -half..=half {
                            for jj in -half..=half {
                                parent.spawn((
                                    Sprite::from_image(handle.clone()),
                                    Transform::from_xyz(
                                        ii as f32 * tile_size.x,
                                        jj as f32 * tile_size.y,
                                        0.0,
                                    ),
                                ));
                            }
                        }
                    } else {
                        warn!("Tile texture not resident, layer '{}' left empty", def.name);
                    }
                }
                for sprite in &def.sprites {
                    parent.spawn((
                        Sprite::from_image(asset_server.load(&sprite.image)),
                        Transform::from_xyz(sprite.offset.0, sprite.offset.1, 0.0)
                            .with_scale(Vec3::splat(sprite.scale)),
                    ));
                }
            });
    }

    info!("Spawned {} parallax layers", rig.len());
    commands.insert_resource(rig);
}

/// Shared content extent for every layer: the tiled background's texture
/// size times its grid count. Falls back to zero (layers do not parallax)
/// when the texture is missing.
fn scene_extent(
    config: &StarfieldConfig,
    asset_server: &AssetServer,
    images: &Assets<Image>,
) -> Vec2 {
    let Some(tiling) = config.layers.iter().find_map(|def| def.tiling.as_ref()) else {
        warn!("No tiled layer in the starfield config, parallax disabled");
        return Vec2::ZERO;
    };
    let handle: Handle<Image> = asset_server.load(&tiling.image);
    match images.get(&handle) {
        Some(image) => image.size_f32() * tiling.count as f32,
        None => {
            warn!("Background texture not resident, parallax disabled");
            Vec2::ZERO
        }
    }
}
