use bevy::prelude::*;

use crate::ship::Ship;
use crate::ship::input::FrameInput;
use crate::ship::model::ShipModel;

use super::rig::{Layer, ParallaxRig};
use super::spawn::LayerRoot;

/// Re-anchor the rig against the ship and write the result into the layer
/// root transforms. The renderer walks the rig by index; layer entities own
/// no parallax state of their own.
pub fn sync_layers(
    input: Res<FrameInput>,
    ship_query: Query<&ShipModel, With<Ship>>,
    mut rig: ResMut<ParallaxRig>,
    mut root_query: Query<(&LayerRoot, &mut Transform)>,
) {
    let Ok(model) = ship_query.single() else {
        return;
    };

    if input.reset {
        rig.reset();
    } else {
        rig.update(model.position, model.heading);
    }

    for (root, mut transform) in &mut root_query {
        let (center, angle) = place(rig.layer(root.index));
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        transform.rotation = Quat::from_rotation_z(angle);
    }
}

/// Resolve a layer's render placement: the content center such that the
/// anchor point stays at the layer's world position while the content
/// scrolls and rotates about that anchor.
pub fn place(layer: &Layer) -> (Vec2, f32) {
    let center_offset = (Vec2::splat(0.5) - layer.anchor()) * layer.content_size();
    let center = layer.position() + Vec2::from_angle(layer.angle()).rotate(center_offset);
    (center, layer.angle())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::parallax::rig::{LayerConfig, ParallaxRig};
    use crate::test_helpers::fixtures;

    const EPS: f32 = 1e-3;

    fn single_layer_rig(factor: f32) -> ParallaxRig {
        let mut rig = ParallaxRig::default();
        rig.push(
            LayerConfig {
                factor,
                content_size: Vec2::splat(512.0),
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );
        rig
    }

    #[test]
    fn neutral_anchor_centers_content_on_position() {
        let rig = single_layer_rig(0.1);
        let (center, angle) = place(rig.layer(rig.iter().next().unwrap().0));
        assert!(center.length() < EPS);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn content_scrolls_opposite_to_the_authority() {
        let mut rig = single_layer_rig(0.1);
        let index = rig.iter().next().unwrap().0;
        rig.update(Vec2::new(512.0, 0.0), 0.0);
        let (center, _) = place(rig.layer(index));
        // Anchor 0.6 → content center sits 0.1 * 512 to the left.
        assert!((center.x + 51.2).abs() < EPS, "got {center:?}");
        assert!(center.y.abs() < EPS);
    }

    #[test]
    fn rotation_pivots_about_the_anchor_point() {
        let mut rig = single_layer_rig(0.1);
        let index = rig.iter().next().unwrap().0;
        rig.update(Vec2::new(512.0, 0.0), FRAC_PI_2);
        let (center, angle) = place(rig.layer(index));
        // The (-51.2, 0) center offset rotates a quarter turn about the
        // anchor point, which itself stays at the layer position.
        assert!(center.x.abs() < EPS, "got {center:?}");
        assert!((center.y + 51.2).abs() < EPS, "got {center:?}");
        assert_eq!(angle, FRAC_PI_2);
    }

    #[test]
    fn sync_writes_layer_root_transforms() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, sync_layers);

        let mut rig = ParallaxRig::default();
        let far = rig.push(
            LayerConfig {
                factor: 0.1,
                content_size: Vec2::splat(512.0),
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );
        app.insert_resource(rig);

        app.world_mut()
            .spawn((Ship, ShipModel::new(Vec2::new(512.0, 0.0))));
        let root = app
            .world_mut()
            .spawn((LayerRoot { index: far }, Transform::default()))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(root).unwrap();
        assert!((transform.translation.x + 51.2).abs() < EPS);
        assert!(transform.translation.y.abs() < EPS);
    }

    #[test]
    fn reset_input_returns_layers_to_neutral() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, sync_layers);

        let mut rig = ParallaxRig::default();
        let far = rig.push(
            LayerConfig {
                factor: 0.1,
                content_size: Vec2::splat(512.0),
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );
        app.insert_resource(rig);

        app.world_mut()
            .spawn((Ship, ShipModel::new(Vec2::new(512.0, 0.0))));
        let root = app
            .world_mut()
            .spawn((LayerRoot { index: far }, Transform::default()))
            .id();

        app.update();
        app.world_mut().resource_mut::<FrameInput>().reset = true;
        app.update();

        let transform = app.world().get::<Transform>(root).unwrap();
        assert!(transform.translation.x.abs() < EPS);
        assert!(transform.translation.y.abs() < EPS);
    }
}
