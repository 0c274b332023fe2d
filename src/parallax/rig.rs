use bevy::math::Vec2;
use bevy::prelude::Resource;

/// Index of a layer inside a [`ParallaxRig`], handed out at registration.
///
/// Renderers hold this index and look the layer up each frame instead of
/// owning a reference into the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerIndex(usize);

/// Static configuration for one depth plane. Never changes at runtime.
#[derive(Debug, Clone)]
pub struct LayerConfig {
    /// How strongly the layer anchor follows the authority:
    /// 0.0 = fixed background, 1.0 = pinned to the foreground.
    pub factor: f32,
    /// Extent of the layer's renderable content. Must be positive on both
    /// axes for the layer to parallax at all.
    pub content_size: Vec2,
    /// Anchor value corresponding to zero relative offset, nominally the
    /// geometric center.
    pub neutral_anchor: Vec2,
}

/// One visual depth plane tracked by the rig.
///
/// `position` is the world location of the anchor point. Re-anchoring moves
/// where the content scrolls and rotates, never where the layer sits: the
/// position is held fixed across anchor changes.
#[derive(Debug, Clone)]
pub struct Layer {
    factor: f32,
    content_size: Vec2,
    neutral_anchor: Vec2,
    anchor: Vec2,
    position: Vec2,
    angle: f32,
}

impl Layer {
    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Per-axis offset in anchor units. A degenerate extent suppresses
    /// parallax instead of producing non-finite anchors.
    fn normalize(&self, offset: Vec2) -> Vec2 {
        if self.content_size.x <= 0.0 || self.content_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        offset / self.content_size
    }
}

/// The parallax compositor: a flat arena of layers, all re-anchored once per
/// frame against a single moving authority position.
#[derive(Resource, Debug, Default)]
pub struct ParallaxRig {
    layers: Vec<Layer>,
}

impl ParallaxRig {
    /// Register a layer with its anchor point at `position`. The layer
    /// starts at its neutral anchor with no rotation.
    pub fn push(&mut self, config: LayerConfig, position: Vec2) -> LayerIndex {
        self.layers.push(Layer {
            factor: config.factor,
            content_size: config.content_size,
            neutral_anchor: config.neutral_anchor,
            anchor: config.neutral_anchor,
            position,
            angle: 0.0,
        });
        LayerIndex(self.layers.len() - 1)
    }

    /// Re-anchor every layer against the authority. The offset from the
    /// layer position is normalized by the content extent, scaled by the
    /// parallax factor and applied on top of the neutral anchor; the layer
    /// angle follows the authority heading so all depth planes stay aligned
    /// with the direction of motion.
    pub fn update(&mut self, authority: Vec2, heading: f32) {
        for layer in &mut self.layers {
            let offset = authority - layer.position;
            layer.anchor = layer.neutral_anchor + layer.normalize(offset) * layer.factor;
            layer.angle = heading;
        }
    }

    /// Drop every layer back to its neutral anchor and zero rotation,
    /// keeping world positions untouched.
    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.anchor = layer.neutral_anchor;
            layer.angle = 0.0;
        }
    }

    pub fn layer(&self, index: LayerIndex) -> &Layer {
        &self.layers[index.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerIndex, &Layer)> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| (LayerIndex(i), layer))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn rig_with(factor: f32, content_size: Vec2) -> (ParallaxRig, LayerIndex) {
        let mut rig = ParallaxRig::default();
        let index = rig.push(
            LayerConfig {
                factor,
                content_size,
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );
        (rig, index)
    }

    fn assert_vec2_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn background_never_parallaxes() {
        let (mut rig, index) = rig_with(0.0, Vec2::splat(512.0));
        for authority in [Vec2::new(512.0, 0.0), Vec2::new(-64.0, 1024.0)] {
            rig.update(authority, 0.3);
            assert_vec2_eq(rig.layer(index).anchor(), Vec2::splat(0.5));
            assert_vec2_eq(rig.layer(index).position(), Vec2::ZERO);
        }
    }

    #[test]
    fn foreground_tracks_authority_exactly() {
        let (mut rig, index) = rig_with(1.0, Vec2::splat(512.0));
        rig.update(Vec2::new(256.0, -128.0), 0.0);
        let shift = rig.layer(index).anchor() - Vec2::splat(0.5);
        assert_vec2_eq(shift, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn anchor_shifts_while_position_is_preserved() {
        // Content (512,512), factor 0.1, authority moved to (512,0):
        // normalized offset (1,0), scaled (0.1,0), anchor (0.6,0.5).
        let (mut rig, index) = rig_with(0.1, Vec2::splat(512.0));
        rig.update(Vec2::new(512.0, 0.0), 0.0);
        assert_vec2_eq(rig.layer(index).anchor(), Vec2::new(0.6, 0.5));
        assert_vec2_eq(rig.layer(index).position(), Vec2::ZERO);
    }

    #[test]
    fn update_is_idempotent_for_unchanged_authority() {
        let (mut rig, index) = rig_with(0.4, Vec2::new(640.0, 480.0));
        let authority = Vec2::new(100.0, -50.0);
        rig.update(authority, 1.2);
        let first = rig.layer(index).clone();
        rig.update(authority, 1.2);
        assert_vec2_eq(rig.layer(index).anchor(), first.anchor());
        assert_vec2_eq(rig.layer(index).position(), first.position());
        assert_eq!(rig.layer(index).angle(), first.angle());
    }

    #[test]
    fn degenerate_extent_suppresses_parallax() {
        let (mut rig, index) = rig_with(0.5, Vec2::new(0.0, 512.0));
        rig.update(Vec2::new(1000.0, 1000.0), 0.0);
        let anchor = rig.layer(index).anchor();
        assert!(anchor.is_finite());
        assert_vec2_eq(anchor, Vec2::splat(0.5));
    }

    #[test]
    fn heading_is_applied_to_every_layer() {
        let mut rig = ParallaxRig::default();
        for factor in [0.0, 0.1, 1.0] {
            rig.push(
                LayerConfig {
                    factor,
                    content_size: Vec2::splat(512.0),
                    neutral_anchor: Vec2::splat(0.5),
                },
                Vec2::ZERO,
            );
        }
        rig.update(Vec2::new(10.0, 10.0), 0.75);
        for (_, layer) in rig.iter() {
            assert_eq!(layer.angle(), 0.75);
        }
    }

    #[test]
    fn reset_restores_neutral_anchor_and_zero_angle() {
        let (mut rig, index) = rig_with(0.8, Vec2::splat(256.0));
        rig.update(Vec2::new(128.0, 64.0), 2.0);
        rig.reset();
        assert_vec2_eq(rig.layer(index).anchor(), Vec2::splat(0.5));
        assert_eq!(rig.layer(index).angle(), 0.0);
        assert_vec2_eq(rig.layer(index).position(), Vec2::ZERO);
    }

    #[test]
    fn push_hands_out_sequential_indices() {
        let mut rig = ParallaxRig::default();
        let a = rig.push(
            LayerConfig {
                factor: 0.1,
                content_size: Vec2::splat(512.0),
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::ZERO,
        );
        let b = rig.push(
            LayerConfig {
                factor: 1.0,
                content_size: Vec2::splat(512.0),
                neutral_anchor: Vec2::splat(0.5),
            },
            Vec2::new(32.0, 32.0),
        );
        assert_ne!(a, b);
        assert_eq!(rig.len(), 2);
        assert_eq!(rig.layer(b).factor(), 1.0);
    }
}
