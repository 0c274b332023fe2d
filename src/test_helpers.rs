pub mod fixtures {
    use bevy::prelude::*;

    use crate::parallax::rig::{LayerConfig, ParallaxRig};
    use crate::registry::scene::SceneConfig;
    use crate::registry::ship::ShipConfig;
    use crate::ship::input::FrameInput;

    pub fn test_ship_config() -> ShipConfig {
        ShipConfig {
            thrust: 220.0,
            turn_rate: 1.8,
            dampening: 0.35,
            bank_seconds: 0.05,
        }
    }

    pub fn test_scene_config() -> SceneConfig {
        SceneConfig {
            clear_color: (20, 5, 35),
            hud_offset: (10.0, 10.0),
        }
    }

    /// Rig with a far (factor 0.1) and near (factor 1.0) layer over a
    /// 2560 × 2560 scene, the layout the demo ships with.
    pub fn test_rig() -> ParallaxRig {
        let mut rig = ParallaxRig::default();
        for factor in [0.1, 1.0] {
            rig.push(
                LayerConfig {
                    factor,
                    content_size: Vec2::splat(2560.0),
                    neutral_anchor: Vec2::splat(0.5),
                },
                Vec2::ZERO,
            );
        }
        rig
    }

    /// Create a minimal Bevy App with the game resources for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_ship_config());
        app.insert_resource(test_scene_config());
        app.insert_resource(test_rig());
        app.init_resource::<FrameInput>();
        app
    }
}
