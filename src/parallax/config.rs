use bevy::prelude::*;

use crate::registry::assets::LayerDef;

/// Runtime starfield layout, built from starfield.parallax.ron once loading
/// completes.
#[derive(Resource, Debug, Clone)]
pub struct StarfieldConfig {
    pub layers: Vec<LayerDef>,
}
