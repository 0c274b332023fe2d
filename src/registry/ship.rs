use bevy::prelude::*;

/// Ship handling parameters, built from ship.def.ron once loading completes.
#[derive(Resource, Debug, Clone)]
pub struct ShipConfig {
    /// Acceleration applied along the facing direction at full forward input.
    pub thrust: f32,
    /// Heading change in radians per second at full turn input.
    pub turn_rate: f32,
    /// Fraction of velocity kept after one second of coasting.
    pub dampening: f32,
    /// Seconds between banking filmstrip steps.
    pub bank_seconds: f32,
}
