use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::registry::ship::ShipConfig;

/// Kinematic state of the ship. Its position is the authority point every
/// parallax layer tracks.
#[derive(Component, Debug, Clone)]
pub struct ShipModel {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians; 0 points up the screen, positive turns counter-clockwise.
    pub heading: f32,
    forward: f32,
    turning: f32,
}

impl ShipModel {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            heading: 0.0,
            forward: 0.0,
            turning: 0.0,
        }
    }

    pub fn set_forward(&mut self, value: f32) {
        self.forward = value.clamp(-1.0, 1.0);
    }

    pub fn set_turning(&mut self, value: f32) {
        self.turning = value.clamp(-1.0, 1.0);
    }

    pub fn turning(&self) -> f32 {
        self.turning
    }

    /// Unit vector the nose points along at the current heading.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.heading + FRAC_PI_2)
    }

    /// Advance heading, velocity and position by one timestep.
    pub fn update(&mut self, config: &ShipConfig, dt: f32) {
        self.heading += self.turning * config.turn_rate * dt;
        if self.forward != 0.0 {
            self.velocity += self.facing() * self.forward * config.thrust * dt;
        }
        self.position += self.velocity * dt;
        self.velocity *= config.dampening.powf(dt);
    }

    /// Put the ship back at `position` with a clean slate.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.heading = 0.0;
        self.forward = 0.0;
        self.turning = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    const EPS: f32 = 1e-4;

    #[test]
    fn thrust_moves_along_the_facing_direction() {
        let config = fixtures::test_ship_config();
        let mut model = ShipModel::new(Vec2::ZERO);
        model.set_forward(1.0);
        model.update(&config, 0.1);
        assert!(model.position.y > 0.0, "heading 0 faces up, got {model:?}");
        assert!(model.position.x.abs() < EPS);
    }

    #[test]
    fn turning_changes_heading() {
        let config = fixtures::test_ship_config();
        let mut model = ShipModel::new(Vec2::ZERO);
        model.set_turning(1.0);
        model.update(&config, 0.1);
        assert!(model.heading > 0.0);

        model.reset(Vec2::ZERO);
        model.set_turning(-1.0);
        model.update(&config, 0.1);
        assert!(model.heading < 0.0);
    }

    #[test]
    fn coasting_velocity_decays() {
        let config = fixtures::test_ship_config();
        let mut model = ShipModel::new(Vec2::ZERO);
        model.velocity = Vec2::new(100.0, 0.0);
        model.update(&config, 0.5);
        assert!(model.velocity.x > 0.0);
        assert!(model.velocity.x < 100.0);
    }

    #[test]
    fn inputs_clamp_to_unit_range() {
        let mut model = ShipModel::new(Vec2::ZERO);
        model.set_turning(5.0);
        assert_eq!(model.turning(), 1.0);
        model.set_turning(-5.0);
        assert_eq!(model.turning(), -1.0);
    }

    #[test]
    fn reset_restores_a_clean_slate() {
        let config = fixtures::test_ship_config();
        let mut model = ShipModel::new(Vec2::ZERO);
        model.set_forward(1.0);
        model.set_turning(1.0);
        model.update(&config, 0.2);
        model.reset(Vec2::new(5.0, 5.0));
        assert_eq!(model.position, Vec2::new(5.0, 5.0));
        assert_eq!(model.velocity, Vec2::ZERO);
        assert_eq!(model.heading, 0.0);
        assert_eq!(model.turning(), 0.0);
    }
}
