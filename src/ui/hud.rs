use bevy::prelude::*;

use crate::registry::scene::SceneConfig;
use crate::ship::Ship;
use crate::ship::model::ShipModel;

#[derive(Component)]
pub struct CoordHud;

pub fn spawn_hud(mut commands: Commands, scene: Res<SceneConfig>) {
    let (left, bottom) = scene.hud_offset;
    commands.spawn((
        CoordHud,
        Text::new(position_text(Vec2::ZERO)),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            bottom: Val::Px(bottom),
            ..default()
        },
    ));
}

pub fn update_hud(
    ship_query: Query<&ShipModel, With<Ship>>,
    mut text_query: Query<&mut Text, With<CoordHud>>,
) {
    let Ok(model) = ship_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    **text = position_text(model.position);
}

/// Coordinates are reported in decameters to keep the HUD readable.
fn position_text(position: Vec2) -> String {
    format!(
        "Coords: ({},{})",
        position.x as i32 / 10,
        position.y as i32 / 10
    )
}
