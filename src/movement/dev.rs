//! Movement domain: debug-only drawing helpers.

use bevy::prelude::*;

use crate::movement::{CharacterController, PIXELS_PER_UNIT, Player};

/// Outline the ground probe box (green while grounded) and mark touched walls.
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &CharacterController), With<Player>>,
) {
    for (transform, controller) in &query {
        let sensor = controller.ground_sensor();
        let position = transform.translation.truncate() / PIXELS_PER_UNIT;
        let center = sensor.probe_center(position) * PIXELS_PER_UNIT;
        let color = if controller.is_grounded() {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            sensor.size * PIXELS_PER_UNIT,
            color,
        );

        // Wall contact
        let origin = position * PIXELS_PER_UNIT;
        let half_height = Vec2::new(0.0, 0.5 * PIXELS_PER_UNIT);
        let wall_color = Color::srgb(0.95, 0.6, 0.1);
        for (touching, side) in [
            (controller.touching_left_wall(), -1.0),
            (controller.touching_right_wall(), 1.0),
        ] {
            if touching {
                let x = Vec2::new(side * 0.35 * PIXELS_PER_UNIT, 0.0);
                gizmos.line_2d(origin + x - half_height, origin + x + half_height, wall_color);
            }
        }
    }
}
