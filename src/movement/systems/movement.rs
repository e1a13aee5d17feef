//! Movement domain: ground probing, fixed-step controller update, and velocity write-back.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    CharacterController, DashEvent, GameLayer, GroundContact, JumpKind, MovementInput,
    MovementStateChanged, PIXELS_PER_UNIT, Player, StepInput,
};

/// Overlap each player's ground probe box against the Ground layer.
pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &CharacterController, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not walls, ladders, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, controller, mut contact) in &mut query {
        let sensor = controller.ground_sensor();
        let position = transform.translation.truncate() / PIXELS_PER_UNIT;
        let shape = Collider::rectangle(
            sensor.size.x * PIXELS_PER_UNIT,
            sensor.size.y * PIXELS_PER_UNIT,
        );
        let center = sensor.probe_center(position) * PIXELS_PER_UNIT;
        contact.0 = !spatial_query
            .shape_intersections(&shape, center, 0.0, &ground_filter)
            .is_empty();
    }
}

/// Run one controller step per player and write the result to its body.
pub(crate) fn step_controllers(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    mut state_changes: MessageWriter<MovementStateChanged>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &GroundContact,
            &mut CharacterController,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    let step_input = StepInput {
        axis: input.axis,
        jump_held: input.jump_held,
        dash_pressed: input.dash_just_pressed,
    };

    for (entity, transform, contact, mut controller, mut velocity) in &mut query {
        let position = transform.translation.truncate() / PIXELS_PER_UNIT;
        let grounded = contact.0;
        let probe = move |_center: Vec2, _size: Vec2| grounded;
        let report = controller.step(step_input, position, &probe, dt);
        velocity.0 = report.velocity * PIXELS_PER_UNIT;

        match report.jump {
            Some(JumpKind::Ground) => debug!("{:?} ground jump: vy={}", entity, report.velocity.y),
            Some(JumpKind::Extra) => debug!(
                "{:?} extra jump: vy={}, extra jump consumed",
                entity, report.velocity.y
            ),
            None => {}
        }
        match report.dash {
            Some(DashEvent::Started) => {
                debug!("{:?} dash started: max_speed={}", entity, controller.max_speed())
            }
            Some(DashEvent::Expired) => {
                debug!("{:?} dash expired: max_speed={}", entity, controller.max_speed())
            }
            None => {}
        }

        if controller.just_changed() {
            debug!(
                "Movement state: {:?} -> {:?}",
                controller.previous_state(),
                controller.state()
            );
            state_changes.write(MovementStateChanged {
                entity,
                from: controller.previous_state(),
                to: controller.state(),
            });
        }
    }

    input.dash_just_pressed = false;
}
