//! Movement domain: surface collision and trigger event collection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{CharacterController, Player, Surface, SurfaceEvent};

/// Returns the tagged surface and the other collider of a contact pair, if
/// either side carries a [`Surface`].
fn tagged_pair(surfaces: &Query<&Surface>, a: Entity, b: Entity) -> Option<(Surface, Entity)> {
    if let Ok(surface) = surfaces.get(a) {
        Some((*surface, b))
    } else if let Ok(surface) = surfaces.get(b) {
        Some((*surface, a))
    } else {
        None
    }
}

/// Queues enter/stay/exit events on every player controller touching a tagged surface.
///
/// Starts and ends come from collision messages; stays are re-asserted from the
/// current contact set so missed messages self-correct on the next step.
pub(crate) fn collect_surface_events(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    surfaces: Query<&Surface>,
    mut players: Query<(&mut CharacterController, Option<&CollidingEntities>), With<Player>>,
) {
    for event in collision_start.read() {
        let Some((surface, other)) = tagged_pair(&surfaces, event.collider1, event.collider2)
        else {
            continue;
        };
        if let Ok((mut controller, _)) = players.get_mut(other) {
            controller.push_event(SurfaceEvent::enter(surface));
        }
    }

    for event in collision_end.read() {
        let Some((surface, other)) = tagged_pair(&surfaces, event.collider1, event.collider2)
        else {
            continue;
        };
        if let Ok((mut controller, _)) = players.get_mut(other) {
            controller.push_event(SurfaceEvent::exit(surface));
        }
    }

    for (mut controller, colliding) in &mut players {
        let Some(colliding) = colliding else {
            continue;
        };
        for entity in colliding.iter() {
            if let Ok(surface) = surfaces.get(*entity) {
                controller.push_event(SurfaceEvent::stay(*surface));
            }
        }
    }
}
