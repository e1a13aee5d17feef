//! Movement domain: tests for the input, contact, and fixed-step systems.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::{collect_surface_events, read_input, step_controllers};
use crate::movement::{
    CharacterController, GroundContact, MotionTuning, MovementInput, MovementState,
    MovementStateChanged, PIXELS_PER_UNIT, Player, Surface,
};

// Matches the controller tests so velocities stay exact in f32.
const DT: f32 = 1.0 / 64.0;

#[derive(Resource, Default)]
struct StateChangeLog(Vec<MovementStateChanged>);

fn record_state_changes(
    mut state_changes: MessageReader<MovementStateChanged>,
    mut log: ResMut<StateChangeLog>,
) {
    log.0.extend(state_changes.read().copied());
}

/// Movement systems without physics. `app.update()` only samples input; fixed
/// steps run explicitly through [`fixed_tick`].
fn test_app() -> App {
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(DT));

    let mut app = App::new();
    app.add_message::<CollisionStart>()
        .add_message::<CollisionEnd>()
        .add_message::<MovementStateChanged>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<MovementInput>()
        .init_resource::<StateChangeLog>()
        .insert_resource(time)
        .add_systems(Update, read_input)
        .add_systems(
            FixedUpdate,
            (
                collect_surface_events,
                step_controllers,
                record_state_changes,
            )
                .chain(),
        );
    app
}

fn fixed_tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn spawn_player(app: &mut App, grounded: bool) -> Entity {
    let controller = CharacterController::new(MotionTuning::default()).unwrap();
    app.world_mut()
        .spawn((
            Player,
            controller,
            GroundContact(grounded),
            Transform::from_xyz(64.0, 32.0, 0.0),
            LinearVelocity::default(),
            CollidingEntities::default(),
        ))
        .id()
}

fn controller(app: &App, player: Entity) -> &CharacterController {
    app.world().get::<CharacterController>(player).unwrap()
}

fn keyboard(app: &mut App) -> Mut<'_, ButtonInput<KeyCode>> {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
}

fn collision_start(a: Entity, b: Entity) -> CollisionStart {
    CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    }
}

fn collision_end(a: Entity, b: Entity) -> CollisionEnd {
    CollisionEnd {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    }
}

// -----------------------------------------------------------------------------
// Input tests
// -----------------------------------------------------------------------------

#[test]
fn test_keyboard_axes_and_jump() {
    let mut app = test_app();
    keyboard(&mut app).press(KeyCode::KeyA);
    keyboard(&mut app).press(KeyCode::KeyW);
    keyboard(&mut app).press(KeyCode::Space);
    app.update();

    let input = *app.world().resource::<MovementInput>();
    assert_eq!(input.axis, Vec2::new(-1.0, 1.0));
    assert!(input.jump_held);
    assert!(!input.dash_just_pressed);

    // Opposite keys cancel
    keyboard(&mut app).press(KeyCode::ArrowRight);
    app.update();
    assert_eq!(app.world().resource::<MovementInput>().axis.x, 0.0);
}

#[test]
fn test_dash_press_survives_frames_without_fixed_step() {
    let mut app = test_app();
    spawn_player(&mut app, true);

    keyboard(&mut app).press(KeyCode::KeyX);
    app.update();
    // Next frame: key still down but no longer a fresh press
    keyboard(&mut app).clear();
    app.update();
    assert!(app.world().resource::<MovementInput>().dash_just_pressed);

    fixed_tick(&mut app);
    assert!(!app.world().resource::<MovementInput>().dash_just_pressed);
}

#[test]
fn test_latched_dash_is_cleared_even_without_players() {
    let mut app = test_app();
    app.world_mut().insert_resource(MovementInput {
        dash_just_pressed: true,
        ..default()
    });

    app.update();
    assert!(app.world().resource::<MovementInput>().dash_just_pressed);

    fixed_tick(&mut app);
    assert!(!app.world().resource::<MovementInput>().dash_just_pressed);
}

#[test]
fn test_single_dash_press_dashes_once() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);

    keyboard(&mut app).press(KeyCode::KeyD);
    keyboard(&mut app).press(KeyCode::KeyX);
    app.update();
    keyboard(&mut app).clear();

    fixed_tick(&mut app);
    assert!(!controller(&app, player).can_dash_again());
    assert_eq!(controller(&app, player).max_speed(), 10.0);

    // dash_coyote_time is 1.0s = 64 steps
    for _ in 0..64 {
        app.update();
        fixed_tick(&mut app);
    }
    assert!(controller(&app, player).can_dash_again());

    // Still moving, no new press: the dash must not restart
    for _ in 0..8 {
        app.update();
        fixed_tick(&mut app);
        assert!(controller(&app, player).can_dash_again());
        assert_eq!(controller(&app, player).max_speed(), 5.0);
    }
}

// -----------------------------------------------------------------------------
// Velocity write-back tests
// -----------------------------------------------------------------------------

#[test]
fn test_velocity_written_to_body_in_pixels() {
    let mut app = test_app();
    let player = spawn_player(&mut app, false);

    keyboard(&mut app).press(KeyCode::KeyD);
    app.update();
    fixed_tick(&mut app);

    let body = app.world().get::<LinearVelocity>(player).unwrap().0;
    let velocity = controller(&app, player).velocity();
    // One step from rest: +accel * dt sideways, gravity * dt downwards
    assert_eq!(velocity, Vec2::new(0.3125, -0.375));
    assert_eq!(body, velocity * PIXELS_PER_UNIT);
    assert_eq!(body, Vec2::new(10.0, -12.0));
}

#[test]
fn test_no_step_without_fixed_tick() {
    let mut app = test_app();
    let player = spawn_player(&mut app, false);

    keyboard(&mut app).press(KeyCode::KeyD);
    app.update();
    app.update();

    assert_eq!(controller(&app, player).velocity(), Vec2::ZERO);
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);
}

#[test]
fn test_ground_contact_feeds_the_controller() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);

    fixed_tick(&mut app);
    assert!(controller(&app, player).is_grounded());
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);

    app.world_mut().get_mut::<GroundContact>(player).unwrap().0 = false;
    fixed_tick(&mut app);
    assert!(!controller(&app, player).is_grounded());
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0.y, -12.0);
}

// -----------------------------------------------------------------------------
// State change message tests
// -----------------------------------------------------------------------------

#[test]
fn test_state_change_sends_one_message() {
    let mut app = test_app();
    let player = spawn_player(&mut app, false);

    fixed_tick(&mut app);
    let log = &app.world().resource::<StateChangeLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].entity, player);
    assert_eq!(log[0].from, MovementState::Idle);
    assert_eq!(log[0].to, MovementState::Jumping);

    // Still falling: no further edge
    fixed_tick(&mut app);
    fixed_tick(&mut app);
    assert_eq!(app.world().resource::<StateChangeLog>().0.len(), 1);
}

#[test]
fn test_steady_state_sends_no_message() {
    let mut app = test_app();
    spawn_player(&mut app, true);

    for _ in 0..4 {
        fixed_tick(&mut app);
    }
    assert!(app.world().resource::<StateChangeLog>().0.is_empty());
}

// -----------------------------------------------------------------------------
// Surface contact tests
// -----------------------------------------------------------------------------

#[test]
fn test_collision_start_sets_wall_flag_either_order() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);
    let left = app.world_mut().spawn(Surface::LeftWall).id();
    let right = app.world_mut().spawn(Surface::RightWall).id();

    app.world_mut().write_message(collision_start(left, player));
    fixed_tick(&mut app);
    assert!(controller(&app, player).touching_left_wall());
    assert!(!controller(&app, player).touching_right_wall());

    app.world_mut().write_message(collision_start(player, right));
    fixed_tick(&mut app);
    assert!(controller(&app, player).touching_right_wall());
}

#[test]
fn test_wall_contact_pushes_body_back() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);
    let left = app.world_mut().spawn(Surface::LeftWall).id();

    app.world_mut().resource_mut::<MovementInput>().axis = Vec2::X;
    app.world_mut().write_message(collision_start(left, player));
    fixed_tick(&mut app);

    // 20 * -20 * dt = -6.25, clamped to the cap
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0.x, -5.0 * PIXELS_PER_UNIT);
}

#[test]
fn test_collision_end_clears_wall_flag() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);
    let left = app.world_mut().spawn(Surface::LeftWall).id();

    app.world_mut().write_message(collision_start(left, player));
    fixed_tick(&mut app);
    assert!(controller(&app, player).touching_left_wall());

    app.world_mut().write_message(collision_end(player, left));
    fixed_tick(&mut app);
    assert!(!controller(&app, player).touching_left_wall());
}

#[test]
fn test_untagged_and_foreign_contacts_are_ignored() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);
    let crate_box = app.world_mut().spawn_empty().id();
    let left = app.world_mut().spawn(Surface::LeftWall).id();
    let bystander = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(collision_start(crate_box, player));
    app.world_mut().write_message(collision_start(left, bystander));
    fixed_tick(&mut app);
    assert!(!controller(&app, player).touching_left_wall());
    assert!(!controller(&app, player).on_ladder());
}

#[test]
fn test_current_contacts_reassert_stay() {
    let mut app = test_app();
    let player = spawn_player(&mut app, true);
    let ladder = app.world_mut().spawn(Surface::LadderZone).id();

    // Overlapping without ever having seen a start message
    app.world_mut()
        .get_mut::<CollidingEntities>(player)
        .unwrap()
        .0
        .insert(ladder);
    fixed_tick(&mut app);
    assert!(controller(&app, player).on_ladder());
    assert_eq!(controller(&app, player).gravity(), 0.0);

    // An end message in the same step as a still-listed contact: stay wins
    app.world_mut().write_message(collision_end(ladder, player));
    fixed_tick(&mut app);
    assert!(controller(&app, player).on_ladder());

    app.world_mut()
        .get_mut::<CollidingEntities>(player)
        .unwrap()
        .0
        .clear();
    app.world_mut().write_message(collision_end(ladder, player));
    fixed_tick(&mut app);
    assert!(!controller(&app, player).on_ladder());
    assert_eq!(controller(&app, player).gravity(), -24.0);
}
