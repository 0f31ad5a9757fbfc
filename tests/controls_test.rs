use lightbox::{
    data_structures::entity::Entity,
    input::{
        KEY_FREEZE, KEY_GROW, KEY_MINUS_X, KEY_MINUS_Y, KEY_PLUS_X, KEY_PLUS_Y, KEY_QUIT,
        KEY_RELOAD, KEY_SHRINK, KeyboardState, LoopState, ReloadLatch, apply_player_controls,
    },
};
use winit::{event::ElementState, keyboard::KeyCode};

const STEP: f32 = 0.01;

fn player() -> Entity {
    Entity::new("Player", 0)
        .with_position([1.2, 1.2, 0.0])
        .with_scale([0.5, 0.5, 1.0])
}

fn held(keys: &[KeyCode]) -> KeyboardState {
    let mut state = KeyboardState::new();
    keys.iter().for_each(|key| state.press(*key));
    state
}

#[test]
fn each_movement_key_moves_one_step_in_its_direction() {
    let start = player();
    let cases = [
        (KeyCode::KeyD, start.position.x - STEP, start.position.y),
        (KeyCode::KeyA, start.position.x + STEP, start.position.y),
        (KeyCode::KeyW, start.position.x, start.position.y + STEP),
        (KeyCode::KeyS, start.position.x, start.position.y - STEP),
    ];
    for (key, x, y) in cases {
        let mut p = player();
        apply_player_controls(&mut p, &held(&[key]), STEP);
        assert_eq!((p.position.x, p.position.y), (x, y), "key {:?}", key);
        assert_eq!(p.position.z, start.position.z);
        assert_eq!(p.scale, start.scale);
    }
}

#[test]
fn movement_bindings_sit_on_wasd() {
    assert_eq!(KEY_MINUS_X, KeyCode::KeyD);
    assert_eq!(KEY_PLUS_X, KeyCode::KeyA);
    assert_eq!(KEY_PLUS_Y, KeyCode::KeyW);
    assert_eq!(KEY_MINUS_Y, KeyCode::KeyS);
}

#[test]
fn scale_keys_grow_and_shrink_by_one_step() {
    let start = player();

    let mut grown = player();
    apply_player_controls(&mut grown, &held(&[KEY_GROW]), STEP);
    assert_eq!(grown.scale.x, start.scale.x + STEP);
    assert_eq!(grown.scale.y, start.scale.y + STEP);
    assert_eq!(grown.position, start.position);

    let mut shrunk = player();
    apply_player_controls(&mut shrunk, &held(&[KEY_SHRINK]), STEP);
    assert_eq!(shrunk.scale.x, start.scale.x - STEP);
    assert_eq!(shrunk.scale.y, start.scale.y - STEP);
}

#[test]
fn no_keys_no_movement() {
    let mut p = player();
    apply_player_controls(&mut p, &KeyboardState::new(), STEP);
    assert_eq!(p, player());
}

#[test]
fn unbound_keys_are_ignored() {
    let mut p = player();
    apply_player_controls(&mut p, &held(&[KEY_FREEZE, KEY_RELOAD]), STEP);
    assert_eq!(p, player());
}

#[test]
fn diagonal_moves_on_both_axes() {
    let start = player();
    let mut p = player();
    apply_player_controls(&mut p, &held(&[KEY_PLUS_Y, KEY_MINUS_X]), STEP);
    assert_eq!(p.position.x, start.position.x - STEP);
    assert_eq!(p.position.y, start.position.y + STEP);
}

#[test]
fn held_key_moves_once_per_frame() {
    let start = player();
    let keys = held(&[KEY_PLUS_X]);
    let mut p = player();
    let mut expected = start.position.x;
    for _ in 0..3 {
        apply_player_controls(&mut p, &keys, STEP);
        expected += STEP;
    }
    assert_eq!(p.position.x, expected);
}

#[test]
fn released_key_stops_moving() {
    let mut keys = held(&[KEY_MINUS_X]);
    keys.release(KEY_MINUS_X);
    assert!(!keys.is_pressed(KEY_MINUS_X));

    let mut p = player();
    apply_player_controls(&mut p, &keys, STEP);
    assert_eq!(p, player());
}

#[test]
fn reload_latch_fires_once_per_press() {
    let mut latch = ReloadLatch::default();
    assert!(!latch.update(false));
    assert!(latch.update(true));
    assert!(!latch.update(true));
    assert!(!latch.update(true));
    assert!(!latch.update(false));
    assert!(latch.update(true));
}

#[test]
fn reload_latch_survives_very_long_presses() {
    let mut latch = ReloadLatch::default();
    assert!(latch.update(true));
    for _ in 0..(u16::MAX as u32 + 10) {
        assert!(!latch.update(true));
    }
}

#[test]
fn escape_press_closes_the_loop() {
    let mut state = LoopState::default();
    assert!(state.is_running());

    state.on_key(KEY_QUIT, ElementState::Released);
    assert!(state.is_running());
    state.on_key(KEY_PLUS_Y, ElementState::Pressed);
    assert!(state.is_running());

    state.on_key(KEY_QUIT, ElementState::Pressed);
    assert_eq!(state, LoopState::Closing);
}

#[test]
fn close_request_closes_the_loop() {
    let mut state = LoopState::Running;
    state.close();
    assert!(!state.is_running());
}
