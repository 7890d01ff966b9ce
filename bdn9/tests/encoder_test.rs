pub mod common;

use bdn9::action::Action;
use bdn9::encoder::{Direction, EncoderId, EncoderOutcome, layer_encoder_action, process_encoder};
use bdn9::keycode::HidKeyCode;
use bdn9::layer::{Layer, LayerState};
use bdn9::modifier::ModifierCombination;

use crate::common::keypad_on_layer;

const LEFT: u8 = 0;
const RIGHT: u8 = 1;

fn key(k: HidKeyCode) -> Action {
    Action::Key(k)
}

fn chord(k: HidKeyCode, m: ModifierCombination) -> Action {
    Action::KeyWithModifier(k, m)
}

/// (layer, encoder, clockwise, expected tap)
fn encoder_table() -> Vec<(Layer, u8, bool, Action)> {
    let rcs = ModifierCombination::new().with_right(true).with_ctrl(true).with_shift(true);
    vec![
        (Layer::Music, LEFT, true, key(HidKeyCode::MediaPrevTrack)),
        (Layer::Music, LEFT, false, key(HidKeyCode::MediaNextTrack)),
        (Layer::Music, RIGHT, true, key(HidKeyCode::AudioVolDown)),
        (Layer::Music, RIGHT, false, key(HidKeyCode::AudioVolUp)),
        (Layer::PsBrushes, LEFT, true, chord(HidKeyCode::LeftBracket, ModifierCombination::LSHIFT)),
        (Layer::PsBrushes, LEFT, false, chord(HidKeyCode::RightBracket, ModifierCombination::LSHIFT)),
        (Layer::PsBrushes, RIGHT, true, key(HidKeyCode::LeftBracket)),
        (Layer::PsBrushes, RIGHT, false, key(HidKeyCode::RightBracket)),
        (Layer::AiText, LEFT, true, chord(HidKeyCode::Up, ModifierCombination::LALT)),
        (Layer::AiText, LEFT, false, chord(HidKeyCode::Down, ModifierCombination::LALT)),
        (Layer::AiText, RIGHT, true, chord(HidKeyCode::Comma, rcs)),
        (Layer::AiText, RIGHT, false, chord(HidKeyCode::Dot, rcs)),
    ]
}

#[test]
fn test_every_step_taps_exactly_one_key() {
    for (layer, index, clockwise, expected) in encoder_table() {
        let mut keypad = keypad_on_layer(layer.number());

        let run_default = keypad.encoder_update(index, clockwise);

        assert!(!run_default, "default encoder handling must be suppressed");
        assert_eq!(
            keypad.host().taps,
            [expected],
            "layer {:?}, encoder {}, clockwise {}",
            layer,
            index,
            clockwise
        );
        assert!(keypad.backlight().calls.is_empty());
    }
}

#[test]
fn test_pure_lookup_matches_table() {
    for (layer, index, clockwise, expected) in encoder_table() {
        let encoder = EncoderId::from_repr(index).unwrap();
        let direction = Direction::from_clockwise(clockwise);
        assert_eq!(layer_encoder_action(layer, encoder, direction), Some(expected));
        assert_eq!(
            process_encoder(LayerState::from(layer), index, direction),
            EncoderOutcome::Tap(expected)
        );
    }
}

#[test]
fn test_music_left_encoder() {
    let mut keypad = keypad_on_layer(0);
    keypad.encoder_update(LEFT, true);
    keypad.encoder_update(LEFT, false);
    assert_eq!(
        keypad.host().taps,
        [key(HidKeyCode::MediaPrevTrack), key(HidKeyCode::MediaNextTrack)]
    );
}

#[test]
fn test_brushes_right_encoder() {
    let mut keypad = keypad_on_layer(1);
    keypad.encoder_update(RIGHT, true);
    keypad.encoder_update(RIGHT, false);
    assert_eq!(
        keypad.host().taps,
        [key(HidKeyCode::LeftBracket), key(HidKeyCode::RightBracket)]
    );
}

#[test]
fn test_empty_layer_state_reads_as_music() {
    let mut keypad = keypad_on_layer(0);
    keypad.host_mut().layer_state = LayerState::new();
    keypad.encoder_update(RIGHT, false);
    assert_eq!(keypad.host().taps, [key(HidKeyCode::AudioVolUp)]);
}

#[test]
fn test_unknown_encoder_is_ignored() {
    let mut keypad = keypad_on_layer(0);
    assert!(!keypad.encoder_update(2, true));
    assert!(keypad.host().taps.is_empty());
    assert_eq!(
        process_encoder(LayerState::new(), 7, Direction::Clockwise),
        EncoderOutcome::Ignored
    );
}

#[test]
fn test_layer_outside_keymap_is_ignored() {
    let mut keypad = keypad_on_layer(4);
    assert!(!keypad.encoder_update(LEFT, true));
    assert!(keypad.host().taps.is_empty());
}

#[test]
fn test_directions_map_to_distinct_actions() {
    assert_eq!(Direction::from_clockwise(true), Direction::Clockwise);
    assert_eq!(Direction::from_clockwise(false), Direction::CounterClockwise);
    for layer in Layer::ALL {
        for encoder in [EncoderId::Left, EncoderId::Right] {
            assert_ne!(
                layer_encoder_action(layer, encoder, Direction::Clockwise),
                layer_encoder_action(layer, encoder, Direction::CounterClockwise)
            );
        }
    }
}

#[test]
fn test_encoder_names_from_keyboard_toml() {
    assert_eq!(bdn9::ENCODER_NAMES, ["left", "right"]);
    assert_eq!(EncoderId::Left.name(), "left");
    assert_eq!(EncoderId::Right.name(), "right");
}
