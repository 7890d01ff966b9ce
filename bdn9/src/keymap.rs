//! Keymap and encoder map of the bdn9.
//!
//! The firmware detects hardware key strokes and uses `(layer, row, col)` to retrieve the action from the keymap.
//! The array sizes come from `keyboard.toml`, so a table that doesn't match the declared matrix
//! doesn't compile.
use strum::EnumCount;

use crate::action::{EncoderAction, KeyAction};
use crate::encoder::EncoderId;
use crate::layer::Layer;
use crate::modifier::ModifierCombination;
use crate::{COL, NUM_ENCODER, NUM_LAYER, ROW};
use crate::{encoder, k, layer, to, wm};

const _: () = assert!(NUM_LAYER == Layer::COUNT, "`layout.layers` must match the keymap layers");
const _: () = assert!(NUM_ENCODER == EncoderId::COUNT, "`[[encoder]]` must list the left and right encoders");

/// Ctrl + Alt, QMK's `LCA()`
const LCA: ModifierCombination = ModifierCombination::LCTRL.union(ModifierCombination::LALT);
/// Right Ctrl + Right Shift, QMK's `RCS()`
const RCS: ModifierCombination = ModifierCombination::RCTRL.union(ModifierCombination::RSHIFT);

/// Keymap, indexed by `[layer][row][col]`
#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Music
    // | Knob 1: Prev/Next |            | Knob 2: Vol Dn/Up |
    // | Press: Mute       | To Layer 1 | Press: Play/Pause |
    // | F17               | F18        | F19               |
    // | F20               | F21        | F22               |
    layer!([
        [k!(AudioMute), to!(1), k!(MediaPlayPause)],
        [k!(F17), k!(F18), k!(F19)],
        [k!(F20), k!(F21), k!(F22)]
    ]),
    // Photoshop brushes
    // | Knob 1: Brush hardness        |            | Knob 2: Brush size        |
    // | Ctrl + Alt + G (clipping mask) | To Layer 2 | Ctrl + ; (toggle guides)  |
    // | L (lasso)                      | V (move)   | Alt (temp eyedropper)     |
    // | W (magic wand)                 | E (eraser) | B (brush)                 |
    layer!([
        [wm!(G, LCA), to!(2), wm!(Semicolon, ModifierCombination::LCTRL)],
        [k!(L), k!(V), k!(LAlt)],
        [k!(W), k!(E), k!(B)]
    ]),
    // Illustrator text
    // | Knob 1: Leading     |                 | Knob 2: Type size        |
    // | Ctrl + G (group)    | To Layer 0      | Ctrl + ; (toggle guides) |
    // | T (text)            | V (selection)   | Shift (select multiple)  |
    // | Ctrl + Z (undo)     | I (eyedropper)  | Space (hand)             |
    layer!([
        [wm!(G, ModifierCombination::LCTRL), to!(0), wm!(Semicolon, ModifierCombination::LCTRL)],
        [k!(T), k!(V), k!(RShift)],
        [wm!(Z, ModifierCombination::LCTRL), k!(I), k!(Space)]
    ]),
];

/// Encoder map, indexed by `[layer][encoder]`.
///
/// Clockwise and counter clockwise may be swapped depending on how the encoders are soldered.
#[rustfmt::skip]
pub const ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [
    // Music: prev/next track, volume down/up
    [
        encoder!(k!(MediaPrevTrack), k!(MediaNextTrack)),
        encoder!(k!(AudioVolDown), k!(AudioVolUp)),
    ],
    // Photoshop brushes: hardness (Shift + [ or ]), size ([ or ])
    [
        encoder!(wm!(LeftBracket, ModifierCombination::LSHIFT), wm!(RightBracket, ModifierCombination::LSHIFT)),
        encoder!(k!(LeftBracket), k!(RightBracket)),
    ],
    // Illustrator text: leading (Alt + Up or Down), type size (Ctrl + Shift + , or .)
    [
        encoder!(wm!(Up, ModifierCombination::LALT), wm!(Down, ModifierCombination::LALT)),
        encoder!(wm!(Comma, RCS), wm!(Dot, RCS)),
    ],
];

pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    KEYMAP
}

/// The action at `(row, col)` of `layer`, `None` when the position is outside the matrix
pub fn key_action(layer: Layer, row: usize, col: usize) -> Option<KeyAction> {
    KEYMAP.get(layer.number() as usize)?.get(row)?.get(col).copied()
}

/// The action bound to an encoder on `layer`
pub fn encoder_action(layer: Layer, encoder: EncoderId) -> EncoderAction {
    ENCODER_MAP[layer.number() as usize][encoder.index()]
}
