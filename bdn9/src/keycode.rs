//! Key codes emitted by the bdn9 keymap.
//!
//! Values follow the HID keyboard/keypad page. Media keys sit in the keyboard page too, the
//! firmware moves them to a consumer report when sending.

/// Keys in the HID keyboard/keypad page
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    B = 0x05,
    E = 0x08,
    G = 0x0A,
    I = 0x0C,
    L = 0x0F,
    T = 0x17,
    V = 0x19,
    W = 0x1A,
    Z = 0x1D,
    /// `Space`
    Space = 0x2C,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// Down arrow
    Down = 0x51,
    /// Up arrow
    Up = 0x52,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    AudioMute = 0xA8,
    AudioVolUp = 0xA9,
    AudioVolDown = 0xAA,
    MediaNextTrack = 0xAB,
    MediaPrevTrack = 0xAC,
    MediaPlayPause = 0xAE,
    /// Left Alt
    LAlt = 0xE2,
    /// Right Shift
    RShift = 0xE5,
}
