//! Layers of the bdn9 keymap and the layer state reported by the firmware.
use strum::{EnumCount, FromRepr};

/// Layers of the keymap. The discriminant is the layer number used by `TO(n)`.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr, EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Music controls and generic macros (F17-F22)
    Music = 0,
    /// Photoshop brush controls
    PsBrushes = 1,
    /// Illustrator text/type controls
    AiText = 2,
}

impl Layer {
    /// All layers, in the order the firmware checks them
    pub const ALL: [Layer; Layer::COUNT] = [Layer::Music, Layer::PsBrushes, Layer::AiText];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(layer: u8) -> Option<Self> {
        Self::from_repr(layer)
    }
}

/// Active layers as a 32-bit mask, bit `n` set means layer `n` is on.
///
/// An empty mask means the default layer 0 is active.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u32 {
        self.0
    }

    /// Whether `layer` is on. Layer 0 also reads as on when no layer is.
    pub const fn is(&self, layer: u8) -> bool {
        if layer >= 32 {
            return false;
        }
        if self.0 == 0 {
            return layer == 0;
        }
        self.0 & (1 << layer) != 0
    }

    /// The state after `TO(layer)`: only `layer` is on
    pub const fn to(layer: u8) -> Self {
        if layer >= 32 { Self(0) } else { Self(1 << layer) }
    }

    /// The first keymap layer that reads as on, checked in [`Layer::ALL`] order.
    pub fn active_layer(&self) -> Option<Layer> {
        Layer::ALL.into_iter().find(|l| self.is(l.number()))
    }
}

impl From<Layer> for LayerState {
    fn from(layer: Layer) -> Self {
        LayerState::to(layer.number())
    }
}
