use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 24-bit `0xRRGGBB` colour.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Black; the emissive colour of an unlit standard material.
    pub const BLACK: Self = Self(0);

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }
}

/// Physically-based "standard" surface parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base (albedo) colour.
    pub color: Color,
    /// Self-illumination colour; doubles as the hover highlight channel.
    pub emissive: Color,
    /// Facet normals instead of smooth interpolated normals.
    pub flat_shading: bool,
}

impl Material {
    /// Standard material with no emission.
    #[must_use]
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            flat_shading: false,
        }
    }

    /// Toggle flat shading.
    #[must_use]
    pub fn with_flat_shading(mut self, flat: bool) -> Self {
        self.flat_shading = flat;
        self
    }
}
