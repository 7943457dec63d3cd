use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::Color;

/// Hover highlight parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
pub struct PickingOptions {
    /// Highlight toggles whenever `(seconds * flash_rate) mod 2` crosses 1.
    #[schemars(title = "Flash Rate", range(min = 0.0, max = 32.0), extend("step" = 0.5))]
    pub flash_rate: f32,
    /// Emissive colour for the "on" half of the flash.
    #[schemars(skip)]
    pub highlight_on: Color,
    /// Emissive colour for the "off" half of the flash.
    #[schemars(skip)]
    pub highlight_off: Color,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            flash_rate: 8.0,
            highlight_on: Color::from_hex(0x00FF_FF00),
            highlight_off: Color::from_hex(0x00FF_0000),
        }
    }
}
