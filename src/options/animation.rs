use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Back-and-forth motion parameters for the animated mesh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// X coordinate where the first segment starts. The mesh travels to
    /// `-start_x` and back.
    #[schemars(title = "Start X", range(min = -5.0, max = 5.0), extend("step" = 0.1))]
    pub start_x: f32,
    /// Travel speed in scene units per second.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Offset (radians) keeping the half-turn endpoints away from exactly
    /// π so slerp always has a well-defined direction.
    #[schemars(skip)]
    pub rotation_epsilon: f32,
}

impl AnimationOptions {
    /// Length of one traversal, in milliseconds.
    #[must_use]
    pub fn segment_duration_ms(&self) -> f64 {
        1000.0 * f64::from((2.0 * self.start_x).abs()) / f64::from(self.speed)
    }

    /// Reject values that would give a zero or infinite segment.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.start_x.is_finite() || self.start_x == 0.0 {
            return Err(format!(
                "animation.start_x must be finite and non-zero, got {}",
                self.start_x
            ));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(format!(
                "animation.speed must be finite and positive, got {}",
                self.speed
            ));
        }
        if !self.rotation_epsilon.is_finite() {
            return Err("animation.rotation_epsilon must be finite".to_owned());
        }
        Ok(())
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            start_x: -1.5,
            speed: 3.0,
            rotation_epsilon: 0.01,
        }
    }
}
