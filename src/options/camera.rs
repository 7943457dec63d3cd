use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement and projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position in world space.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Look-at target in world space.
    #[schemars(skip)]
    pub target: [f32; 3],
}

impl CameraOptions {
    /// Reject projections that cannot be inverted for picking.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(format!(
                "camera.fovy must lie in (0, 180) degrees, got {}",
                self.fovy
            ));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(format!(
                "camera clip planes need 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            ));
        }
        if Vec3::from_array(self.eye) == Vec3::from_array(self.target) {
            return Err("camera.eye and camera.target coincide".to_owned());
        }
        Ok(())
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}
