//! Centralized runtime options with TOML preset support.
//!
//! Animation timing, highlight colours, and camera placement are
//! consolidated here. Options serialize to/from TOML so a preset can be
//! handed to the headless binary or baked into a web build.

mod animation;
mod camera;
mod picking;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use picking::PickingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::KnotpickError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Back-and-forth motion of the animated mesh.
    pub animation: AnimationOptions,
    /// Hover highlight parameters.
    pub picking: PickingOptions,
    /// Camera placement and projection.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Values that would stall the animation or break the projection are
    /// rejected; see [`Options::validate`].
    pub fn from_toml(content: &str) -> Result<Self, KnotpickError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| KnotpickError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check every section for degenerate values.
    ///
    /// # Errors
    ///
    /// [`KnotpickError::OptionsParse`] naming the offending field.
    pub fn validate(&self) -> Result<(), KnotpickError> {
        self.animation
            .validate()
            .and_then(|()| self.camera.validate())
            .map_err(KnotpickError::OptionsParse)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, KnotpickError> {
        let content =
            std::fs::read_to_string(path).map_err(KnotpickError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), KnotpickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| KnotpickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(KnotpickError::Io)?;
        }
        std::fs::write(path, content).map_err(KnotpickError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Color;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
speed = 6.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.speed, 6.0);
        // Everything else should be default
        assert_eq!(opts.animation.start_x, -1.5);
        assert_eq!(opts.picking.flash_rate, 8.0);
        assert_eq!(opts.camera.eye, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn highlight_colours_parse_as_integers() {
        let toml_str = r"
[picking]
highlight_on = 0x00FF00
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.picking.highlight_on, Color::from_hex(0x00FF00));
        assert_eq!(opts.picking.highlight_off, Color::from_hex(0xFF0000));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[animation\nspeed = ").unwrap_err();
        assert!(matches!(err, KnotpickError::OptionsParse(_)));
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn zero_start_x_is_rejected() {
        let err = Options::from_toml("[animation]\nstart_x = 0.0\n")
            .unwrap_err();
        assert!(matches!(err, KnotpickError::OptionsParse(_)));
        assert!(err.to_string().contains("start_x"));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        for speed in ["0.0", "-2.0"] {
            let toml_str = format!("[animation]\nspeed = {speed}\n");
            let err = Options::from_toml(&toml_str).unwrap_err();
            assert!(err.to_string().contains("speed"), "{err}");
        }
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let err = Options::from_toml("[camera]\nznear = 10.0\nzfar = 1.0\n")
            .unwrap_err();
        assert!(err.to_string().contains("znear"));
    }

    #[test]
    fn invalid_file_fails_to_load() {
        let dir = std::env::temp_dir()
            .join(format!("knotpick-invalid-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preset.toml");
        std::fs::write(&path, "[animation]\nspeed = 0.0\n").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(KnotpickError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_segment_lasts_one_second() {
        let anim = AnimationOptions::default();
        assert!((anim.segment_duration_ms() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir()
            .join(format!("knotpick-options-{}", std::process::id()));
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        opts.camera.fovy = 50.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("animation"));
        assert!(props.contains_key("picking"));
        assert!(props.contains_key("camera"));

        let picking = &props["picking"]["properties"];
        assert!(picking.get("flash_rate").is_some());
        assert!(picking.get("highlight_on").is_none());
    }
}
