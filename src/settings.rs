//! Engine configuration.
//!
//! A plain record handed to the engine at construction and treated as
//! read-only for the lifetime of each frame.

use std::error::Error;
use std::fmt;

/// Immutable engine settings, validated once when the engine is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineSettings {
    /// Number of discrete shading levels per light. Higher is smoother;
    /// a low value gives the banded look of early color-limited
    /// renderers.
    pub color_depth: usize,
    /// Distance beyond which a point light stops contributing.
    pub light_distance_cutoff: f32,
    /// Cell size of the output pixel grid that projected vertices snap
    /// to.
    pub screen_scale: f32,
    /// Disable to skip the near-plane and viewport-edge clips; useful
    /// when verifying that clipping behaves as expected.
    pub clipping_enabled: bool,
    /// Near plane used by the projection matrix.
    pub camera_near: f32,
    /// Far plane used by the projection matrix.
    pub camera_far: f32,
    /// Field of view in degrees.
    pub camera_fov_degrees: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            color_depth: 100,
            light_distance_cutoff: 10.0,
            screen_scale: 2.0,
            clipping_enabled: true,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_fov_degrees: 90.0,
        }
    }
}

impl EngineSettings {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.color_depth == 0 {
            return Err(SettingsError::ColorDepth);
        }
        if !(self.light_distance_cutoff >= 0.0) {
            return Err(SettingsError::LightDistanceCutoff);
        }
        if !(self.screen_scale > 0.0) {
            return Err(SettingsError::ScreenScale);
        }
        if !(self.camera_near < self.camera_far) {
            return Err(SettingsError::CameraPlanes);
        }
        if !(self.camera_fov_degrees > 0.0 && self.camera_fov_degrees < 180.0) {
            return Err(SettingsError::FieldOfView);
        }
        Ok(())
    }
}

/// A settings field was outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    ColorDepth,
    LightDistanceCutoff,
    ScreenScale,
    CameraPlanes,
    FieldOfView,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SettingsError::ColorDepth => "color_depth must be greater than zero",
            SettingsError::LightDistanceCutoff => {
                "light_distance_cutoff must be finite and non-negative"
            }
            SettingsError::ScreenScale => "screen_scale must be finite and positive",
            SettingsError::CameraPlanes => "camera_near must be less than camera_far",
            SettingsError::FieldOfView => "camera_fov_degrees must be in (0, 180)",
        };
        f.write_str(message)
    }
}

impl Error for SettingsError {}
