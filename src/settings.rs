//! Compiled-in render configuration.

use lazy_static::lazy_static;

use crate::camera::Camera;
use crate::error::SettingsError;
use crate::scene::Scene;

pub const IMAGE_WIDTH: usize = 400;
pub const ASPECT_RATIO: f32 = 16. / 9.;
pub const VIEWPORT_HEIGHT: f32 = 2.;
pub const FOCAL_LENGTH: f32 = 1.;

lazy_static! {
    /// Camera for `RenderSettings::default()`, at the world origin.
    pub static ref DEFAULT_CAMERA: Camera = Camera::default();
    /// The stock single-sphere scene.
    pub static ref DEFAULT_SCENE: Scene = Scene::single_sphere();
}

/// Image and viewport dimensions for a render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub image_width: usize,
    pub aspect_ratio: f32,
    pub viewport_height: f32,
    pub focal_length: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            image_width: IMAGE_WIDTH,
            aspect_ratio: ASPECT_RATIO,
            viewport_height: VIEWPORT_HEIGHT,
            focal_length: FOCAL_LENGTH,
        }
    }
}

impl RenderSettings {
    /// Height in pixels, rounding down.
    pub fn image_height(&self) -> usize {
        (self.image_width as f32 / self.aspect_ratio) as usize
    }

    /// Checks that the settings describe a renderable image. Pixel-to-viewport
    /// mapping divides by one less than each dimension, so both must be at
    /// least 2. Aspect ratio, viewport height and focal length must be finite
    /// and positive.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.) {
            return Err(SettingsError::AspectRatio(self.aspect_ratio));
        }
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.) {
            return Err(SettingsError::ViewportHeight(self.viewport_height));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.) {
            return Err(SettingsError::FocalLength(self.focal_length));
        }
        let (width, height) = (self.image_width, self.image_height());
        if width < 2 || height < 2 {
            return Err(SettingsError::TooSmall { width, height });
        }
        Ok(())
    }
}
