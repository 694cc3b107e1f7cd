use crate::ray::Ray;
use crate::settings::RenderSettings;
use crate::vec3::{Point3, Vec3};

/// A pinhole camera looking down the -Z axis.
///
/// The image plane is a `horizontal` by `vertical` rectangle, `focal_length`
/// in front of `origin`, with its lower-left corner at `lower_left_corner`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    pub fn new(aspect_ratio: f32, viewport_height: f32, focal_length: f32, origin: Point3) -> Self {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3(viewport_width, 0., 0.);
        let vertical = Vec3(0., viewport_height, 0.);
        let lower_left_corner =
            origin - horizontal / 2. - vertical / 2. - Vec3(0., 0., focal_length);
        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Builds the camera described by `settings`, placed at the world origin.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Camera::new(
            settings.aspect_ratio,
            settings.viewport_height,
            settings.focal_length,
            Vec3::default(),
        )
    }

    /// Returns the ray through the viewport at fractional position `(u, v)`,
    /// where `(0, 0)` is the lower-left corner and `(1, 1)` the upper-right.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.lower_left_corner + u * self.horizontal + v * self.vertical
                - self.origin,
        }
    }

    /// Returns the ray through pixel `(i, j)` of a `width` by `height` image.
    /// Row `j = 0` is at the bottom. The first and last pixel in each direction
    /// land exactly on the viewport edges, so `width` and `height` must both be
    /// at least 2.
    pub fn pixel_ray(&self, i: usize, j: usize, width: usize, height: usize) -> Ray {
        debug_assert!(
            width >= 2 && height >= 2,
            "pixel_ray needs an image of at least 2x2 pixels, got {}x{}",
            width,
            height
        );
        let u = i as f32 / (width - 1) as f32;
        let v = j as f32 / (height - 1) as f32;
        self.get_ray(u, v)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::from_settings(&RenderSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn center_of_viewport_looks_down_minus_z() {
        let cam = Camera::new(2., 2., 1., Vec3::default());
        assert_eq!(cam.get_ray(0.5, 0.5).direction, Vec3(0., 0., -1.));
    }

    #[test]
    fn corners_span_viewport() {
        let cam = Camera::new(16. / 9., 2., 1., Vec3::default());
        let ll = cam.pixel_ray(0, 0, 400, 225).direction;
        let ur = cam.pixel_ray(399, 224, 400, 225).direction;
        assert_abs_diff_eq!(ll.0, -16. / 9., epsilon = 1e-6);
        assert_abs_diff_eq!(ll.1, -1., epsilon = 1e-6);
        assert_abs_diff_eq!(ll.2, -1., epsilon = 1e-6);
        assert_abs_diff_eq!(ur.0, 16. / 9., epsilon = 1e-6);
        assert_abs_diff_eq!(ur.1, 1., epsilon = 1e-6);
        assert_abs_diff_eq!(ur.2, -1., epsilon = 1e-6);
    }

    #[test]
    fn rays_start_at_camera_origin() {
        let origin = Vec3(1., 2., 3.);
        let cam = Camera::new(1., 2., 1., origin);
        assert_eq!(cam.pixel_ray(3, 7, 10, 10).origin, origin);
        // Moving the camera translates the viewport with it.
        assert_eq!(cam.get_ray(0.5, 0.5).direction, Vec3(0., 0., -1.));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least 2x2 pixels, got 0x10")]
    fn pixel_ray_rejects_empty_width() {
        Camera::default().pixel_ray(0, 0, 0, 10);
    }
}
