#![deny(unsafe_code)]

pub mod camera;
pub mod error;
pub mod object;
pub mod ray;
pub mod scene;
pub mod settings;
pub mod vec3;

use std::path::Path;

use rayon::prelude::*;

pub use crate::camera::Camera;
pub use crate::error::{Error, Result, SettingsError};
pub use crate::object::{HitRecord, Object, Sphere};
pub use crate::ray::Ray;
pub use crate::scene::{Scene, World};
pub use crate::settings::RenderSettings;
use crate::vec3::{Channel::*, Color, Vec3};

/// Background color at the bottom of the sky gradient.
pub const WHITE: Color = Vec3(1., 1., 1.);
/// Background color at the top of the sky gradient.
pub const SKY_BLUE: Color = Vec3(0.5, 0.7, 1.);

/// Computes the pixel color along `ray` for the scene of objects `world`.
///
/// Surfaces are colored by their outward normal, each component mapped from
/// `[-1, 1]` into `[0, 1]`. Rays that hit nothing get the sky gradient.
pub fn ray_color(world: &impl World, ray: &Ray) -> Color {
    match world.hit_top(ray) {
        Some(hit) => {
            let n = hit.outward_normal().into_unit();
            0.5 * (1. + n)
        }
        None => sky_gradient(ray),
    }
}

/// Blends from white at the bottom to sky blue at the top, by the vertical
/// component of the ray's direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.into_unit();
    let t = 0.5 * (unit_direction.1 + 1.);
    (1. - t) * WHITE + t * SKY_BLUE
}

/// A rectangular buffer of colors.
///
/// Rows are stored top to bottom, but pixel coordinates passed to `get` and to
/// the compute closures put `j = 0` at the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Image(Vec<Vec<Color>>);

impl Image {
    /// Evaluates `f(i, j)` for every pixel, spread over the rayon thread pool.
    /// Each scanline is produced by one task and owned by it until collected.
    pub fn par_compute(nx: usize, ny: usize, f: impl Fn(usize, usize) -> Color + Sync) -> Image {
        Image(
            (0..ny)
                .into_par_iter()
                .rev()
                .map(|y| (0..nx).map(|x| f(x, y)).collect())
                .collect(),
        )
    }

    pub fn compute(nx: usize, ny: usize, mut f: impl FnMut(usize, usize) -> Color) -> Image {
        Image(
            (0..ny)
                .rev()
                .map(|y| (0..nx).map(|x| f(x, y)).collect())
                .collect(),
        )
    }

    pub fn width(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Color of pixel `(i, j)`, counting rows up from the bottom.
    pub fn get(&self, i: usize, j: usize) -> Option<Color> {
        let row = self.height().checked_sub(j + 1)?;
        self.0.get(row)?.get(i).copied()
    }

    /// Scanlines, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Converts to 8 bits per channel, top row first. Channels are clamped to
    /// `[0, 1]` and scaled to `0..=255`; NaN comes out as 0. No gamma
    /// correction is applied.
    pub fn to_rgb8(&self) -> image::RgbImage {
        fn to_u8(x: f32) -> u8 {
            (255.999 * x.clamp(0., 1.)) as u8
        }

        let mut out = image::RgbImage::new(self.width() as u32, self.height() as u32);
        for (y, scanline) in self.rows().enumerate() {
            for (x, col) in scanline.iter().enumerate() {
                let px = image::Rgb([to_u8(col[R]), to_u8(col[G]), to_u8(col[B])]);
                out.put_pixel(x as u32, y as u32, px);
            }
        }
        out
    }

    /// Writes the image to `path`, in the format named by its extension
    /// (`.png` or `.ppm`).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_rgb8().save(path)?;
        Ok(())
    }
}

/// Renders `world` through `camera` at the size given by `settings`, one task
/// per scanline.
pub fn par_render(settings: &RenderSettings, camera: &Camera, world: impl World) -> Result<Image> {
    settings.validate()?;
    let (nx, ny) = (settings.image_width, settings.image_height());
    Ok(Image::par_compute(nx, ny, |i, j| {
        ray_color(&world, &camera.pixel_ray(i, j, nx, ny))
    }))
}

/// Single-threaded `par_render`.
pub fn render(settings: &RenderSettings, camera: &Camera, world: impl World) -> Result<Image> {
    settings.validate()?;
    let (nx, ny) = (settings.image_width, settings.image_height());
    Ok(Image::compute(nx, ny, |i, j| {
        ray_color(&world, &camera.pixel_ray(i, j, nx, ny))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_color_eq(a: Color, b: Color) {
        assert_abs_diff_eq!(a.0, b.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.1, b.1, epsilon = 1e-6);
        assert_abs_diff_eq!(a.2, b.2, epsilon = 1e-6);
    }

    #[test]
    fn straight_ahead_shows_normal_color() {
        let ray = Ray::new(Vec3::default(), Vec3(0., 0., -1.));
        assert_color_eq(ray_color(&Scene::single_sphere(), &ray), Vec3(0.5, 0.5, 1.));
    }

    #[test]
    fn straight_up_is_top_of_sky() {
        let ray = Ray::new(Vec3::default(), Vec3(0., 1., 0.));
        assert_color_eq(ray_color(&Scene::single_sphere(), &ray), SKY_BLUE);
    }

    #[test]
    fn straight_down_is_bottom_of_sky() {
        let ray = Ray::new(Vec3::default(), Vec3(0., -3., 0.));
        assert_color_eq(sky_gradient(&ray), WHITE);
    }

    #[test]
    fn empty_scene_is_all_sky() {
        let ray = Ray::new(Vec3::default(), Vec3(0., 0., -1.));
        assert_color_eq(ray_color(&Scene::new(), &ray), sky_gradient(&ray));
        assert_color_eq(sky_gradient(&ray), Vec3(0.75, 0.85, 1.));
    }

    #[test]
    fn shading_from_inside_uses_outward_normal() {
        // From the sphere's center, looking down -Z, we reach the far wall whose
        // outward normal is (0, 0, -1).
        let ray = Ray::new(Vec3(0., 0., -1.), Vec3(0., 0., -1.));
        assert_color_eq(ray_color(&Scene::single_sphere(), &ray), Vec3(0.5, 0.5, 0.));
    }

    #[test]
    fn image_indexing_counts_rows_from_bottom() {
        let img = Image::compute(3, 2, |i, j| Vec3(i as f32, j as f32, 0.));
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get(2, 0), Some(Vec3(2., 0., 0.)));
        assert_eq!(img.get(1, 1), Some(Vec3(1., 1., 0.)));
        assert_eq!(img.get(3, 0), None);
        assert_eq!(img.get(0, 2), None);
        assert_eq!(img.rows().next().map(|r| r[0]), Some(Vec3(0., 1., 0.)));
    }

    #[test]
    fn parallel_and_serial_render_agree() {
        let settings = RenderSettings {
            image_width: 40,
            ..RenderSettings::default()
        };
        let camera = Camera::from_settings(&settings);
        let scene = Scene::single_sphere();
        let serial = render(&settings, &camera, &scene).unwrap();
        let parallel = par_render(&settings, &camera, &scene).unwrap();
        assert_eq!(serial.width(), 40);
        assert_eq!(serial.height(), 22);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn default_render_has_sphere_in_middle_and_sky_at_corners() {
        let cfg = RenderSettings::default();
        let img = par_render(&cfg, &settings::DEFAULT_CAMERA, &*settings::DEFAULT_SCENE).unwrap();
        assert_eq!((img.width(), img.height()), (400, 225));

        let center = img.get(200, 112).unwrap();
        assert!(center.2 > 0.99 && center.0 > 0.4 && center.0 < 0.6);

        let top_left = img.get(0, 224).unwrap();
        let ray = settings::DEFAULT_CAMERA.pixel_ray(0, 224, 400, 225);
        assert_color_eq(top_left, sky_gradient(&ray));

        for row in img.rows() {
            for c in row {
                for x in [c.0, c.1, c.2] {
                    assert!(x > -1e-6 && x < 1. + 1e-6, "channel out of range: {}", x);
                }
            }
        }
    }

    #[test]
    fn render_rejects_bad_settings() {
        let settings = RenderSettings {
            image_width: 1,
            ..RenderSettings::default()
        };
        let err = render(&settings, &Camera::default(), Scene::new()).unwrap_err();
        assert!(matches!(err, Error::Settings(SettingsError::TooSmall { .. })));
    }

    #[test]
    fn rgb8_conversion_clamps_and_keeps_row_order() {
        let img = Image::compute(2, 2, |i, j| match (i, j) {
            (0, 1) => Vec3(1., 0., 0.),
            (1, 1) => Vec3(0., 1., 0.),
            (0, 0) => Vec3(0., 0., 1.),
            _ => Vec3(2., -1., f32::NAN),
        });
        let rgb = img.to_rgb8();
        assert_eq!(rgb.dimensions(), (2, 2));
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 255, 0]);
        assert_eq!(rgb.get_pixel(0, 1).0, [0, 0, 255]);
        assert_eq!(rgb.get_pixel(1, 1).0, [255, 0, 0]);

        let grey = Image::compute(1, 1, |_, _| Vec3::from(0.5));
        assert_eq!(grey.to_rgb8().get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn saved_png_reads_back() {
        let img = Image::compute(4, 3, |i, j| Vec3(i as f32 / 3., j as f32 / 2., 0.25));
        let path = std::env::temp_dir()
            .join(format!("raycast-{}-roundtrip.png", std::process::id()));
        img.save(&path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, img.to_rgb8());
    }

    #[test]
    fn save_rejects_unknown_extension() {
        let img = Image::compute(2, 2, |_, _| WHITE);
        let path = std::env::temp_dir().join(format!("raycast-{}.unknown", std::process::id()));
        let res = img.save(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(res, Err(Error::Image(_))));
    }
}
