use std::ops::Range;

use crate::object::{HitRecord, Object, Sphere};
use crate::ray::Ray;
use crate::vec3::Vec3;

/// Lower bound on `t` for primary rays. The smallest positive float, so a
/// surface passing exactly through the ray origin doesn't count as hit.
pub const NEAR: f32 = f32::MIN_POSITIVE;

/// Something a ray can be cast into, finding the first surface in front of the
/// ray origin.
pub trait World: Send + Sync {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord>;
}

impl<'r, T: World + ?Sized> World for &'r T {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        (*self).hit_top(ray)
    }
}

impl World for [Box<dyn Object>] {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        nearest_hit(self, ray, NEAR..f32::INFINITY)
    }
}

/// Finds the closest hit among `objects` within `t_range`.
///
/// Each object is tested against a range whose upper end is the nearest hit
/// found so far, so any later hit is automatically closer and replaces the
/// current one outright. Among hits at exactly equal `t`, the first object in
/// iteration order wins.
fn nearest_hit<'a, O: Object + 'a>(
    objects: impl IntoIterator<Item = &'a O>,
    ray: &Ray,
    mut t_range: Range<f32>,
) -> Option<HitRecord> {
    let mut hit = None;
    for obj in objects {
        if let Some(rec) = obj.hit(ray, t_range.clone()) {
            t_range.end = rec.t;
            hit = Some(rec);
        }
    }
    hit
}

/// An ordered collection of objects, scanned linearly for hits.
///
/// Order only affects which of several exactly-coincident hits is reported.
/// Objects can be added but not removed.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Box<dyn Object>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock scene: one sphere of radius 0.5 sitting one unit in front of
    /// the default camera.
    pub fn single_sphere() -> Self {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3(0., 0., -1.), 0.5));
        scene
    }

    /// Appends `object` to the scene.
    pub fn add(&mut self, object: impl Object + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Box<dyn Object>> for Scene {
    fn from_iter<I: IntoIterator<Item = Box<dyn Object>>>(iter: I) -> Self {
        Scene {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Object for Scene {
    fn hit(&self, ray: &Ray, t_range: Range<f32>) -> Option<HitRecord> {
        nearest_hit(&self.objects, ray, t_range)
    }
}

impl World for Scene {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        self.hit(ray, NEAR..f32::INFINITY)
    }
}
