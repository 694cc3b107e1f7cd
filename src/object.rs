use std::ops::Range;

use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// An object in a scene.
///
/// The primary purpose of an `Object` is to interact with rays using the `hit`
/// method.
pub trait Object: std::fmt::Debug + Sync + Send {
    /// Tests if `ray` intersects the object `self`, and if so, if that
    /// intersection occurs within `t_range` along the ray. (Recall that `Ray`
    /// is defined in terms of a `t` value that refers to points along the ray.)
    ///
    /// `t_range` is half-open: a hit at exactly `t_range.start` counts, one at
    /// exactly `t_range.end` does not.
    ///
    /// The range serves two purposes. First, if the intersection occurs at
    /// *negative* `t`, the object is behind the ray origin and the
    /// intersection is an illusion. Second, while the upper end of `t_range`
    /// starts out large, callers scanning several objects pull it down as they
    /// find hits. Once we've found an object at position `t`, we can ignore any
    /// objects at positions greater than `t`.
    fn hit(&self, ray: &Ray, t_range: Range<f32>) -> Option<HitRecord>;
}

impl<T: Object + ?Sized> Object for Box<T> {
    #[inline]
    fn hit(&self, ray: &Ray, t_range: Range<f32>) -> Option<HitRecord> {
        (**self).hit(ray, t_range)
    }
}

/// A description of a `Ray` hitting an `Object`.
///
/// `normal` always opposes the direction of travel of the ray that produced
/// the hit (or is perpendicular to it, for a grazing hit). `front_face` records
/// whether that meant keeping the surface's outward normal or flipping it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    /// Position along the ray, as an actual point.
    pub p: Point3,
    /// Surface normal at `p`, facing back toward the ray.
    pub normal: Vec3,
    /// Position along the ray, expressed as the ray parameter.
    pub t: f32,
    /// True if the ray struck the outward-facing side of the surface.
    pub front_face: bool,
}

impl HitRecord {
    /// Builds the record for `ray` striking a surface at parameter `t`, where
    /// the surface's outward normal at that point is `outward_normal`.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3) -> Self {
        let mut rec = HitRecord {
            p: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Orients `normal` against `ray`, and sets `front_face` to say whether the
    /// ray approached from outside the surface.
    ///
    /// `outward_normal` is assumed to be unit length.
    #[inline]
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction.dot(outward_normal) < 0.;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    /// Recovers the surface's outward normal, undoing the flip applied by
    /// `set_face_normal` for hits from the inside.
    #[inline]
    pub fn outward_normal(&self) -> Vec3 {
        if self.front_face {
            self.normal
        } else {
            -self.normal
        }
    }
}

/// A sphere.
///
/// `radius` should be positive. A zero radius makes the outward normal 0/0, and
/// a negative one turns the sphere inside out; neither is checked, and the
/// resulting NaNs or flipped normals are passed through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Self {
        Sphere { center, radius }
    }
}

impl Object for Sphere {
    #[inline]
    fn hit(&self, ray: &Ray, t_range: Range<f32>) -> Option<HitRecord> {
        // Substituting the ray into |p - center|^2 = radius^2 gives a quadratic
        // in t. We use the half-b form, which drops a few factors of two.
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0. {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        // Nearer root first, so a ray entering the sphere reports the entry
        // point rather than the exit.
        for &t in &[(-half_b - sqrtd) / a, (-half_b + sqrtd) / a] {
            if t >= t_range.start && t < t_range.end {
                let outward_normal = (ray.at(t) - self.center) / self.radius;
                return Some(HitRecord::new(ray, t, outward_normal));
            }
        }
        None
    }
}
