use crate::math::{Ray, Vec3};

mod list;
mod plane;
mod sphere;

pub use list::HitableList;
pub use plane::Plane;
pub use sphere::Sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Vec3,
    // unit length. primitives are responsible for this, aggregates pass it through as is.
    pub normal: Vec3,
    pub material_id: usize,
}

impl HitRecord {
    pub fn new(time: f32, point: Vec3, normal: Vec3, material_id: usize) -> Self {
        HitRecord {
            time,
            point,
            normal,
            material_id,
        }
    }
}

/// Anything a ray can be tested against.
///
/// `Send + Sync` so that one scene root can be shared by reference between ray casting threads.
/// Implementations must not mutate anything during `hit`.
pub trait Hitable: Send + Sync {
    /// Returns the intersection with `r` whose parameter lies in the closed interval `[t0, t1]`,
    /// or `None` if there isn't one.
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;
}
