use crate::error::InvalidVectorError;
use crate::geometry::{HitRecord, Hitable};
use crate::math::{Ray, Vec3};

const PARALLEL_EPSILON: f32 = 0.000001;

/// Infinite plane through `origin`, facing `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    normal: Vec3,
    pub material_id: usize,
}

impl Plane {
    pub fn new(
        origin: Vec3,
        normal: Vec3,
        material_id: usize,
    ) -> Result<Plane, InvalidVectorError> {
        Ok(Plane {
            origin,
            normal: normal.try_normalized()?,
            material_id,
        })
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hitable for Plane {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let denominator = Vec3::dot(r.direction, self.normal);
        if denominator.abs() < PARALLEL_EPSILON {
            return None;
        }
        let time = Vec3::dot(self.origin - r.origin, self.normal) / denominator;
        if t0 <= time && time <= t1 {
            Some(HitRecord::new(
                time,
                r.point_at_parameter(time),
                self.normal,
                self.material_id,
            ))
        } else {
            None
        }
    }
}
