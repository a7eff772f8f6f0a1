use crate::geometry::{HitRecord, Hitable};
use crate::math::{Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vec3,
    pub material_id: usize,
}

impl Sphere {
    pub fn new(radius: f32, origin: Vec3, material_id: usize) -> Sphere {
        Sphere {
            radius,
            origin,
            material_id,
        }
    }

    fn record_at(&self, r: Ray, time: f32) -> HitRecord {
        let point = r.point_at_parameter(time);
        let normal = (point - self.origin) / self.radius;
        HitRecord::new(time, point, normal.normalized(), self.material_id)
    }
}

impl Hitable for Sphere {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.origin;
        let a = Vec3::dot(r.direction, r.direction);
        let b = Vec3::dot(oc, r.direction);
        let c = Vec3::dot(oc, oc) - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant > 0.0 {
            let discriminant_sqrt = discriminant.sqrt();
            let time = (-b - discriminant_sqrt) / a;
            if t0 <= time && time <= t1 {
                return Some(self.record_at(r, time));
            }
            let time = (-b + discriminant_sqrt) / a;
            if t0 <= time && time <= t1 {
                return Some(self.record_at(r, time));
            }
        }
        None
    }
}
