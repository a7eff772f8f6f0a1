use super::Vec3;

/// A half line `origin + t * direction`.
///
/// `direction` does not need to be unit length. When it isn't, `t` is a ray parameter
/// and not a distance, but the point returned by [`Ray::point_at_parameter`] is the same.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }
    pub fn point_at_parameter(self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Vec3::ZERO, Vec3::X)
    }
}
