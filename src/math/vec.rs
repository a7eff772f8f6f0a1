use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use crate::error::InvalidVectorError;

// left handed coordinate system, z axis goes up.
// x is forward, y is right.
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Vec3 {
    pub fn dot(v1: Vec3, v2: Vec3) -> f32 {
        v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
    }

    // component order and signs matter here, flipping any of them flips every normal built from it.
    pub fn cross(v1: Vec3, v2: Vec3) -> Vec3 {
        Vec3::new(
            v1.y * v2.z - v1.z * v2.y,
            -(v1.x * v2.z - v1.z * v2.x),
            v1.x * v2.y - v1.y * v2.x,
        )
    }

    pub fn sqr_size(&self) -> f32 {
        Vec3::dot(*self, *self)
    }

    pub fn size(&self) -> f32 {
        self.sqr_size().sqrt()
    }

    /// Divides each component by `size()` in place.
    /// A zero vector ends up with non-finite components, use [`Vec3::try_normalized`] to catch that.
    pub fn normalize(&mut self) {
        *self /= self.size();
    }

    pub fn normalized(&self) -> Self {
        *self / self.size()
    }

    pub fn try_normalized(&self) -> Result<Self, InvalidVectorError> {
        let size = self.size();
        if size == 0.0 || !size.is_finite() {
            return Err(InvalidVectorError {
                x: self.x,
                y: self.y,
                z: self.z,
            });
        }
        Ok(*self / size)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::ZERO
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

// componentwise. use Vec3::dot for the dot product
impl Mul for Vec3 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl MulAssign for Vec3 {
    fn mul_assign(&mut self, other: Vec3) {
        *self = *self * other;
    }
}

impl Div for Vec3 {
    type Output = Vec3;
    fn div(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl DivAssign for Vec3 {
    fn div_assign(&mut self, other: Vec3) {
        *self = *self / other;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, other: f32) {
        *self = *self / other;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn random_vec() -> Vec3 {
        Vec3::new(
            rand::random::<f32>() * 200.0 - 100.0,
            rand::random::<f32>() * 200.0 - 100.0,
            rand::random::<f32>() * 200.0 - 100.0,
        )
    }

    fn close(a: Vec3, b: Vec3, tolerance: f32) -> bool {
        (a - b).size() <= tolerance
    }

    #[test]
    fn test_add_then_sub() {
        for _ in 0..1000 {
            let (a, b) = (random_vec(), random_vec());
            assert!(close(a + b - b, a, 0.0001), "{:?} {:?}", a, b);
        }
    }

    #[test]
    fn test_dot_commutes() {
        for _ in 0..1000 {
            let (a, b) = (random_vec(), random_vec());
            assert_eq!(Vec3::dot(a, b), Vec3::dot(b, a));
        }
    }

    #[test]
    fn test_cross_anticommutes() {
        for _ in 0..1000 {
            let (a, b) = (random_vec(), random_vec());
            assert_eq!(Vec3::cross(a, b), -Vec3::cross(b, a));
        }
    }

    #[test]
    fn test_cross_of_axes() {
        assert_eq!(Vec3::cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::cross(Vec3::Y, Vec3::Z), Vec3::X);
        assert_eq!(Vec3::cross(Vec3::Z, Vec3::X), Vec3::Y);
        assert_eq!(Vec3::cross(Vec3::Y, Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_cross_components() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(Vec3::cross(a, b), Vec3::new(-3.0, 6.0, -3.0));
        let c = Vec3::cross(a, b);
        assert_eq!(Vec3::dot(c, a), 0.0);
        assert_eq!(Vec3::dot(c, b), 0.0);
    }

    #[test]
    fn test_constants_are_identities() {
        for _ in 0..100 {
            let v = random_vec();
            assert_eq!(Vec3::ZERO + v, v);
            assert_eq!(Vec3::ONE * v, v);
        }
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(Vec3::default(), Vec3::ZERO);
    }

    #[test]
    fn test_scalar_mul_commutes() {
        for _ in 0..100 {
            let v = random_vec();
            let s = rand::random::<f32>() * 10.0 - 5.0;
            assert_eq!(s * v, v * s);
        }
    }

    #[test]
    fn test_sizes() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.sqr_size(), 49.0);
        assert_eq!(v.sqr_size(), Vec3::dot(v, v));
        assert_eq!(v.size(), 7.0);
    }

    #[test]
    fn test_normalized_has_unit_size() {
        for _ in 0..1000 {
            let v = random_vec();
            if v.sqr_size() == 0.0 {
                continue;
            }
            let n = v.normalized();
            assert!((n.size() - 1.0).abs() < 0.00001, "{:?} {:?}", v, n);

            let mut m = v;
            m.normalize();
            assert_eq!(m, n);
        }
    }

    #[test]
    fn test_zero_normalization() {
        let n = Vec3::ZERO.normalized();
        assert!(!n.is_finite(), "{:?}", n);

        let mut m = Vec3::ZERO;
        m.normalize();
        assert!(!m.is_finite(), "{:?}", m);

        assert!(Vec3::ZERO.try_normalized().is_err());
        assert!(Vec3::new(f32::INFINITY, 0.0, 0.0).try_normalized().is_err());
        assert_eq!(
            Vec3::new(0.0, 0.0, 4.0).try_normalized().unwrap(),
            Vec3::Z
        );
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Vec3::new(2.0, 4.0, 8.0);
        let b = Vec3::new(1.0, 2.0, 4.0);
        assert_eq!(a * b, Vec3::new(2.0, 8.0, 32.0));
        assert_eq!(a / b, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(a / 2.0, b);
        assert_eq!(-a, Vec3::new(-2.0, -4.0, -8.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec3::new(3.0, 6.0, 12.0));
        c -= b;
        assert_eq!(c, a);
        c *= b;
        assert_eq!(c, a * b);
        c /= b;
        assert_eq!(c, a);
        c *= 0.5;
        assert_eq!(c, b);
        c /= 0.5;
        assert_eq!(c, a);
    }

    #[test]
    fn test_serde_as_array() {
        let v: Vec3 = serde_json::from_str("[1.0, -2.0, 3.5]").unwrap();
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,-2.0,3.5]");
    }
}
