use serde::{Deserialize, Serialize};

use crate::error::InvalidVectorError;
use crate::math::{Ray, Vec3};

/// Orthographic camera. Every ray shares `direction`, origins are spread over the image plane.
pub struct Camera {
    pub origin: Vec3,
    pub direction: Vec3,
    pub side: Vec3,
    pub up: Vec3,
    pub factor: f32,
    pub aspect_ratio: f32,
}

impl Camera {
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        up: Vec3,
        factor: f32,
        aspect_ratio: f32,
    ) -> Result<Camera, InvalidVectorError> {
        let direction = (look_at - look_from).try_normalized()?;
        // left handed, so right = up x forward
        let side = Vec3::cross(up, direction).try_normalized()?;
        let real_up = Vec3::cross(direction, side).try_normalized()?;
        Ok(Camera {
            origin: look_from,
            direction,
            side,
            up: real_up,
            factor,
            aspect_ratio,
        })
    }

    pub fn get_ray(&self, mut pixel_uv: (f32, f32)) -> Ray {
        // pixel_uv values range from 0 to 1, in the style of uv coordinates.
        pixel_uv.0 = (pixel_uv.0 - 0.5) * self.factor;
        pixel_uv.1 = (pixel_uv.1 - 0.5) * self.factor;

        let origin =
            self.origin + pixel_uv.0 * self.aspect_ratio * self.side + pixel_uv.1 * self.up;

        Ray::new(origin, self.direction)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraData {
    pub look_from: Vec3,
    pub look_at: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    pub factor: f32,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f32,
}

fn default_up() -> Vec3 {
    Vec3::Z
}

fn default_aspect_ratio() -> f32 {
    1.0
}

impl CameraData {
    pub fn build(&self) -> Result<Camera, InvalidVectorError> {
        Camera::new(
            self.look_from,
            self.look_at,
            self.up,
            self.factor,
            self.aspect_ratio,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_basis_is_left_handed_z_up() {
        let camera = Camera::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO, Vec3::Z, 2.0, 1.0).unwrap();
        assert_eq!(camera.direction, Vec3::X);
        assert_eq!(camera.side, Vec3::Y);
        assert_eq!(camera.up, Vec3::Z);
    }

    #[test]
    fn test_get_ray() {
        let camera = Camera::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO, Vec3::Z, 2.0, 1.0).unwrap();
        let center = camera.get_ray((0.5, 0.5));
        assert_eq!(center.origin, Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(center.direction, Vec3::X);

        let corner = camera.get_ray((1.0, 1.0));
        assert_eq!(corner.origin, Vec3::new(-10.0, 1.0, 1.0));
        assert_eq!(corner.direction, Vec3::X);
    }

    #[test]
    fn test_degenerate_camera() {
        assert!(Camera::new(Vec3::ZERO, Vec3::ZERO, Vec3::Z, 1.0, 1.0).is_err());
        // looking straight along up
        assert!(Camera::new(Vec3::ZERO, Vec3::Z, Vec3::Z, 1.0, 1.0).is_err());
    }
}
