use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SceneError},
    geometry::{Hitable, HitableList, Plane, Sphere},
    math::Vec3,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: Vec3,
        radius: f32,
        #[serde(default)]
        material: usize,
    },
    Plane {
        origin: Vec3,
        normal: Vec3,
        #[serde(default)]
        material: usize,
    },
    Group {
        children: Vec<PrimitiveData>,
    },
}

impl PrimitiveData {
    pub fn transform(self) -> Result<Box<dyn Hitable>> {
        match self {
            Self::Sphere {
                origin,
                radius,
                material,
            } => {
                if !(radius > 0.0 && radius.is_finite()) {
                    return Err(SceneError::InvalidPrimitive(format!(
                        "sphere at {:?} has radius {}",
                        origin, radius
                    )));
                }
                Ok(Box::new(Sphere::new(radius, origin, material)))
            }
            Self::Plane {
                origin,
                normal,
                material,
            } => Ok(Box::new(Plane::new(origin, normal, material)?)),
            Self::Group { children } => Ok(Box::new(transform_all(children)?)),
        }
    }
}

pub fn transform_all(primitives: Vec<PrimitiveData>) -> Result<HitableList> {
    primitives
        .into_iter()
        .map(PrimitiveData::transform)
        .collect::<Result<Vec<_>>>()
        .map(HitableList::from)
}
