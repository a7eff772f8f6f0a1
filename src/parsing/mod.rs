//! Scene description files.
//!
//! A scene is a JSON document holding the camera, the parametric range rays are cast over,
//! and a tree of primitives. `Group` entries become nested [`HitableList`]s.

mod primitives;

use std::{fs::File, io::Read, path::Path};

use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    camera::{Camera, CameraData},
    error::{Result, SceneError},
    geometry::HitableList,
};

fn default_t_min() -> f32 {
    0.001
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    pub camera: CameraData,
    #[serde(default = "default_t_min")]
    pub t_min: f32,
    // json has no infinity, so a missing upper bound means unbounded
    #[serde(default)]
    pub t_max: Option<f32>,
    pub primitives: Vec<PrimitiveData>,
}

pub struct Scene {
    pub camera: Camera,
    pub t_min: f32,
    pub t_max: f32,
    pub world: HitableList,
}

impl TryFrom<SceneData> for Scene {
    type Error = SceneError;
    fn try_from(data: SceneData) -> Result<Self> {
        let t_min = data.t_min;
        let t_max = data.t_max.unwrap_or(f32::INFINITY);
        if t_min.is_nan() || t_max.is_nan() || t_min > t_max {
            return Err(SceneError::InvalidPrimitive(format!(
                "ray interval [{}, {}] is empty",
                t_min, t_max
            )));
        }
        let camera = data.camera.build()?;
        let world = transform_all(data.primitives)?;
        Ok(Scene {
            camera,
            t_min,
            t_max,
            world,
        })
    }
}

pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_scene(path: &Path) -> Result<Scene> {
    info!("loading scene from {}", path.display());
    let scene = Scene::try_from(load_json::<SceneData>(path)?)?;
    info!(
        "loaded {} top level primitives, casting over [{}, {}]",
        scene.world.len(),
        scene.t_min,
        scene.t_max
    );
    Ok(scene)
}
