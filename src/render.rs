//! Casts one ray per pixel through a scene and keeps the nearest hit of each.
//!
//! Nothing here shades. The recorded hits are exported as a normal map (PNG) and a
//! parametric depth map (EXR) for whatever does the shading downstream.

use std::{path::Path, sync::Mutex};

use image::{Rgb, RgbImage};
use log::{debug, info};
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::{
    error::Result,
    geometry::{HitRecord, Hitable},
    math::Vec3,
    parsing::Scene,
};

pub struct HitBuffer {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<Option<HitRecord>>,
}

impl HitBuffer {
    pub fn new(width: usize, height: usize) -> HitBuffer {
        HitBuffer {
            width,
            height,
            buffer: vec![None; width * height],
        }
    }

    pub fn at(&self, x: usize, y: usize) -> Option<HitRecord> {
        self.buffer[y * self.width + x]
    }

    pub fn hit_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.is_some()).count()
    }
}

/// Casts `width * height` rays in parallel. Each worker only reads the scene.
pub fn cast(scene: &Scene, width: usize, height: usize, show_progress: bool) -> HitBuffer {
    let mut film = HitBuffer::new(width, height);
    let progress = if show_progress {
        Some(Mutex::new(ProgressBar::new(height as u64)))
    } else {
        None
    };

    film.buffer
        .par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            for (x, e) in row.iter_mut().enumerate() {
                // row 0 is the top of the image
                let (s, t) = (
                    (x as f32 + 0.5) / (width as f32),
                    1.0 - (y as f32 + 0.5) / (height as f32),
                );
                let ray = scene.camera.get_ray((s, t));
                *e = scene.world.hit(ray, scene.t_min, scene.t_max);
            }
            if let Some(progress) = &progress {
                if let Ok(mut bar) = progress.lock() {
                    bar.inc();
                }
            }
        });

    if let Some(progress) = progress {
        if let Ok(mut bar) = progress.into_inner() {
            bar.finish();
        }
    }
    info!("cast {} rays, {} hit", width * height, film.hit_count());
    film
}

pub fn write_normals_png(film: &HitBuffer, path: &Path) -> Result<()> {
    let image = RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        match film.at(x as usize, y as usize) {
            Some(record) => {
                let n = (record.normal + Vec3::ONE) * 0.5;
                Rgb([to_byte(n.x), to_byte(n.y), to_byte(n.z)])
            }
            None => Rgb([0, 0, 0]),
        }
    });
    debug!("writing normals to {}", path.display());
    image.save(path)?;
    Ok(())
}

pub fn write_depth_exr(film: &HitBuffer, path: &Path) -> Result<()> {
    debug!("writing depth to {}", path.display());
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        let t = film.at(x, y).map(|record| record.time).unwrap_or(0.0);
        (t, t, t)
    })?;
    Ok(())
}

fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
