use log::debug;

use crate::geometry::{HitRecord, Hitable};
use crate::math::Ray;

/// An owned, ordered collection of hitables that behaves as a single hitable.
///
/// Lists can contain other lists, which is how groups are expressed.
#[derive(Default)]
pub struct HitableList {
    pub list: Vec<Box<dyn Hitable>>,
}

impl HitableList {
    pub fn new() -> Self {
        HitableList { list: Vec::new() }
    }

    pub fn add(&mut self, hitable: Box<dyn Hitable>) {
        self.list.push(hitable);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl From<Vec<Box<dyn Hitable>>> for HitableList {
    fn from(list: Vec<Box<dyn Hitable>>) -> Self {
        debug!("building hitable list with {} members", list.len());
        HitableList { list }
    }
}

impl FromIterator<Box<dyn Hitable>> for HitableList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Hitable>>>(iter: I) -> Self {
        HitableList {
            list: iter.into_iter().collect(),
        }
    }
}

impl Hitable for HitableList {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;
        let mut closest_so_far = t1;
        for hitable in self.list.iter() {
            if let Some(record) = hitable.hit(r, t0, closest_so_far) {
                // the interval is closed, so a later member at exactly the current bound still
                // reports a hit. only a strictly closer one may replace the earlier record.
                if nearest.is_none() || record.time < closest_so_far {
                    closest_so_far = record.time;
                    nearest = Some(record);
                }
            }
        }
        nearest
    }
}
