mod ray;
mod vec;

pub use ray::*;
pub use vec::*;
