//! Value and error types shared across the crate.

mod error;
mod vector;

pub use error::SamplerError;
pub use vector::{Axes, Colour, Vec2, Vec3};
