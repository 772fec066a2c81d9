//! Plain value types filled by the sampling layer.
//!
//! Host engines carry their own vector and colour types. These are minimal
//! stand-ins that convert to and from arrays, so a host can move sampled
//! components into its own representation without depending on this crate's
//! types beyond the call site.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Component-wise access shared by vector-like values.
///
/// Implemented for [`Vec2`], [`Vec3`] and `[f32; N]`. Used by
/// [`SamplerRng::range_vec`](crate::rng::SamplerRng::range_vec) to sample each
/// axis independently.
pub trait Axes: Copy {
    /// Number of components.
    const DIM: usize;

    /// Returns the component at `index` (`0..DIM`).
    fn axis(&self, index: usize) -> f32;

    /// Builds a value by calling `f` once per axis, in ascending index order.
    fn from_axes<F: FnMut(usize) -> f32>(f: F) -> Self;
}

/// Two-dimensional vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `radians`, measured anticlockwise from +x.
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Three-dimensional vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
    /// Depth component; `0` for planar directions.
    pub z: f32,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

// Same embedding a host engine applies when widening a 2D vector: z = 0.
impl From<Vec2> for Vec3 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vec3::new(v.x, v.y, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// RGBA colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel; `1` is fully opaque.
    pub a: f32,
}

impl Colour {
    /// Fully opaque colour from RGB channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from all four channels.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Colour> for [f32; 4] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl Axes for Vec2 {
    const DIM: usize = 2;

    #[inline]
    fn axis(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => panic!("Vec2 axis index {} out of range", index),
        }
    }

    #[inline]
    fn from_axes<F: FnMut(usize) -> f32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        Vec2::new(x, y)
    }
}

impl Axes for Vec3 {
    const DIM: usize = 3;

    #[inline]
    fn axis(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Vec3 axis index {} out of range", index),
        }
    }

    #[inline]
    fn from_axes<F: FnMut(usize) -> f32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Vec3::new(x, y, z)
    }
}

impl<const N: usize> Axes for [f32; N] {
    const DIM: usize = N;

    #[inline]
    fn axis(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn from_axes<F: FnMut(usize) -> f32>(f: F) -> Self {
        std::array::from_fn(f)
    }
}
