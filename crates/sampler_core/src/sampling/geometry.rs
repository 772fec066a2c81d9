//! Colours, directions and per-axis vector ranges.

use crate::rng::SamplerRng;
use crate::types::{Axes, Colour, Vec2, Vec3};

impl SamplerRng {
    /// Colour with independent RGB channels in `[0, 1)` and opaque alpha.
    ///
    /// Channels are drawn in `r`, `g`, `b` order.
    #[inline]
    pub fn next_colour(&mut self) -> Colour {
        let r = self.next_float();
        let g = self.next_float();
        let b = self.next_float();
        Colour::rgb(r, g, b)
    }

    /// Direction uniformly distributed over the circle, scaled by `magnitude`.
    ///
    /// Pass `1.0` for a unit vector.
    #[inline]
    pub fn next_direction_2d(&mut self, magnitude: f32) -> Vec2 {
        Vec2::from_angle(self.next_angle()) * magnitude
    }

    /// Planar direction embedded in 3D, scaled by `magnitude`.
    ///
    /// Uses the same single-angle construction as
    /// [`next_direction_2d`](Self::next_direction_2d): `z` is always `0`, so
    /// the result lies on the circle in the xy-plane, not on the sphere.
    #[inline]
    pub fn next_direction_3d(&mut self, magnitude: f32) -> Vec3 {
        Vec3::from(self.next_direction_2d(magnitude))
    }

    /// Uniform point in the axis-aligned box spanned by `min` and `max`.
    ///
    /// Each axis is sampled independently with [`range`](Self::range), in
    /// ascending axis order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::SamplerRng;
    /// use sampler_core::types::Vec3;
    ///
    /// let mut rng = SamplerRng::from_seed(8);
    /// let p = rng.range_vec(Vec3::new(0.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 20.0));
    /// assert!((0.0..1.0).contains(&p.x));
    /// assert!((-1.0..1.0).contains(&p.y));
    /// assert!((10.0..20.0).contains(&p.z));
    /// ```
    #[inline]
    pub fn range_vec<V: Axes>(&mut self, min: V, max: V) -> V {
        V::from_axes(|i| self.range(min.axis(i), max.axis(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_colour_channels_and_alpha() {
        let mut rng = SamplerRng::from_seed(31);
        for _ in 0..1_000 {
            let c = rng.next_colour();
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&channel));
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_direction_2d_magnitude() {
        let mut rng = SamplerRng::from_seed(12);
        for magnitude in [1.0_f32, 0.5, 3.0] {
            for _ in 0..200 {
                let v = rng.next_direction_2d(magnitude);
                assert_relative_eq!(v.length(), magnitude, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_direction_3d_is_planar() {
        let mut rng = SamplerRng::from_seed(12);
        for _ in 0..1_000 {
            let v = rng.next_direction_3d(2.0);
            assert_eq!(v.z, 0.0);
            assert_relative_eq!(v.length(), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_direction_3d_matches_2d_draw() {
        let mut a = SamplerRng::from_seed(66);
        let mut b = SamplerRng::from_seed(66);
        for _ in 0..50 {
            let flat = a.next_direction_2d(1.0);
            let wide = b.next_direction_3d(1.0);
            assert_eq!(Vec3::from(flat), wide);
        }
    }

    #[test]
    fn test_range_vec_arrays_and_degenerate_axis() {
        let mut rng = SamplerRng::from_seed(40);
        for _ in 0..1_000 {
            let p = rng.range_vec([0.0, 5.0, -1.0, 7.0], [1.0, 6.0, 1.0, 7.0]);
            assert!((0.0..1.0).contains(&p[0]));
            assert!((5.0..6.0).contains(&p[1]));
            assert!((-1.0..1.0).contains(&p[2]));
            assert_eq!(p[3], 7.0);
        }
    }

    #[test]
    fn test_range_vec_matches_scalar_ranges() {
        let mut a = SamplerRng::from_seed(90);
        let mut b = SamplerRng::from_seed(90);
        let v = a.range_vec(Vec2::new(-3.0, 2.0), Vec2::new(3.0, 4.0));
        let x = b.range(-3.0, 3.0);
        let y = b.range(2.0, 4.0);
        assert_eq!(v, Vec2::new(x, y));
    }
}
