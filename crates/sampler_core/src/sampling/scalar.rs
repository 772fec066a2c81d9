//! Scalar samples and chance rolls.

use std::f32::consts::TAU;

use crate::rng::SamplerRng;
use crate::types::SamplerError;

impl SamplerRng {
    /// Returns `true` or `false` with probability 0.5 each.
    ///
    /// Draws from `{0, 1}` and maps `0` to `true`.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.draw_below(2) == 0
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.next_uniform_float()
    }

    /// Uniform float between `0` (inclusive) and `max` (exclusive).
    ///
    /// For negative `max` the interval is `(max, 0]`.
    #[inline]
    pub fn next_float_max(&mut self, max: f32) -> f32 {
        let value = self.next_float() * max;
        // Subnormal and tiny bounds can round the product onto `max`.
        if (max > 0.0 && value >= max) || (max < 0.0 && value <= max) {
            toward_zero(max)
        } else {
            value
        }
    }

    /// Uniform integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidArgument`] if `max <= 0`.
    #[inline]
    pub fn next_int(&mut self, max: i32) -> Result<i32, SamplerError> {
        self.next_uniform_int(max)
    }

    /// Uniform angle in radians, `[0, 2π)`.
    #[inline]
    pub fn next_angle(&mut self) -> f32 {
        self.next_float_max(TAU)
    }

    /// Uniform float between `min` (inclusive) and `max` (exclusive).
    ///
    /// Returns `min` when the bounds are equal. Reversed bounds are not an
    /// error: the result then lies in `(max, min]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::SamplerRng;
    ///
    /// let mut rng = SamplerRng::from_seed(3);
    /// let x = rng.range(-2.0, 5.0);
    /// assert!((-2.0..5.0).contains(&x));
    /// assert_eq!(rng.range(1.5, 1.5), 1.5);
    /// ```
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let value = min + self.next_float_max(max - min);
        // The addition can round onto the excluded bound.
        if min < max && value >= max {
            float_below(max)
        } else {
            value
        }
    }

    /// Uniform float in `[-1, 1)`.
    #[inline]
    pub fn signed_unit(&mut self) -> f32 {
        self.next_float_max(2.0) - 1.0
    }

    /// Either `-1` or `1`, equally likely.
    #[inline]
    pub fn signed_one(&mut self) -> i32 {
        if self.next_bool() {
            -1
        } else {
            1
        }
    }

    /// Rolls a chance with probability `probability` in `[0, 1]`.
    ///
    /// `chance(1.0)` is always `true`, `chance(0.0)` always `false`.
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_float() < probability
    }

    /// Rolls a chance expressed as an integer percentage, `0..=100`.
    ///
    /// Compares an integer draw from `[0, 100)` against `percent`, so
    /// `chance_percent(100)` is always `true` and `chance_percent(0)` always
    /// `false`. Consumes the bit source differently from [`chance`](Self::chance).
    #[inline]
    pub fn chance_percent(&mut self, percent: i32) -> bool {
        self.draw_below(100) < percent
    }
}

/// Next `f32` toward zero from a non-zero `x`.
fn toward_zero(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}

/// Largest `f32` strictly below a finite `x`.
fn float_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}
