//! # Sampling Layer
//!
//! Higher-level distributions built only on the two primitives of
//! [`SamplerRng`](crate::rng::SamplerRng). Every operation here is an
//! inherent method on the generator, so the generator stays the only state.
//!
//! ## Module Structure
//!
//! - [`scalar`]: booleans, floats, integers, angles, ranges and chance rolls
//! - [`geometry`]: colours, 2D/3D directions and per-axis vector ranges
//! - [`collection`]: uniform, non-destructive choice from a collection
//!
//! ## Bounds
//!
//! | Operation | Result |
//! |---|---|
//! | `next_float()` | `[0, 1)` |
//! | `next_float_max(max)` | `[0, max)`, or `(max, 0]` for negative `max` |
//! | `next_int(max)` | `[0, max)`; `max <= 0` is an error |
//! | `next_angle()` | `[0, 2π)` |
//! | `range(min, max)` | `[min, max)` when `min < max`; `min` when equal |
//! | `signed_unit()` | `[-1, 1)` |
//! | `signed_one()` | `-1` or `1` |

pub mod collection;
pub mod geometry;
pub mod scalar;

pub use collection::Choose;
