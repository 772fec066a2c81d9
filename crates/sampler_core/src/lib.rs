//! # Sampler Core
//!
//! Deterministic uniform sampling from a single seedable generator.
//!
//! ## Components
//!
//! - [`rng`]: Generator State. Owns the PCG-64 bit source and exposes two
//!   primitives, a bounded integer and a float in `[0, 1)`
//! - [`sampling`]: Sampling Layer. Angles, directions, ranges, colours,
//!   chance rolls and collection choice, built only on those primitives
//! - [`types`]: value types (`Vec2`, `Vec3`, `Colour`) and `SamplerError`
//! - [`global`]: optional per-thread default generator, clock-seeded on first use
//! - [`config`]: TOML and environment configuration
//!
//! Data flows one way: sampling calls the generator, never the reverse.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! let hit = rng.chance(0.25);
//! let crit = rng.chance_percent(5);
//! let heading = rng.next_direction_2d(1.0);
//! let spawn = rng.range(-10.0, 10.0);
//! let loot = *rng.choose(&["sword", "shield", "potion"]).unwrap();
//! # let _ = (hit, crit, heading, spawn, loot);
//! ```
//!
//! ## Known Constraints
//!
//! - Not cryptographically secure
//! - Uniform distributions only
//! - `next_direction_3d` is planar (z = 0), not a uniform sphere sample

pub mod config;
pub mod global;
pub mod rng;
pub mod sampling;
pub mod types;

pub use config::{ConfigError, SamplerConfig};
pub use rng::SamplerRng;
pub use sampling::Choose;
pub use types::{Axes, Colour, SamplerError, Vec2, Vec3};
