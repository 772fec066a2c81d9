//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths and
//! through the crate-root re-exports.

/// Generator state is reachable from `rng` and the crate root.
#[test]
fn test_rng_module_exports() {
    use sampler_core::rng::SamplerRng;

    let mut rng = SamplerRng::from_seed(42);
    assert_eq!(rng.seed(), 42);
    let _ = rng.next_uniform_float();
    let _ = rng.next_uniform_int(3).unwrap();

    let _root: sampler_core::SamplerRng = sampler_core::SamplerRng::from_seed(1);
}

/// Types and errors are reachable from `types`.
#[test]
fn test_types_module_exports() {
    use sampler_core::types::{Axes, Colour, SamplerError, Vec2, Vec3};

    let v = Vec2::new(1.0, 2.0);
    assert_eq!(v.axis(1), 2.0);
    let _ = Vec3::ZERO;
    let _ = Colour::rgb(0.0, 0.0, 0.0);
    let err: SamplerError = SamplerError::EmptyCollection;
    assert!(!err.to_string().is_empty());
}

/// Sampling extension trait and config are reachable.
#[test]
fn test_sampling_and_config_exports() {
    use sampler_core::config::{LogLevel, SamplerConfig};
    use sampler_core::sampling::Choose;
    use sampler_core::SamplerRng;

    let config = SamplerConfig {
        seed: Some(5),
        log_level: LogLevel::Debug,
    };
    let mut rng: SamplerRng = config.build_rng();
    let items = [1, 2, 3];
    assert!(items.choose_with(&mut rng).is_ok());
}

/// The default generator is reachable via `global`.
#[test]
fn test_global_module_exports() {
    use sampler_core::global;

    global::set_default_seed(3);
    assert_eq!(global::default_seed(), 3);
    assert!(global::is_initialised());
}
