//! Per-thread default generator.
//!
//! For callers that do not want to thread a [`SamplerRng`] through their code.
//! Each thread owns its own generator, created from the clock the first time
//! that thread touches it unless a seed was set first. Nothing is shared
//! between threads, so there is no data race on the bit source.
//!
//! ```rust
//! use sampler_core::global;
//!
//! global::set_default_seed(42);
//! let a = global::with_default(|rng| rng.next_int(10).unwrap());
//!
//! global::set_default_seed(42);
//! let b = global::with_default(|rng| rng.next_int(10).unwrap());
//! assert_eq!(a, b);
//! ```

use std::cell::RefCell;

use crate::rng::SamplerRng;

thread_local! {
    static DEFAULT_RNG: RefCell<Option<SamplerRng>> = const { RefCell::new(None) };
}

/// Runs `f` with this thread's default generator.
///
/// The generator is seeded from the clock on first use.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
pub fn with_default<R>(f: impl FnOnce(&mut SamplerRng) -> R) -> R {
    DEFAULT_RNG.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            panic!("global::with_default called re-entrantly from inside its own closure");
        };
        let rng = slot.get_or_insert_with(SamplerRng::from_clock);
        f(rng)
    })
}

/// Replaces this thread's default generator with one seeded from `seed`.
pub fn set_default_seed(seed: i32) {
    DEFAULT_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(rng) => rng.set_seed(seed),
            None => *slot = Some(SamplerRng::from_seed(seed)),
        }
    });
}

/// Seed of this thread's default generator, initialising it if needed.
pub fn default_seed() -> i32 {
    with_default(|rng| rng.seed())
}

/// Whether this thread's default generator has been created yet.
pub fn is_initialised() -> bool {
    DEFAULT_RNG.with(|cell| cell.borrow().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_lazy_initialisation_on_first_draw() {
        thread::spawn(|| {
            assert!(!is_initialised());
            let _ = with_default(|rng| rng.next_float());
            assert!(is_initialised());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_explicit_seed_skips_clock() {
        thread::spawn(|| {
            set_default_seed(1234);
            assert!(is_initialised());
            assert_eq!(default_seed(), 1234);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_reseed_replays_sequence() {
        thread::spawn(|| {
            set_default_seed(42);
            let first: Vec<i32> = (0..3)
                .map(|_| with_default(|rng| rng.next_int(10).unwrap()))
                .collect();
            set_default_seed(42);
            let second: Vec<i32> = (0..3)
                .map(|_| with_default(|rng| rng.next_int(10).unwrap()))
                .collect();
            assert_eq!(first, vec![6, 6, 2]);
            assert_eq!(first, second);
        })
        .join()
        .unwrap();
    }

    #[test]
    #[should_panic(expected = "with_default called re-entrantly")]
    fn test_reentrant_use_panics_with_context() {
        with_default(|_| with_default(|rng| rng.next_float()));
    }

    #[test]
    fn test_threads_have_independent_generators() {
        let a = thread::spawn(|| {
            set_default_seed(9);
            with_default(|rng| rng.next_float())
        });
        let b = thread::spawn(|| {
            set_default_seed(9);
            with_default(|rng| rng.next_float())
        });
        assert_eq!(a.join().unwrap(), b.join().unwrap());
    }
}
