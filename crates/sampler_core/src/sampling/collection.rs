//! Uniform choice from collections.
//!
//! Choice is a peek by index: the collection is never mutated or consumed
//! beyond the chosen position.

use crate::rng::SamplerRng;
use crate::types::SamplerError;

impl SamplerRng {
    /// Picks one element of `items` uniformly.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::EmptyCollection`] if `items` is empty
    /// - [`SamplerError::InvalidArgument`] if `items.len()` exceeds `i32::MAX`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::SamplerRng;
    ///
    /// let mut rng = SamplerRng::from_seed(42);
    /// let suits = ["hearts", "spades", "clubs", "diamonds"];
    /// let suit = rng.choose(&suits).unwrap();
    /// assert!(suits.contains(suit));
    ///
    /// let empty: [u8; 0] = [];
    /// assert!(rng.choose(&empty).is_err());
    /// ```
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SamplerError> {
        let count = checked_count(items.len())?;
        let index = self.draw_below(count) as usize;
        Ok(&items[index])
    }

    /// Picks one item of an exact-size iterator uniformly.
    ///
    /// Draws the index first, then advances the iterator to it; items after
    /// the chosen one are never produced.
    ///
    /// # Errors
    ///
    /// Same as [`choose`](Self::choose).
    pub fn choose_iter<I>(&mut self, items: I) -> Result<I::Item, SamplerError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let count = checked_count(iter.len())?;
        let index = self.draw_below(count) as usize;
        iter.nth(index).ok_or(SamplerError::EmptyCollection)
    }
}

/// Extension form of [`SamplerRng::choose`] for slices.
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::sampling::Choose;
///
/// let mut rng = SamplerRng::from_seed(1);
/// let names = vec!["ada", "grace", "barbara"];
/// let name = names.choose_with(&mut rng).unwrap();
/// assert!(names.contains(name));
/// ```
pub trait Choose<T> {
    /// Picks one element uniformly using `rng`.
    fn choose_with(&self, rng: &mut SamplerRng) -> Result<&T, SamplerError>;
}

impl<T> Choose<T> for [T] {
    #[inline]
    fn choose_with(&self, rng: &mut SamplerRng) -> Result<&T, SamplerError> {
        rng.choose(self)
    }
}

fn checked_count(len: usize) -> Result<i32, SamplerError> {
    if len == 0 {
        return Err(SamplerError::EmptyCollection);
    }
    i32::try_from(len).map_err(|_| SamplerError::InvalidArgument {
        name: "collection",
        reason: format!("length {} exceeds i32::MAX", len),
    })
}
