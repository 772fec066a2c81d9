//! Choose command implementation

use sampler_core::SamplerRng;
use tracing::debug;

use super::{render, OutputFormat};
use crate::Result;

/// Pick `count` items independently and print them.
pub fn run(rng: &mut SamplerRng, items: &[String], count: usize, format: OutputFormat) -> Result<()> {
    debug!(items = items.len(), count, "Choosing items");
    let picks = pick(rng, items, count)?;
    println!("{}", render(&picks, format)?);
    Ok(())
}

/// Independent uniform picks; the input is left untouched.
pub fn pick<'a>(rng: &mut SamplerRng, items: &'a [String], count: usize) -> Result<Vec<&'a String>> {
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        picks.push(rng.choose(items)?);
    }
    Ok(picks)
}
