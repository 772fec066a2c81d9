//! Sample command implementation

use clap::{Args, ValueEnum};
use sampler_core::{Colour, SamplerRng, Vec2, Vec3};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::{render, OutputFormat};
use crate::{CliError, Result};

/// Kind of value to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// true or false, 50/50
    Bool,
    /// Float in [0, max), or [0, 1) without --max
    Float,
    /// Integer in [0, bound)
    Int,
    /// Angle in radians, [0, 2π)
    Angle,
    /// Opaque RGB colour
    Colour,
    /// Direction on the circle, scaled by --magnitude
    Dir2,
    /// Planar direction with z = 0, scaled by --magnitude
    Dir3,
    /// Float in [min, max)
    Range,
    /// Float in [-1, 1)
    SignedUnit,
    /// -1 or 1
    SignedOne,
    /// Chance roll with --probability in [0, 1]
    Chance,
    /// Chance roll with --percent in 0..=100
    ChancePercent,
}

/// Arguments for `sampler sample`
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Kind of value to draw
    #[arg(value_enum)]
    pub kind: SampleKind,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Lower bound for `range`
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f32>,

    /// Upper bound for `float` and `range`
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f32>,

    /// Exclusive integer bound for `int`
    #[arg(long, allow_negative_numbers = true)]
    pub bound: Option<i32>,

    /// Probability for `chance`
    #[arg(long)]
    pub probability: Option<f32>,

    /// Percentage for `chance-percent`
    #[arg(long)]
    pub percent: Option<i32>,

    /// Vector length for `dir2` and `dir3`
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub magnitude: f32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// A single drawn value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Colour(Colour),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Bool(b) => write!(f, "{}", b),
            Sample::Int(i) => write!(f, "{}", i),
            Sample::Float(x) => write!(f, "{}", x),
            Sample::Vec2(v) => write!(f, "{} {}", v.x, v.y),
            Sample::Vec3(v) => write!(f, "{} {} {}", v.x, v.y, v.z),
            Sample::Colour(c) => write!(f, "{} {} {} {}", c.r, c.g, c.b, c.a),
        }
    }
}

/// Draw one value of the requested kind.
pub fn draw(rng: &mut SamplerRng, args: &SampleArgs) -> Result<Sample> {
    let sample = match args.kind {
        SampleKind::Bool => Sample::Bool(rng.next_bool()),
        SampleKind::Float => match args.max {
            Some(max) => Sample::Float(rng.next_float_max(max)),
            None => Sample::Float(rng.next_float()),
        },
        SampleKind::Int => {
            let bound = args.bound.ok_or(CliError::MissingArgument("bound"))?;
            Sample::Int(rng.next_int(bound)?)
        }
        SampleKind::Angle => Sample::Float(rng.next_angle()),
        SampleKind::Colour => Sample::Colour(rng.next_colour()),
        SampleKind::Dir2 => Sample::Vec2(rng.next_direction_2d(args.magnitude)),
        SampleKind::Dir3 => Sample::Vec3(rng.next_direction_3d(args.magnitude)),
        SampleKind::Range => {
            let min = args.min.ok_or(CliError::MissingArgument("min"))?;
            let max = args.max.ok_or(CliError::MissingArgument("max"))?;
            Sample::Float(rng.range(min, max))
        }
        SampleKind::SignedUnit => Sample::Float(rng.signed_unit()),
        SampleKind::SignedOne => Sample::Int(rng.signed_one()),
        SampleKind::Chance => {
            let p = args
                .probability
                .ok_or(CliError::MissingArgument("probability"))?;
            Sample::Bool(rng.chance(p))
        }
        SampleKind::ChancePercent => {
            let p = args.percent.ok_or(CliError::MissingArgument("percent"))?;
            Sample::Bool(rng.chance_percent(p))
        }
    };
    Ok(sample)
}

/// Draw `args.count` values and print them.
pub fn run(rng: &mut SamplerRng, args: &SampleArgs) -> Result<()> {
    debug!(kind = ?args.kind, count = args.count, "Drawing samples");
    let samples = (0..args.count)
        .map(|_| draw(rng, args))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", render(&samples, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: SampleKind) -> SampleArgs {
        SampleArgs {
            kind,
            count: 1,
            min: None,
            max: None,
            bound: None,
            probability: None,
            percent: None,
            magnitude: 1.0,
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_int_pinned_for_seed_42() {
        let mut rng = SamplerRng::from_seed(42);
        let a = SampleArgs {
            bound: Some(10),
            ..args(SampleKind::Int)
        };
        let drawn: Vec<Sample> = (0..3).map(|_| draw(&mut rng, &a).unwrap()).collect();
        assert_eq!(drawn, vec![Sample::Int(6), Sample::Int(6), Sample::Int(2)]);
    }

    #[test]
    fn test_missing_arguments() {
        let mut rng = SamplerRng::from_seed(1);
        for (kind, name) in [
            (SampleKind::Int, "bound"),
            (SampleKind::Range, "min"),
            (SampleKind::Chance, "probability"),
            (SampleKind::ChancePercent, "percent"),
        ] {
            match draw(&mut rng, &args(kind)) {
                Err(CliError::MissingArgument(missing)) => assert_eq!(missing, name),
                other => panic!("expected missing {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_invalid_bound_propagates() {
        let mut rng = SamplerRng::from_seed(1);
        let a = SampleArgs {
            bound: Some(0),
            ..args(SampleKind::Int)
        };
        assert!(matches!(draw(&mut rng, &a), Err(CliError::Sampler(_))));
    }

    #[test]
    fn test_dir3_is_planar() {
        let mut rng = SamplerRng::from_seed(5);
        match draw(&mut rng, &args(SampleKind::Dir3)).unwrap() {
            Sample::Vec3(v) => assert_eq!(v.z, 0.0),
            other => panic!("expected Vec3, got {:?}", other),
        }
    }

    #[test]
    fn test_json_rendering() {
        let samples = vec![Sample::Int(3), Sample::Bool(true), Sample::Vec2(Vec2::new(1.0, 0.0))];
        let json = render(&samples, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0], 3);
        assert_eq!(parsed[1], true);
        assert_eq!(parsed[2]["x"], 1.0);
    }

    #[test]
    fn test_table_rendering() {
        let samples = vec![Sample::Int(-1), Sample::Colour(Colour::rgb(0.5, 0.25, 0.0))];
        let table = render(&samples, OutputFormat::Table).unwrap();
        assert_eq!(table, "-1\n0.5 0.25 0 1");
    }
}
