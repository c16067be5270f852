//! Track curve generators. Everything here works in world space.

use std::f32::consts::TAU;
use std::fmt;

use super::world::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Interpolation needs both endpoints.
    TooFewSamples(usize),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooFewSamples(n) => write!(f, "curve needs at least 2 samples, got {}", n),
        }
    }
}

impl std::error::Error for CurveError {}

/// Archimedean spiral around a fixed center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spiral {
    pub center: Point,
    pub r_start: f32,
    pub r_end: f32,
    pub turns: f32,
    pub rotation: Rotation,
    pub samples: usize,
    pub start_angle: f32,
}

/// Circular arc. For clockwise arcs the sweep runs backward from `start` by
/// `end - start`, so mirrored arcs share their parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
    pub rotation: Rotation,
    pub samples: usize,
}

fn sample_params(samples: usize) -> Result<impl Iterator<Item = f32>, CurveError> {
    if samples < 2 {
        return Err(CurveError::TooFewSamples(samples));
    }
    let last = (samples - 1) as f32;
    Ok((0..samples).map(move |i| i as f32 / last))
}

fn polar(center: Point, r: f32, theta: f32) -> Point {
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

impl Spiral {
    pub fn end_angle(&self) -> f32 {
        let sweep = TAU * self.turns;
        match self.rotation {
            Rotation::CounterClockwise => self.start_angle + sweep,
            Rotation::Clockwise => self.start_angle - sweep,
        }
    }

    pub fn points(&self) -> Result<Vec<Point>, CurveError> {
        let th0 = self.start_angle;
        let th1 = self.end_angle();
        Ok(sample_params(self.samples)?
            .map(|t| {
                let theta = th0 + t * (th1 - th0);
                let r = self.r_start + t * (self.r_end - self.r_start);
                polar(self.center, r, theta)
            })
            .collect())
    }
}

impl Arc {
    pub fn end_angle(&self) -> f32 {
        match self.rotation {
            Rotation::CounterClockwise => self.end,
            Rotation::Clockwise => self.start - (self.end - self.start),
        }
    }

    pub fn points(&self) -> Result<Vec<Point>, CurveError> {
        let th0 = self.start;
        let th1 = self.end_angle();
        Ok(sample_params(self.samples)?
            .map(|t| polar(self.center, self.radius, th0 + t * (th1 - th0)))
            .collect())
    }
}
