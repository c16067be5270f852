//! Track geometry: the world viewport, curve generators and the scenario
//! catalog. Nothing in here knows about the terminal.

pub mod curves;
pub mod scenario;
pub mod world;

pub use scenario::{catalog, Drawing, Particle, Scenario, Stroke};
pub use world::{Point, World};
