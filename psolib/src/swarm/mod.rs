pub mod bounds;
pub use bounds::*;

pub mod particle;
pub use particle::*;

pub mod swarm;
pub use swarm::*;
