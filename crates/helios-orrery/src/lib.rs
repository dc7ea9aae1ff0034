pub mod animator;
pub mod bodies;
pub mod hierarchy;
pub mod impact;
pub mod orrery;

pub use animator::OrbitalAnimator;
pub use hierarchy::{MoonNodes, PlanetNodes, SystemNodes};
pub use impact::{DebrisParticle, ImpactSequencer, SceneMode};
pub use orrery::{SolarSim, EVENT_IMPACT, EVENT_MODE_CHANGED};
