use crate::api::types::{NodeId, SimEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Seed for the injected random source. Two runs with the same seed
    /// and input stream produce identical scenes.
    pub rng_seed: u64,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Initial viewport size in pixels, used for the starting aspect ratio.
    pub viewport: (f32, f32),
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            rng_seed: 42,
            fov_y_deg: 45.0,
            viewport: (1280.0, 720.0),
            near: 1.0,
            far: 10_000.0,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Setup initial state: build the scene hierarchy, place the camera.
    fn init(&mut self, ctx: &mut SimContext);

    /// One frame tick. Read queued input, advance animation and cinematic
    /// state. Runs before transform propagation and the render call.
    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Simulation::init and update.
/// One owned bundle instead of module-level globals, so the whole frame
/// state can be driven and inspected from tests.
pub struct SimContext {
    pub scene: Scene,
    pub camera: Camera,
    pub rng: Rng,
    pub textures: TextureRegistry,
    pub events: Vec<SimEvent>,
    next_id: u32,
}

impl SimContext {
    pub fn new(config: &SimConfig) -> Self {
        let (w, h) = config.viewport;
        let aspect = if h > 0.0 { w / h } else { 1.0 };
        Self {
            scene: Scene::new(),
            camera: Camera::new(config.fov_y_deg, aspect, config.near, config.far),
            rng: Rng::new(config.rng_seed),
            textures: TextureRegistry::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_monotonic() {
        let mut ctx = SimContext::default();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b, NodeId(a.0 + 1));
    }

    #[test]
    fn context_seeds_rng_from_config() {
        let config = SimConfig {
            rng_seed: 7,
            ..SimConfig::default()
        };
        let mut a = SimContext::new(&config);
        let mut b = SimContext::new(&config);
        assert_eq!(a.rng.next_int(1000), b.rng.next_int(1000));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = SimContext::default();
        ctx.emit_event(SimEvent::new(1.0, 0.0, 0.0, 0.0));
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
