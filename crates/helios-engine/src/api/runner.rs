use crate::api::sim::{SimContext, Simulation};
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::Camera;

/// The external rendering collaborator. Receives the fully-updated scene
/// and camera once per frame; everything else about drawing is its business.
pub trait RenderHost {
    fn render(&mut self, scene: &Scene, camera: &Camera);
}

/// Host that draws nothing. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullHost {
    pub frames_rendered: u64,
}

impl RenderHost for NullHost {
    fn render(&mut self, _scene: &Scene, _camera: &Camera) {
        self.frames_rendered += 1;
    }
}

/// Generic frame driver that wires up the engine loop.
///
/// Fixed per-frame order: queued input is visible to `update`, transforms
/// propagate after all mutation, and only then does the host render.
pub struct Runner<S: Simulation> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    timestep: FixedTimestep,
    initialized: bool,
}

impl<S: Simulation> Runner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        Self {
            ctx: SimContext::new(&config),
            timestep: FixedTimestep::new(config.fixed_dt),
            input: InputQueue::new(),
            initialized: false,
            sim,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.sim.init(&mut self.ctx);
        self.ctx.scene.propagate();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: convert wall-clock dt into whole fixed ticks,
    /// update for each, then propagate transforms and render.
    pub fn tick(&mut self, dt: f32, host: &mut dyn RenderHost) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        self.ctx.scene.propagate();
        host.render(&self.ctx.scene, &self.ctx.camera);
    }

    /// Advance exactly one fixed tick regardless of the accumulator.
    /// Deterministic frame stepping for tests and scripted playback.
    pub fn step(&mut self, host: &mut dyn RenderHost) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        self.sim.update(&mut self.ctx, &self.input);
        self.input.drain();
        self.ctx.scene.propagate();
        host.render(&self.ctx.scene, &self.ctx.camera);
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    pub fn simulation(&self) -> &S {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::core::scene::Node;

    /// Minimal simulation: spawns one node and counts updates.
    struct Counting {
        updates: u32,
        node: Option<NodeId>,
    }

    impl Simulation for Counting {
        fn init(&mut self, ctx: &mut SimContext) {
            let id = ctx.next_id();
            self.node = Some(ctx.scene.spawn(Node::new(id).with_tag("probe")));
        }

        fn update(&mut self, ctx: &mut SimContext, _input: &InputQueue) {
            self.updates += 1;
            if let Some(id) = self.node {
                if let Some(node) = ctx.scene.get_mut(id) {
                    node.local.translation.x += 1.0;
                }
            }
        }
    }

    #[test]
    fn tick_runs_fixed_steps_and_renders() {
        let mut runner = Runner::new(Counting { updates: 0, node: None });
        runner.init();
        let mut host = NullHost::default();

        runner.tick(2.5 / 60.0, &mut host);
        assert_eq!(runner.simulation().updates, 2);
        assert_eq!(host.frames_rendered, 1);
    }

    #[test]
    fn step_advances_exactly_one_frame() {
        let mut runner = Runner::new(Counting { updates: 0, node: None });
        runner.init();
        let mut host = NullHost::default();

        for _ in 0..5 {
            runner.step(&mut host);
        }
        assert_eq!(runner.simulation().updates, 5);
    }

    #[test]
    fn tick_before_init_is_inert() {
        let mut runner = Runner::new(Counting { updates: 0, node: None });
        let mut host = NullHost::default();
        runner.tick(1.0, &mut host);
        assert_eq!(runner.simulation().updates, 0);
        assert_eq!(host.frames_rendered, 0);
    }

    #[test]
    fn input_is_drained_after_update() {
        let mut runner = Runner::new(Counting { updates: 0, node: None });
        runner.init();
        runner.push_input(InputEvent::Activate);
        let mut host = NullHost::default();
        runner.tick(1.0 / 60.0, &mut host);
        assert!(runner.input.is_empty());
    }

    #[test]
    fn propagation_happens_before_render() {
        let mut runner = Runner::new(Counting { updates: 0, node: None });
        runner.init();
        let mut host = NullHost::default();
        runner.step(&mut host);

        let node = runner.context().scene.find_by_tag("probe").unwrap();
        let world = glam::Vec3::from(node.world().translation);
        assert_eq!(world.x, 1.0);
    }
}
