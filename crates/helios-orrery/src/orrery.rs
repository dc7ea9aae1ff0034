//! The solar-system simulation: wires input, animation, and the impact
//! cinematic into the engine's frame order.

use helios_engine::{
    FlyController, InputEvent, InputQueue, SimConfig, SimContext, SimEvent, Simulation,
};

use crate::animator::OrbitalAnimator;
use crate::bodies;
use crate::hierarchy::{self, SystemNodes};
use crate::impact::{ImpactSequencer, SceneMode};

// ── Event kinds to the host UI ───────────────────────────────────────

/// a: 0.0 = peaceful (button reads "trigger"), 1.0 = impact ("reset").
pub const EVENT_MODE_CHANGED: f32 = 1.0;
/// a: node id of the struck body.
pub const EVENT_IMPACT: f32 = 2.0;

pub struct SolarSim {
    seed: u64,
    nodes: Option<SystemNodes>,
    animator: OrbitalAnimator,
    sequencer: ImpactSequencer,
    fly: FlyController,
}

impl SolarSim {
    pub fn new() -> Self {
        Self::with_seed(SimConfig::default().rng_seed)
    }

    /// Run with a specific RNG seed; moons and debris become reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            nodes: None,
            animator: OrbitalAnimator::new(),
            sequencer: ImpactSequencer::new(),
            fly: FlyController::new().with_speed(bodies::CAMERA_SPEED),
        }
    }

    pub fn nodes(&self) -> Option<&SystemNodes> {
        self.nodes.as_ref()
    }

    pub fn sequencer(&self) -> &ImpactSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut ImpactSequencer {
        &mut self.sequencer
    }

    pub fn animator(&self) -> &OrbitalAnimator {
        &self.animator
    }

    fn mode_event(mode: SceneMode) -> SimEvent {
        let a = match mode {
            SceneMode::Peaceful => 0.0,
            SceneMode::Impact => 1.0,
        };
        SimEvent::new(EVENT_MODE_CHANGED, a, 0.0, 0.0)
    }
}

impl Default for SolarSim {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSim {
    fn config(&self) -> SimConfig {
        SimConfig {
            rng_seed: self.seed,
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        ctx.camera.position = bodies::CAMERA_START;
        ctx.camera.look_at(glam::Vec3::ZERO);
        self.nodes = Some(hierarchy::build(ctx));
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        let Some(nodes) = self.nodes.as_ref() else {
            return;
        };

        // ── Queued input ────────────────────────────────────────────
        for event in input.iter() {
            self.fly.handle(event);
            match event {
                InputEvent::Activate => {
                    match self.sequencer.mode() {
                        SceneMode::Peaceful => self.sequencer.trigger(ctx, nodes),
                        SceneMode::Impact => {
                            self.sequencer.reset(ctx, nodes, &mut self.animator)
                        }
                    }
                    ctx.emit_event(Self::mode_event(self.sequencer.mode()));
                }
                InputEvent::Resize { width, height } => {
                    ctx.camera.resize(*width, *height);
                }
                _ => {}
            }
        }

        // ── Fixed frame order: camera, orbits, cinematic ────────────
        self.fly.update(&mut ctx.camera);
        self.animator.tick(&mut ctx.scene, nodes);
        self.sequencer.tick(ctx, nodes);

        if self.sequencer.exploding_active() && self.sequencer.explosion_progress() == 0 {
            let target = nodes.target.map(|id| id.0 as f32).unwrap_or(-1.0);
            ctx.emit_event(SimEvent::new(EVENT_IMPACT, target, 0.0, 0.0));
        }
    }
}
